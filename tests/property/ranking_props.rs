//! Ranking properties: bounded by limit, ordered, stable under ties.

use pagewise::scoring::{chunk_score, QueryTerms};
use pagewise::{rank, Chunk, CorpusIndex};
use proptest::prelude::*;

use super::common::VOCABULARY;

fn word_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCABULARY.to_vec())
}

fn chunk_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..15).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Chunk>> {
    prop::collection::vec((chunk_text_strategy(), 1u32..10), 0..20).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, (text, page))| Chunk::new(i, text, page))
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..5).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: result length is min(limit, chunks scoring above zero).
    #[test]
    fn prop_rank_respects_limit(chunks in corpus_strategy(), query in query_strategy(), limit in 1usize..8) {
        let index = CorpusIndex::build(&chunks);
        let terms = QueryTerms::parse(&query);
        let positive = chunks
            .iter()
            .filter(|c| chunk_score(&terms, c, &index) > 0.0)
            .count();

        let ranked = rank(&query, &chunks, &index, limit);
        prop_assert_eq!(ranked.len(), limit.min(positive));
    }

    /// Property: scores descend, every score is positive, equal scores keep
    /// document order.
    #[test]
    fn prop_rank_ordered_and_stable(chunks in corpus_strategy(), query in query_strategy()) {
        let index = CorpusIndex::build(&chunks);
        let ranked = rank(&query, &chunks, &index, chunks.len().max(1));

        for scored in &ranked {
            prop_assert!(scored.score > 0.0);
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].chunk.index() < pair[1].chunk.index());
            }
        }
    }

    /// Property: copies of one chunk come back in document order.
    #[test]
    fn prop_identical_chunks_rank_in_order(copies in 1usize..12, word in word_strategy(), limit in 1usize..12) {
        let chunks: Vec<Chunk> = (0..copies)
            .map(|i| Chunk::new(i, format!("{word} manual"), (i % 3) as u32 + 1))
            .collect();
        let index = CorpusIndex::build(&chunks);

        let ranked = rank(word, &chunks, &index, limit);
        let indices: Vec<usize> = ranked.iter().map(|s| s.chunk.index()).collect();
        let expected: Vec<usize> = if QueryTerms::parse(word).is_empty() {
            Vec::new()
        } else {
            (0..copies.min(limit)).collect()
        };
        prop_assert_eq!(indices, expected);
    }

    /// Property: ranking the same query twice gives the same answer.
    #[test]
    fn prop_rank_deterministic(chunks in corpus_strategy(), query in query_strategy()) {
        let index = CorpusIndex::build(&chunks);
        let first: Vec<(usize, f64)> = rank(&query, &chunks, &index, 5)
            .iter()
            .map(|s| (s.chunk.index(), s.score))
            .collect();
        let second: Vec<(usize, f64)> = rank(&query, &chunks, &index, 5)
            .iter()
            .map(|s| (s.chunk.index(), s.score))
            .collect();
        prop_assert_eq!(first, second);
    }
}
