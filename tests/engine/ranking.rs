//! Ranking behavior: ordering, ties, limits and the boost heuristic.

use super::common::{assert_close, make_corpus, ranked_indices, synthetic_inputs};
use pagewise::{rank, Chunk, CorpusIndex, MATCH_BOOST};

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_rare_term_outranks_common_term() {
    let (chunks, index) = make_corpus(&[
        ("battery charger", 1),
        ("battery firmware", 2),
        ("battery display", 3),
    ]);

    // "firmware" appears once in the corpus, "battery" everywhere
    let ranked = rank("battery firmware", &chunks, &index, 3);
    assert_eq!(ranked[0].chunk.index(), 1);
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn test_scores_descending() {
    let inputs = synthetic_inputs(60, 25);
    let chunks: Vec<Chunk> = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| Chunk::new(i, input.text.as_str(), input.page_number))
        .collect();
    let index = CorpusIndex::build(&chunks);

    let ranked = rank("battery reset button", &chunks, &index, 20);
    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].chunk.index() < pair[1].chunk.index());
        }
    }
}

// ============================================================================
// TIES
// ============================================================================

#[test]
fn test_identical_chunks_keep_document_order() {
    let (chunks, index) = make_corpus(&[
        ("reset button", 7),
        ("reset button", 2),
        ("reset button", 5),
        ("reset button", 1),
    ]);

    let ranked = rank("reset", &chunks, &index, 4);
    assert_eq!(ranked_indices(&ranked), vec![0, 1, 2, 3]);
}

#[test]
fn test_tie_broken_by_index_not_page() {
    let (chunks, index) = make_corpus(&[
        ("display settings", 9),
        ("unrelated cable", 1),
        ("display settings", 1),
    ]);

    let ranked = rank("display", &chunks, &index, 3);
    assert_eq!(ranked_indices(&ranked), vec![0, 2]);
}

// ============================================================================
// LIMIT
// ============================================================================

#[test]
fn test_limit_is_min_of_limit_and_matches() {
    let (chunks, index) = make_corpus(&[
        ("reset button", 1),
        ("reset clock", 1),
        ("factory reset", 2),
        ("speaker volume", 2),
    ]);

    assert_eq!(rank("reset", &chunks, &index, 1).len(), 1);
    assert_eq!(rank("reset", &chunks, &index, 2).len(), 2);
    assert_eq!(rank("reset", &chunks, &index, 3).len(), 3);
    assert_eq!(rank("reset", &chunks, &index, 50).len(), 3);
}

#[test]
fn test_zero_limit_behaves_as_one() {
    let (chunks, index) = make_corpus(&[("reset button", 1), ("reset clock", 1)]);
    assert_eq!(ranked_indices(&rank("reset", &chunks, &index, 0)), vec![0]);
}

// ============================================================================
// BOOST
// ============================================================================

#[test]
fn test_duplicate_query_terms_boost_twice() {
    let (chunks, index) = make_corpus(&[("press power", 1), ("lid", 2)]);

    let once = rank("power", &chunks, &index, 1);
    let twice = rank("power power", &chunks, &index, 1);
    assert_close(once[0].score, 1.0 + MATCH_BOOST);
    // TF-IDF counts the term once; the boost counts it twice
    assert_close(twice[0].score, 1.0 + 2.0 * MATCH_BOOST);
}

#[test]
fn test_substring_boost_alone_is_enough_to_rank() {
    let (chunks, index) = make_corpus(&[("solid state", 1), ("lid", 2)]);

    let ranked = rank("lid", &chunks, &index, 3);
    assert_eq!(ranked_indices(&ranked), vec![1, 0]);
    assert_close(ranked[0].score, 1.0 + MATCH_BOOST);
    assert_close(ranked[1].score, MATCH_BOOST);
}

#[test]
fn test_stop_word_query_finds_nothing() {
    let (chunks, index) = make_corpus(&[("the lid is open", 1)]);
    assert!(rank("is the", &chunks, &index, 3).is_empty());
}

#[test]
fn test_query_matches_across_case_and_inflection() {
    let (chunks, index) = make_corpus(&[("Connecting the charger", 1), ("Screen brightness", 2)]);
    let ranked = rank("CONNECTED", &chunks, &index, 3);
    assert_eq!(ranked_indices(&ranked), vec![0]);
}
