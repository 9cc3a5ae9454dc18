// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query ranking.
//!
//! Builds a small corpus and throws arbitrary queries and limits at it. The
//! ranker must never panic and must keep its ordering guarantees.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagewise::{rank, Chunk, CorpusIndex};

#[derive(Debug, Arbitrary)]
struct RankInput {
    chunks: Vec<(String, u8)>,
    query: String,
    limit: u8,
}

fuzz_target!(|input: RankInput| {
    let chunks: Vec<Chunk> = input
        .chunks
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (text, page))| Chunk::new(i, text, u32::from(page) + 1))
        .collect();
    let index = CorpusIndex::build(&chunks);
    let limit = usize::from(input.limit);

    let ranked = rank(&input.query, &chunks, &index, limit);

    assert!(ranked.len() <= limit.max(1));
    assert!(ranked.len() <= chunks.len());
    for scored in &ranked {
        assert!(scored.score.is_finite() && scored.score > 0.0);
        assert!(scored.chunk.index() < chunks.len());
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].chunk.index() < pair[1].chunk.index());
        }
    }
});
