// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for answer synthesis.
//!
//! Any non-empty list of chunks must produce an answer whose lines respect
//! the caps and whose pages never repeat.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagewise::answer::{MAX_LIST_LINES, MAX_SENTENCES};
use pagewise::{synthesize, AnswerKind, Chunk, EngineError, ScoredChunk};

#[derive(Debug, Arbitrary)]
struct AnswerInput {
    chunks: Vec<(String, u16)>,
}

fuzz_target!(|input: AnswerInput| {
    let chunks: Vec<Chunk> = input
        .chunks
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(i, (text, page))| Chunk::new(i, text, u32::from(page)))
        .collect();
    let scored: Vec<ScoredChunk<'_>> = chunks.iter().map(|c| ScoredChunk::new(c, 1.0)).collect();

    let answer = match synthesize(&scored, "fuzz") {
        Ok(answer) => answer,
        Err(EngineError::NoRelevantContent) => {
            assert!(chunks.is_empty());
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    match answer.kind {
        AnswerKind::Steps | AnswerKind::Bullets => {
            assert!(!answer.lines.is_empty() && answer.lines.len() <= MAX_LIST_LINES);
        }
        AnswerKind::Text => {
            assert!(answer.lines.len() <= MAX_SENTENCES);
            assert_eq!(answer.pages, vec![chunks[0].page_number()]);
            if chunks[0].raw_text().contains(['.', '!', '?']) {
                assert!(answer.lines.iter().all(|l| l.ends_with(['.', '!', '?'])));
            }
        }
    }

    for (i, page) in answer.pages.iter().enumerate() {
        assert!(!answer.pages[..i].contains(page), "duplicate page {page}");
    }
});
