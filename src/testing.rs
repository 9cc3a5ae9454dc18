// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! Always compiled but hidden from documentation.

#![doc(hidden)]

use crate::index::CorpusIndex;
use crate::processor::DocumentProcessor;
use crate::store::MemoryStore;
use crate::types::{Chunk, ChunkInput, StoredDocument};

/// Chunks numbered in order from `(text, page)` pairs.
pub fn make_chunks(texts: &[(&str, u32)]) -> Vec<Chunk> {
    texts
        .iter()
        .enumerate()
        .map(|(i, (text, page))| Chunk::new(i, *text, *page))
        .collect()
}

/// Chunks plus the index built over them.
pub fn make_corpus(texts: &[(&str, u32)]) -> (Vec<Chunk>, CorpusIndex) {
    let chunks = make_chunks(texts);
    let index = CorpusIndex::build(&chunks);
    (chunks, index)
}

pub fn make_inputs(texts: &[(&str, u32)]) -> Vec<ChunkInput> {
    texts
        .iter()
        .map(|(text, page)| ChunkInput::new(*text, *page))
        .collect()
}

pub fn make_processor(texts: &[(&str, u32)]) -> DocumentProcessor {
    DocumentProcessor::from_inputs("test", make_inputs(texts))
}

/// The two-chunk device manual used throughout the tests.
pub fn manual_inputs() -> Vec<ChunkInput> {
    make_inputs(&[("1. Open the lid\n2. Press power", 3), ("- Safety note", 4)])
}

/// A memory store holding `manual_inputs()` under the id "manual".
pub fn manual_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert("manual", StoredDocument::new("manual.pdf", manual_inputs()));
    store
}

/// Words for synthetic corpora: technical vocabulary that survives stemming
/// mostly intact, mixed with stop words that normalization drops.
pub const VOCABULARY: &[&str] = &[
    "battery", "charger", "display", "firmware", "sensor", "bluetooth", "reset", "button",
    "power", "cable", "adapter", "screen", "volume", "speaker", "warranty", "update", "wireless",
    "network", "settings", "calibration", "the", "and", "of", "to", "is", "in", "for", "with",
];

/// Deterministic pseudo-random corpus: `n` chunks of `words` words each, pages
/// advancing every 4 chunks, every fifth chunk laid out as numbered steps.
pub fn synthetic_inputs(n: usize, words: usize) -> Vec<ChunkInput> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..n)
        .map(|i| {
            let body: Vec<&str> = (0..words)
                .map(|_| VOCABULARY[(next() % VOCABULARY.len() as u64) as usize])
                .collect();
            let text = if i % 5 == 0 {
                body.chunks(6)
                    .enumerate()
                    .map(|(step, words)| format!("{}. {}", step + 1, words.join(" ")))
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                format!("{}.", body.join(" "))
            };
            ChunkInput::new(text, (i / 4) as u32 + 1)
        })
        .collect()
}
