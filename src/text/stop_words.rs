// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stop words: tokens too common to say anything about relevance.
//!
//! Loaded once from `data/stop_words.json`, which maps a language code to a
//! word list. Every list is flattened into one set and folded the same way
//! document text is, so lookups never miss on case or diacritics.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::fold;

static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let json_str = include_str!("../../data/stop_words.json");
    parse_stop_words_json(json_str)
});

/// Flatten `{ "lang": ["word", ...], ... }` into a single folded set.
fn parse_stop_words_json(json_str: &str) -> HashSet<String> {
    let by_language: HashMap<String, Vec<String>> =
        serde_json::from_str(json_str).unwrap_or_default();

    by_language
        .into_values()
        .flatten()
        .map(|word| fold(&word))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Check if an already-folded token is a stop word.
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Number of distinct stop words loaded.
pub fn stop_word_count() -> usize {
    STOP_WORDS.len()
}
