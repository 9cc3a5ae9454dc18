// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the text normalizer.
//!
//! Arbitrary UTF-8 goes through fold, tokenize, stop-word removal and
//! stemming. Nothing may panic, and the output must be space-joined tokens.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pagewise::text::{normalize, stem};

fuzz_target!(|data: &[u8]| {
    let text: String = String::from_utf8_lossy(data).chars().take(4096).collect();
    let text = text.as_str();

    let normalized = normalize(text);

    assert!(!normalized.starts_with(' '), "leading space in {normalized:?}");
    assert!(!normalized.ends_with(' '), "trailing space in {normalized:?}");
    assert!(!normalized.contains("  "), "double space in {normalized:?}");

    // Deterministic
    assert_eq!(normalize(text), normalized);

    // The stemmer must accept any token, including non-ASCII ones.
    for token in text.split_whitespace() {
        let stemmed = stem(token);
        assert!(stemmed.len() <= token.len() || !token.is_ascii());
    }
});
