// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: from raw prose to the stems that get indexed.
//!
//! The pipeline is fixed and pure:
//!
//! ```text
//! "The device weighs 2kg."
//!   → fold       "the device weighs 2kg."
//!   → tokenize   ["the", "device", "weighs", "2kg"]
//!   → stop words ["device", "weighs", "2kg"]
//!   → stem       ["devic", "weigh", "2kg"]
//!   → join       "devic weigh 2kg"
//! ```
//!
//! Chunks and queries go through the same function, which is the only reason
//! "weighs" in a query can find "weighing" in a document. An empty result means
//! the text had nothing indexable; it is not an error.

mod porter;
mod stop_words;

pub use porter::stem;
pub use stop_words::{is_stop_word, stop_word_count};

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase and, with the `unicode-normalization` feature, strip diacritics.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
///
/// NFD decomposition splits accented letters into base + combining mark, and
/// the marks are dropped.
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) in the blocks that matter for
/// Latin-script documents.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Word boundary detection: anything that isn't a letter or digit separates words.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Fold and split into word tokens. Stop words are still present.
pub fn tokenize(text: &str) -> Vec<String> {
    fold(text)
        .split(is_word_boundary)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize text for indexing and matching: fold, tokenize, drop stop words,
/// stem, and join the stems with single spaces.
pub fn normalize(text: &str) -> String {
    let stems: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|token| !is_stop_word(token))
        .map(|token| stem(&token).into_owned())
        .collect();
    stems.join(" ")
}
