// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind chunk relevance.
//!
//! A chunk's score for a query is its TF-IDF score plus a flat boost for every
//! query term that appears as a substring of the chunk's normalized text:
//!
//! ```text
//! score(q, c) = tfidf(unique terms of q, c) + MATCH_BOOST × |{ t ∈ terms(q) : t ⊂ norm(c) }|
//! ```
//!
//! The boost side counts duplicate query terms every time they occur, and the
//! substring test means "lid" also matches inside "solid". Neither is tidy,
//! and neither is normalized against chunk length. Both are kept exactly:
//! rankings must not drift.
//!
//! # Constants
//!
//! | Name            | Value | Meaning                                  |
//! |-----------------|-------|------------------------------------------|
//! | `MATCH_BOOST`   | 0.5   | Added per substring-matching query term  |
//! | `DEFAULT_LIMIT` | 3     | Chunks returned when the caller has no preference |

use crate::index::CorpusIndex;
use crate::text::normalize;
use crate::types::Chunk;

/// Flat bonus per query term found inside a chunk's normalized text.
pub const MATCH_BOOST: f64 = 0.5;

/// Default number of chunks returned by ranking.
pub const DEFAULT_LIMIT: usize = 3;

/// A query after normalization, split into terms (duplicates kept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    pub processed: String,
    pub terms: Vec<String>,
}

impl QueryTerms {
    pub fn parse(query: &str) -> Self {
        let processed = normalize(query);
        let terms = processed.split_whitespace().map(str::to_string).collect();
        Self { processed, terms }
    }

    /// Nothing indexable survived normalization.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Substring boost: `MATCH_BOOST` for every query term (duplicates included)
/// contained in the normalized text.
pub fn match_boost(terms: &[String], normalized_text: &str) -> f64 {
    let hits = terms
        .iter()
        .filter(|term| normalized_text.contains(term.as_str()))
        .count();
    MATCH_BOOST * hits as f64
}

/// Full relevance score of one chunk for one query.
pub fn chunk_score(query: &QueryTerms, chunk: &Chunk, index: &CorpusIndex) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    index.score(&query.terms, chunk.index()) + match_boost(&query.terms, chunk.normalized_text())
}
