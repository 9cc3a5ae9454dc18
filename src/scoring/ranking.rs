// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: which chunks make the cut, and in what order.
//!
//! Score every chunk, drop anything at or below zero, sort by score
//! descending, keep the first `limit`. Equal scores keep document order: the
//! sort is stable and the comparator falls back to chunk index, so the result
//! is the same whether scoring ran in parallel or not.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::core::{chunk_score, QueryTerms};
use crate::index::CorpusIndex;
use crate::types::{Chunk, ScoredChunk};

/// Compare two scored chunks for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Chunk index** - ascending, so ties keep document order
pub fn compare_scored(a: &ScoredChunk<'_>, b: &ScoredChunk<'_>) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.chunk.index().cmp(&b.chunk.index()),
        ord => ord,
    }
}

/// Rank `chunks` against `query` and return at most `limit` of them.
///
/// `limit` of 0 is treated as 1. An empty result means nothing in the corpus
/// shares vocabulary with the query.
pub fn rank<'a>(
    query: &str,
    chunks: &'a [Chunk],
    index: &CorpusIndex,
    limit: usize,
) -> Vec<ScoredChunk<'a>> {
    let query = QueryTerms::parse(query);
    rank_terms(&query, chunks, index, limit)
}

/// [`rank`] for a query that has already been normalized.
pub fn rank_terms<'a>(
    query: &QueryTerms,
    chunks: &'a [Chunk],
    index: &CorpusIndex,
    limit: usize,
) -> Vec<ScoredChunk<'a>> {
    let limit = limit.max(1);
    if query.is_empty() || chunks.is_empty() {
        tracing::debug!(
            terms = query.terms.len(),
            chunks = chunks.len(),
            "nothing to rank"
        );
        return Vec::new();
    }

    let mut scored = score_all(query, chunks, index);
    scored.retain(|s| s.score > 0.0);
    scored.sort_by(compare_scored);
    scored.truncate(limit);

    tracing::debug!(
        query = %query.processed,
        matched = scored.len(),
        top_score = scored.first().map(|s| s.score),
        "ranked chunks"
    );
    scored
}

#[cfg(feature = "parallel")]
fn score_all<'a>(query: &QueryTerms, chunks: &'a [Chunk], index: &CorpusIndex) -> Vec<ScoredChunk<'a>> {
    chunks
        .par_iter()
        .map(|chunk| ScoredChunk::new(chunk, chunk_score(query, chunk, index)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a>(query: &QueryTerms, chunks: &'a [Chunk], index: &CorpusIndex) -> Vec<ScoredChunk<'a>> {
    chunks
        .iter()
        .map(|chunk| ScoredChunk::new(chunk, chunk_score(query, chunk, index)))
        .collect()
}
