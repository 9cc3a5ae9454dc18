// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term-frequency / inverse-document-frequency over one document's chunks.
//!
//! Every chunk is one "document" in the corpus; its id is its position. The
//! index keeps per-document term counts and a corpus-wide document frequency
//! for each stem.
//!
//! # Formulas
//!
//! ```text
//! tf(t, d)  = occurrences of stem t in d's normalized text
//! idf(t)    = 1 + ln(N / (1 + df(t)))       (0 if df(t) = 0)
//! score(q, d) = Σ over unique t in q of tf(t, d) × idf(t)
//! ```
//!
//! # Invariants
//!
//! 1. **DOC_FREQ_CORRECT**: `df(t)` equals the number of documents whose
//!    term counts contain `t`.
//! 2. **IDF_NON_NEGATIVE**: for `1 <= df <= N`, `N / (1 + df) >= 1/2`, so
//!    `idf >= 1 - ln 2 > 0`.
//! 3. **IDF_DECREASING**: `idf` is strictly decreasing in `df`.
//! 4. **FROZEN**: the document set is fixed at build time. Changing it means
//!    building a new index.

use std::collections::{HashMap, HashSet};

use crate::types::Chunk;

type TermCounts = HashMap<String, u32>;

/// TF-IDF statistics for a fixed set of normalized documents.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    documents: Vec<TermCounts>,
    doc_freq: HashMap<String, usize>,
}

impl CorpusIndex {
    /// Index the normalized text of each chunk, in order.
    pub fn build(chunks: &[Chunk]) -> Self {
        Self::from_normalized(chunks.iter().map(Chunk::normalized_text))
    }

    /// Index already-normalized texts; document ids are positions in the iterator.
    pub fn from_normalized<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let documents: Vec<TermCounts> = texts.into_iter().map(count_terms).collect();

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for counts in &documents {
            for term in counts.keys() {
                *doc_freq.entry(term.clone()).or_default() += 1;
            }
        }

        tracing::debug!(
            documents = documents.len(),
            terms = doc_freq.len(),
            "built tf-idf index"
        );

        Self {
            documents,
            doc_freq,
        }
    }

    /// Number of documents (chunks) in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of distinct stems across the corpus.
    pub fn term_count(&self) -> usize {
        self.doc_freq.len()
    }

    /// Number of documents containing `term` at least once.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Occurrences of `term` in document `doc_id`; 0 for unknown ids.
    pub fn term_frequency(&self, term: &str, doc_id: usize) -> u32 {
        self.documents
            .get(doc_id)
            .and_then(|counts| counts.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Inverse document frequency of `term` across the corpus.
    pub fn idf(&self, term: &str) -> f64 {
        match self.doc_freq(term) {
            0 => 0.0,
            df => idf_from_counts(self.len(), df),
        }
    }

    /// Sum of `tf × idf` over the unique terms in `query_terms`.
    pub fn score<S: AsRef<str>>(&self, query_terms: &[S], doc_id: usize) -> f64 {
        let mut seen: HashSet<&str> = HashSet::with_capacity(query_terms.len());
        query_terms
            .iter()
            .map(|term| term.as_ref())
            .filter(|term| seen.insert(*term))
            .map(|term| f64::from(self.term_frequency(term, doc_id)) * self.idf(term))
            .sum()
    }

    /// Every indexed stem with its document frequency, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.doc_freq.iter().map(|(term, df)| (term.as_str(), *df))
    }
}

/// `1 + ln(N / (1 + df))`, the smoothed idf used for every term.
#[inline]
pub fn idf_from_counts(total_docs: usize, doc_freq: usize) -> f64 {
    1.0 + (total_docs as f64 / (1.0 + doc_freq as f64)).ln()
}

fn count_terms(normalized: &str) -> TermCounts {
    let mut counts = TermCounts::new();
    for term in normalized.split_whitespace() {
        *counts.entry(term.to_string()).or_default() += 1;
    }
    counts
}

/// Check DOC_FREQ_CORRECT against the stored term counts.
pub fn check_index_well_formed(index: &CorpusIndex) -> bool {
    let mut recount: HashMap<&str, usize> = HashMap::new();
    for counts in &index.documents {
        if counts.values().any(|&n| n == 0) {
            return false;
        }
        for term in counts.keys() {
            *recount.entry(term.as_str()).or_default() += 1;
        }
    }
    recount.len() == index.doc_freq.len()
        && recount
            .iter()
            .all(|(term, df)| index.doc_freq.get(*term) == Some(df))
}
