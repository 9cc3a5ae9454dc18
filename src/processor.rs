// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One document, loaded once, queried many times.
//!
//! ```text
//! DocumentSource::load(id)
//!        │
//!        ▼
//! ChunkInput[] ──normalize (parallel)──▶ Chunk[] ──▶ CorpusIndex
//!                                           │            │
//!                     query ──▶ rank ◀──────┴────────────┘
//!                                 │
//!                                 ▼
//!                       synthesize ──▶ StructuredAnswer
//! ```
//!
//! Construction does all the work. Afterwards the processor is read-only, so
//! queries take `&self` and can run from many threads at once.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::answer::{synthesize, AnswerResponse};
use crate::error::EngineError;
use crate::index::CorpusIndex;
use crate::scoring::rank;
use crate::store::DocumentSource;
use crate::types::{unique_pages, Chunk, ChunkInput, ScoredChunk, StoredDocument, StructuredAnswer};

/// The chunks and index of a single document.
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    document_id: String,
    filename: String,
    chunks: Vec<Chunk>,
    index: CorpusIndex,
}

impl DocumentProcessor {
    /// Load `document_id` from `source` and build its index.
    ///
    /// A document with no chunks still initializes; every query against it
    /// simply finds nothing.
    pub fn initialize<S>(source: &S, document_id: &str) -> Result<Self, EngineError>
    where
        S: DocumentSource + ?Sized,
    {
        let document = source.load(document_id)?;
        Ok(Self::from_document(document_id, document))
    }

    pub fn from_document(document_id: impl Into<String>, document: StoredDocument) -> Self {
        let mut processor = Self::from_inputs(document_id, document.chunks);
        processor.filename = document.filename;
        processor
    }

    /// Build directly from chunk inputs, bypassing any store.
    pub fn from_inputs(document_id: impl Into<String>, inputs: Vec<ChunkInput>) -> Self {
        let document_id = document_id.into();
        let chunks = build_chunks(inputs);
        let index = CorpusIndex::build(&chunks);

        if chunks.is_empty() {
            tracing::warn!(document = %document_id, "document has no chunks; queries will find nothing");
        } else {
            tracing::info!(
                document = %document_id,
                chunks = chunks.len(),
                terms = index.term_count(),
                "initialized document processor"
            );
        }

        Self {
            document_id,
            filename: String::new(),
            chunks,
            index,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Original filename, if the store recorded one.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Distinct page numbers, in chunk order.
    pub fn pages(&self) -> Vec<u32> {
        unique_pages(self.chunks.iter().map(Chunk::page_number))
    }

    /// The `limit` best chunks for `query`, best first. Possibly empty.
    pub fn find_relevant_chunks(&self, query: &str, limit: usize) -> Vec<ScoredChunk<'_>> {
        rank(query, &self.chunks, &self.index, limit)
    }

    /// Rank and synthesize in one step.
    ///
    /// Returns [`EngineError::NoRelevantContent`] when no chunk scores above zero.
    pub fn answer(&self, query: &str, limit: usize) -> Result<StructuredAnswer, EngineError> {
        let ranked = self.find_relevant_chunks(query, limit);
        if ranked.is_empty() {
            tracing::debug!(document = %self.document_id, query, "no relevant content");
            return Err(EngineError::NoRelevantContent);
        }
        synthesize(&ranked, query)
    }

    /// [`answer`](Self::answer) as a response, with "no relevant content"
    /// turned into the fixed reply. Any other error is passed through.
    pub fn respond(&self, query: &str, limit: usize) -> Result<AnswerResponse, EngineError> {
        match self.answer(query, limit) {
            Ok(answer) => Ok(AnswerResponse::from(answer)),
            Err(EngineError::NoRelevantContent) => Ok(AnswerResponse::no_relevant_content()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "parallel")]
fn build_chunks(inputs: Vec<ChunkInput>) -> Vec<Chunk> {
    inputs
        .into_par_iter()
        .enumerate()
        .map(|(i, input)| Chunk::new(i, input.text, input.page_number))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_chunks(inputs: Vec<ChunkInput>) -> Vec<Chunk> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| Chunk::new(i, input.text, input.page_number))
        .collect()
}
