// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a question-answering session.
//!
//! | Type               | Lifetime                         | Purpose                        |
//! |--------------------|----------------------------------|--------------------------------|
//! | `ChunkInput`       | stored / wire format             | Text + page from the chunker   |
//! | `StoredDocument`   | stored / wire format             | What a document store returns  |
//! | `Chunk`            | one `DocumentProcessor`          | Raw + normalized text, indexed |
//! | `ScoredChunk`      | one query                        | Borrowed chunk + its score     |
//! | `StructuredAnswer` | one query                        | Steps, bullets, or sentences   |
//!
//! # Invariants
//!
//! - **Chunk**: `index` is the position in the processor's chunk list and
//!   doubles as the document id in the TF-IDF index. `normalized_text` is
//!   always `normalize(raw_text)`. Nothing is mutable after construction.
//!
//! - **StructuredAnswer**: `lines.len() <= 5` for steps and bullets,
//!   `<= 3` for text. `pages` has no duplicates and keeps first-seen order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::normalize;

// =============================================================================
// STORED FORMAT
// =============================================================================

/// One chunk as produced by the chunker and kept by a document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkInput {
    pub text: String,
    pub page_number: u32,
}

impl ChunkInput {
    pub fn new(text: impl Into<String>, page_number: u32) -> Self {
        Self {
            text: text.into(),
            page_number,
        }
    }
}

/// A document as a store hands it over: a filename and its ordered chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub chunks: Vec<ChunkInput>,
}

impl StoredDocument {
    pub fn new(filename: impl Into<String>, chunks: Vec<ChunkInput>) -> Self {
        Self {
            filename: filename.into(),
            chunks,
        }
    }

    /// Distinct page numbers, in first-seen order.
    pub fn pages(&self) -> Vec<u32> {
        unique_pages(self.chunks.iter().map(|c| c.page_number))
    }
}

/// Listing entry for a stored document; chunk bodies are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub filename: String,
    pub chunk_count: usize,
    pub page_count: usize,
}

impl DocumentSummary {
    pub fn from_document(id: impl Into<String>, doc: &StoredDocument) -> Self {
        Self {
            id: id.into(),
            filename: doc.filename.clone(),
            chunk_count: doc.chunks.len(),
            page_count: doc.pages().len(),
        }
    }
}

// =============================================================================
// SESSION TYPES
// =============================================================================

/// An immutable, page-tagged unit of document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    index: usize,
    raw_text: String,
    normalized_text: String,
    page_number: u32,
}

impl Chunk {
    /// Build a chunk, normalizing its text once up front.
    pub fn new(index: usize, raw_text: impl Into<String>, page_number: u32) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize(&raw_text);
        Self {
            index,
            raw_text,
            normalized_text,
            page_number,
        }
    }

    /// Position in the owning processor's chunk list; also the index document id.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[inline]
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    #[inline]
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// True if normalization left nothing to index.
    pub fn is_blank(&self) -> bool {
        self.normalized_text.is_empty()
    }
}

/// A chunk paired with its relevance score for one query.
///
/// Borrows from the processor that owns the chunk; never outlives the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredChunk<'a> {
    #[serde(serialize_with = "serialize_chunk")]
    pub chunk: &'a Chunk,
    pub score: f64,
}

impl<'a> ScoredChunk<'a> {
    pub fn new(chunk: &'a Chunk, score: f64) -> Self {
        Self { chunk, score }
    }
}

fn serialize_chunk<S>(chunk: &&Chunk, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeStruct;
    let mut state = serializer.serialize_struct("Chunk", 3)?;
    state.serialize_field("index", &chunk.index)?;
    state.serialize_field("pageNumber", &chunk.page_number)?;
    state.serialize_field("text", &chunk.raw_text)?;
    state.end()
}

// =============================================================================
// ANSWERS
// =============================================================================

/// Which extraction strategy produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    /// Numbered lines ("1. Open the lid").
    Steps,
    /// Hyphen-prefixed lines ("- Safety note").
    Bullets,
    /// Leading sentences of the best chunk.
    Text,
}

impl AnswerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerKind::Steps => "steps",
            AnswerKind::Bullets => "bullets",
            AnswerKind::Text => "text",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The synthesized answer plus the pages to cite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAnswer {
    pub kind: AnswerKind,
    pub lines: Vec<String>,
    pub pages: Vec<u32>,
}

impl fmt::Display for StructuredAnswer {
    /// Steps and bullets print one per line; sentences run together as prose.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.kind {
            AnswerKind::Steps | AnswerKind::Bullets => "\n",
            AnswerKind::Text => " ",
        };
        f.write_str(&self.lines.join(separator))
    }
}

/// De-duplicate page numbers, keeping first-seen order.
pub fn unique_pages(pages: impl IntoIterator<Item = u32>) -> Vec<u32> {
    let mut seen = Vec::new();
    for page in pages {
        if !seen.contains(&page) {
            seen.push(page);
        }
    }
    seen
}
