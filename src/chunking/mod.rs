// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page-aware chunking of extracted document text.
//!
//! PDF text extractors separate pages with a form feed (`\x0c`). Text is cut
//! into pages on that character first, numbered from 1, and each page is then
//! split on its own with the `text-splitter` crate:
//!
//! ```text
//! "intro…\x0c\x0c1. Open the lid…"
//!     │        │       │
//!   page 1  page 2   page 3
//!     │     (blank)    │
//!     ▼                ▼
//!  chunks            chunks      (≤ chunk_size chars, chunk_overlap shared)
//! ```
//!
//! A chunk never spans two pages, so every chunk's page number is exact.
//! Blank pages produce no chunks but still use up a page number.

use serde::{Deserialize, Serialize};
use text_splitter::{Characters, ChunkConfig, TextSplitter};

use crate::error::EngineError;
use crate::types::{ChunkInput, StoredDocument};

/// Page separator emitted by PDF text extraction.
pub const PAGE_BREAK: char = '\x0c';

pub const DEFAULT_CHUNK_SIZE: usize = 500;
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Character-capacity settings for the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkerConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ChunkerConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.chunk_size == 0 {
            return Err(EngineError::InvalidConfig("chunk size must be at least 1".into()));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(EngineError::InvalidConfig(format!(
                "chunk overlap ({}) must be smaller than chunk size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }

    fn splitter(&self) -> Result<TextSplitter<Characters>, EngineError> {
        self.validate()?;
        let config = ChunkConfig::new(self.chunk_size)
            .with_overlap(self.chunk_overlap)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?
            .with_trim(true);
        Ok(TextSplitter::new(config))
    }
}

/// Split extracted text into page-tagged chunks, in reading order.
pub fn chunk_text(text: &str, config: &ChunkerConfig) -> Result<Vec<ChunkInput>, EngineError> {
    let splitter = config.splitter()?;

    let mut chunks = Vec::new();
    for (page_number, page) in pages(text) {
        chunks.extend(
            splitter
                .chunks(page)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(|piece| ChunkInput::new(piece, page_number)),
        );
    }

    tracing::debug!(
        chunks = chunks.len(),
        chunk_size = config.chunk_size,
        chunk_overlap = config.chunk_overlap,
        "chunked text"
    );
    Ok(chunks)
}

/// [`chunk_text`] wrapped into a storable document.
pub fn chunk_document(
    filename: impl Into<String>,
    text: &str,
    config: &ChunkerConfig,
) -> Result<StoredDocument, EngineError> {
    Ok(StoredDocument::new(filename, chunk_text(text, config)?))
}

/// Non-blank pages with their 1-based page numbers.
pub fn pages(text: &str) -> impl Iterator<Item = (u32, &str)> {
    text.split(PAGE_BREAK)
        .zip(1u32..)
        .filter(|(page, _)| !page.trim().is_empty())
        .map(|(page, number)| (number, page))
}
