// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can go wrong between loading a document and answering a query.
//!
//! Only two of these are part of the normal question-answering flow:
//! `DocumentNotFound` (the caller asked for something that isn't there) and
//! `NoRelevantContent` (the query shares no vocabulary with the document).
//! Neither is worth retrying. The rest come from the store and config layers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The backing store has no document with this identifier.
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// Ranking produced no chunk with a positive score.
    ///
    /// An expected outcome, not a processing failure.
    #[error("no relevant content found for query")]
    NoRelevantContent,

    /// The identifier cannot name a stored document (empty, or contains path components).
    #[error("invalid document id: {0:?}")]
    InvalidDocumentId(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// True for outcomes that are part of normal operation rather than failures.
    pub fn is_no_relevant_content(&self) -> bool {
        matches!(self, EngineError::NoRelevantContent)
    }
}
