// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use parking_lot::RwLock;
use std::collections::HashMap;

use super::DocumentSource;
use crate::error::EngineError;
use crate::types::{DocumentSummary, StoredDocument};

/// In-memory document store, safe to share between threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, StoredDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document. Returns the previous one, if any.
    pub fn insert(&self, id: impl Into<String>, document: StoredDocument) -> Option<StoredDocument> {
        self.documents.write().insert(id.into(), document)
    }

    pub fn remove(&self, id: &str) -> Option<StoredDocument> {
        self.documents.write().remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentSource for MemoryStore {
    fn load(&self, document_id: &str) -> Result<StoredDocument, EngineError> {
        self.documents
            .read()
            .get(document_id)
            .cloned()
            .ok_or_else(|| EngineError::DocumentNotFound(document_id.to_string()))
    }

    fn list(&self) -> Result<Vec<DocumentSummary>, EngineError> {
        let mut summaries: Vec<DocumentSummary> = self
            .documents
            .read()
            .iter()
            .map(|(id, doc)| DocumentSummary::from_document(id.as_str(), doc))
            .collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}

impl FromIterator<(String, StoredDocument)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (String, StoredDocument)>>(iter: I) -> Self {
        Self {
            documents: RwLock::new(iter.into_iter().collect()),
        }
    }
}
