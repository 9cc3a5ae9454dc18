// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File-backed store: one pretty-printed `<id>.json` per document.
//!
//! ```text
//! documents/
//! ├── manual.json        {"filename": "manual.pdf", "chunks": [{"text": ..., "pageNumber": 3}, ...]}
//! └── warranty.json
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{validate_document_id, DocumentSource};
use crate::error::EngineError;
use crate::types::{DocumentSummary, StoredDocument};

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds `document_id`.
    pub fn path_for(&self, document_id: &str) -> Result<PathBuf, EngineError> {
        validate_document_id(document_id)?;
        Ok(self.root.join(format!("{document_id}.{EXTENSION}")))
    }

    /// Write `document` under `document_id`, replacing any previous version.
    pub fn save(&self, document_id: &str, document: &StoredDocument) -> Result<PathBuf, EngineError> {
        let path = self.path_for(document_id)?;
        fs::create_dir_all(&self.root).map_err(|source| EngineError::Io {
            path: self.root.clone(),
            source,
        })?;
        write_document(&path, document)?;
        tracing::debug!(
            id = document_id,
            path = %path.display(),
            chunks = document.chunks.len(),
            "saved document"
        );
        Ok(path)
    }

    /// Delete a stored document. Returns false if it did not exist.
    pub fn delete(&self, document_id: &str) -> Result<bool, EngineError> {
        let path = self.path_for(document_id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(EngineError::Io { path, source }),
        }
    }
}

impl DocumentSource for DirectoryStore {
    fn load(&self, document_id: &str) -> Result<StoredDocument, EngineError> {
        let path = self.path_for(document_id)?;
        match fs::read_to_string(&path) {
            Ok(json) => parse_document(&path, &json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(EngineError::DocumentNotFound(document_id.to_string()))
            }
            Err(source) => Err(EngineError::Io { path, source }),
        }
    }

    fn list(&self) -> Result<Vec<DocumentSummary>, EngineError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(EngineError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| EngineError::Io {
                    path: self.root.clone(),
                    source,
                })?
                .path();

            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if validate_document_id(id).is_err() {
                continue;
            }

            match read_document(&path) {
                Ok(doc) => summaries.push(DocumentSummary::from_document(id, &doc)),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable document"),
            }
        }

        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}

/// Read a stored document from an arbitrary JSON file.
pub fn read_document(path: &Path) -> Result<StoredDocument, EngineError> {
    let json = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &json)
}

/// Write `document` to `path` as pretty JSON.
pub fn write_document(path: &Path, document: &StoredDocument) -> Result<(), EngineError> {
    let json = serde_json::to_string_pretty(document).map_err(|source| EngineError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_document(path: &Path, json: &str) -> Result<StoredDocument, EngineError> {
    serde_json::from_str(json).map_err(|source| EngineError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
