// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Sources, later ones win:
//!
//! 1. Built-in defaults
//! 2. A JSON file (`--config`), camelCase keys, every key optional
//! 3. `PAGEWISE_LIMIT`, `PAGEWISE_DOCUMENTS_DIR`
//! 4. Command-line flags (applied by the binary)
//!
//! ```json
//! { "limit": 3, "chunkSize": 500, "chunkOverlap": 50, "documentsDir": "./documents" }
//! ```
//!
//! The ranking boost and answer line caps are fixed constants, not settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chunking::{ChunkerConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::error::EngineError;
use crate::scoring::DEFAULT_LIMIT;

pub const LIMIT_ENV: &str = "PAGEWISE_LIMIT";
pub const DOCUMENTS_DIR_ENV: &str = "PAGEWISE_DOCUMENTS_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Chunks returned per query.
    pub limit: usize,
    /// Maximum characters per chunk.
    pub chunk_size: usize,
    /// Characters shared by adjacent chunks on the same page.
    pub chunk_overlap: usize,
    /// Root of the file-backed document store.
    pub documents_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            documents_dir: None,
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let json = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| EngineError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then `path` if given, then the environment. Validated.
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment-style lookups. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(LIMIT_ENV).filter(|v| !v.trim().is_empty()) {
            self.limit = raw.trim().parse().map_err(|_| {
                EngineError::InvalidConfig(format!("{LIMIT_ENV} must be a positive integer, got {raw:?}"))
            })?;
        }
        if let Some(dir) = lookup(DOCUMENTS_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.documents_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.limit == 0 {
            return Err(EngineError::InvalidConfig("limit must be at least 1".into()));
        }
        self.chunker().validate()
    }

    pub fn chunker(&self) -> ChunkerConfig {
        ChunkerConfig {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
        }
    }
}
