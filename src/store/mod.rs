// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where documents come from.
//!
//! The engine never owns persistence. It asks a [`DocumentSource`] for a
//! document's chunks by identifier and builds its index from whatever comes
//! back. Two sources ship with the crate:
//!
//! | Store            | Backing                              | Use                     |
//! |------------------|--------------------------------------|-------------------------|
//! | `MemoryStore`    | `RwLock<HashMap<id, document>>`      | tests, embedding        |
//! | `DirectoryStore` | one `<id>.json` file per document    | the CLI                 |

mod directory;
mod memory;

pub use directory::{read_document, write_document, DirectoryStore};
pub use memory::MemoryStore;

use crate::error::EngineError;
use crate::types::{DocumentSummary, StoredDocument};

/// Loads stored documents by identifier.
///
/// Implementations must report an unknown identifier as
/// [`EngineError::DocumentNotFound`]; the processor passes it through as is.
pub trait DocumentSource {
    fn load(&self, document_id: &str) -> Result<StoredDocument, EngineError>;

    /// Summaries of every document the source can load, sorted by id.
    fn list(&self) -> Result<Vec<DocumentSummary>, EngineError>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn load(&self, document_id: &str) -> Result<StoredDocument, EngineError> {
        (**self).load(document_id)
    }

    fn list(&self) -> Result<Vec<DocumentSummary>, EngineError> {
        (**self).list()
    }
}

/// Check that `id` can name a stored document.
///
/// Accepts ASCII letters, digits, `-`, `_` and `.`, not starting with `.`.
/// Anything that could step outside a store's root is rejected.
pub fn validate_document_id(id: &str) -> Result<(), EngineError> {
    let valid = !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(EngineError::InvalidDocumentId(id.to_string()))
    }
}
