// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Question answering over page-tagged document chunks, without a language model.
//!
//! Give it a document already split into chunks that each know their page, and
//! it will rank those chunks against a question with TF-IDF plus a term-match
//! boost, then pull a structured answer out of the winners: numbered steps if
//! there are any, bullets if not, otherwise the opening sentences of the best
//! chunk. Every answer comes with the pages to cite.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   text/      │────▶│   index/     │────▶│  scoring/    │────▶│   answer/    │
//! │ (normalize,  │     │ (CorpusIndex,│     │ (rank,       │     │ (synthesize, │
//! │  stem)       │     │  tf, idf)    │     │  boost)      │     │  sentences)  │
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲                                          ▲
//!        │                                          │
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  chunking/   │────▶│   store/     │────▶│ processor.rs │
//! │ (pages,      │     │ (Memory,     │     │ (one document│
//! │  splitter)   │     │  Directory)  │     │  session)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use pagewise::{ChunkInput, DocumentProcessor, AnswerKind};
//!
//! let processor = DocumentProcessor::from_inputs(
//!     "manual",
//!     vec![
//!         ChunkInput::new("1. Open the lid\n2. Press power", 3),
//!         ChunkInput::new("- Safety note", 4),
//!     ],
//! );
//!
//! let answer = processor.answer("power", 3).unwrap();
//! assert_eq!(answer.kind, AnswerKind::Steps);
//! assert_eq!(answer.lines, vec!["1. Open the lid", "2. Press power"]);
//! assert_eq!(answer.pages, vec![3]);
//! ```
//!
//! # Feature flags
//!
//! | Feature                 | Default | Effect                                      |
//! |-------------------------|---------|---------------------------------------------|
//! | `parallel`              | yes     | rayon for chunk normalization and scoring   |
//! | `unicode-normalization` | yes     | fold diacritics ("café" indexes as "cafe")  |

pub mod answer;
pub mod chunking;
pub mod config;
mod error;
pub mod index;
pub mod processor;
pub mod scoring;
pub mod store;
pub mod text;
mod types;

#[doc(hidden)]
pub mod testing;

pub use answer::{synthesize, AnswerResponse, NO_RELEVANT_CONTENT_MESSAGE};
pub use chunking::{chunk_document, chunk_text, ChunkerConfig};
pub use config::EngineConfig;
pub use error::EngineError;
pub use index::CorpusIndex;
pub use processor::DocumentProcessor;
pub use scoring::{rank, DEFAULT_LIMIT, MATCH_BOOST};
pub use store::{DirectoryStore, DocumentSource, MemoryStore};
pub use text::normalize;
pub use types::{
    unique_pages, AnswerKind, Chunk, ChunkInput, DocumentSummary, ScoredChunk, StoredDocument,
    StructuredAnswer,
};
