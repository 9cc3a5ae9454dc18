// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pagewise command-line interface.
//!
//! Four subcommands: `chunk` turns extracted text into a stored document,
//! `ask` answers a question against one, `inspect` shows what the index
//! learned, and `list` shows what is stored.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pagewise",
    about = "Answer questions from page-tagged documents with TF-IDF ranking",
    version
)]
pub struct Cli {
    /// JSON config file (camelCase keys: limit, chunkSize, chunkOverlap, documentsDir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to find stored documents when `--dir` is given.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Documents directory (overrides documentsDir and PAGEWISE_DOCUMENTS_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chunk extracted text into a stored document
    ///
    /// Pages are separated by form feeds, as PDF text extractors emit them.
    /// Text without form feeds is treated as a single page.
    Chunk {
        /// Extracted plain text file
        #[arg(short, long)]
        input: PathBuf,

        /// Output document file (.json)
        #[arg(short, long)]
        output: PathBuf,

        /// Original filename to record (defaults to the input file name)
        #[arg(long)]
        filename: Option<String>,

        /// Maximum characters per chunk
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Characters shared between adjacent chunks
        #[arg(long)]
        chunk_overlap: Option<usize>,
    },

    /// Answer a question from a stored document
    Ask {
        /// Document id inside the documents directory, or a path to a .json document
        document: String,

        /// Question to answer
        query: String,

        #[command(flatten)]
        store: StoreArgs,

        /// Number of chunks to answer from
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the answer as JSON ({ answer, kind, lines, citations })
        #[arg(long)]
        json: bool,

        /// Also print the ranked chunks and their scores
        #[arg(long)]
        show_chunks: bool,
    },

    /// Show index statistics for a document
    Inspect {
        /// Document id inside the documents directory, or a path to a .json document
        document: String,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// List stored documents
    List {
        #[command(flatten)]
        store: StoreArgs,
    },
}
