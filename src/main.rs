// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pagewise::store::{read_document, write_document};
use pagewise::{
    chunk_document, synthesize, AnswerResponse, DirectoryStore, DocumentProcessor, DocumentSource,
    EngineConfig, ScoredChunk, NO_RELEVANT_CONTENT_MESSAGE,
};

mod cli;
use cli::display::{
    error, idf_value, kind_badge, pad_right, pages_label, row, score_value, section_bot, section_mid,
    section_top, themed, truncate_text, warning, wrapped_rows, BOLD, CYAN, GRAY,
};
use cli::{Cli, Commands, StoreArgs};

/// Used when neither `--dir`, `documentsDir` nor `PAGEWISE_DOCUMENTS_DIR` is set.
const DEFAULT_DOCUMENTS_DIR: &str = "documents";

/// Terms shown at each end of the discriminative-term table in `inspect`.
const INSPECT_TERMS: usize = 8;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", error("❌"), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "pagewise=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Chunk {
            input,
            output,
            filename,
            chunk_size,
            chunk_overlap,
        } => run_chunk(&config, &input, &output, filename, chunk_size, chunk_overlap),
        Commands::Ask {
            document,
            query,
            store,
            limit,
            json,
            show_chunks,
        } => {
            let processor = open_document(&config, &store, &document)?;
            let limit = limit.unwrap_or(config.limit);
            run_ask(&processor, &query, limit, json, show_chunks)
        }
        Commands::Inspect { document, store } => {
            let processor = open_document(&config, &store, &document)?;
            run_inspect(&processor);
            Ok(())
        }
        Commands::List { store } => run_list(&documents_dir(&config, &store)),
    }
}

fn documents_dir(config: &EngineConfig, store: &StoreArgs) -> PathBuf {
    store
        .dir
        .clone()
        .or_else(|| config.documents_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENTS_DIR))
}

/// `document` is a path if it names a `.json` file, otherwise an id in the store.
fn open_document(config: &EngineConfig, store: &StoreArgs, document: &str) -> Result<DocumentProcessor> {
    let path = Path::new(document);
    let is_file = path.extension().is_some_and(|ext| ext == "json") && path.is_file();

    if is_file {
        let stored = read_document(path)?;
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| document.to_string());
        return Ok(DocumentProcessor::from_document(id, stored));
    }

    let dir = documents_dir(config, store);
    let source = DirectoryStore::new(&dir);
    DocumentProcessor::initialize(&source, document)
        .with_context(|| format!("failed to open document {document:?} in {}", dir.display()))
}

// ═══════════════════════════════════════════════════════════════════════════
// CHUNK
// ═══════════════════════════════════════════════════════════════════════════

fn run_chunk(
    config: &EngineConfig,
    input: &Path,
    output: &Path,
    filename: Option<String>,
    chunk_size: Option<usize>,
    chunk_overlap: Option<usize>,
) -> Result<()> {
    let mut chunker = config.chunker();
    if let Some(size) = chunk_size {
        chunker.chunk_size = size;
    }
    if let Some(overlap) = chunk_overlap {
        chunker.chunk_overlap = overlap;
    }

    let text = fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let filename = filename.unwrap_or_else(|| {
        input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let document = chunk_document(filename, &text, &chunker)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    write_document(output, &document)?;

    if document.chunks.is_empty() {
        eprintln!("{} {} has no text to chunk", warning("⚠"), input.display());
    }
    println!(
        "  ✓ Wrote {} chunks across {} pages to {}",
        document.chunks.len(),
        document.pages().len(),
        output.display()
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// ASK
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct AskOutput<'a> {
    #[serde(flatten)]
    response: AnswerResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    chunks: Option<Vec<ScoredChunk<'a>>>,
}

fn run_ask(processor: &DocumentProcessor, query: &str, limit: usize, json: bool, show_chunks: bool) -> Result<()> {
    let ranked = processor.find_relevant_chunks(query, limit);
    let answer = if ranked.is_empty() {
        None
    } else {
        Some(synthesize(&ranked, query)?)
    };

    if json {
        let output = AskOutput {
            response: answer
                .as_ref()
                .map_or_else(AnswerResponse::no_relevant_content, AnswerResponse::from),
            chunks: show_chunks.then(|| ranked.clone()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let Some(answer) = answer else {
        println!("{}", warning(NO_RELEVANT_CONTENT_MESSAGE));
        return Ok(());
    };

    section_top("ANSWER");
    row(&kind_badge(answer.kind));
    row("");
    for line in &answer.lines {
        wrapped_rows(line);
    }
    section_mid("CITATIONS");
    row(&pages_label(&answer.pages));

    if show_chunks {
        section_mid("RANKED CHUNKS");
        for scored in &ranked {
            let chunk = scored.chunk;
            row(&format!(
                "{}  #{:<3} {}",
                score_value(scored.score),
                chunk.index(),
                themed(GRAY, &[], &format!("page {}", chunk.page_number()))
            ));
            let preview = truncate_text(&chunk.raw_text().split_whitespace().collect::<Vec<_>>().join(" "), 150);
            wrapped_rows(&preview);
        }
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(processor: &DocumentProcessor) {
    let index = processor.index();

    section_top("DOCUMENT");
    row(&format!("id        {}", processor.document_id()));
    if !processor.filename().is_empty() {
        row(&format!("filename  {}", processor.filename()));
    }
    row(&format!("chunks    {}", processor.len()));
    row(&format!("pages     {}", pages_label(&processor.pages())));
    row(&format!("terms     {}", index.term_count()));

    if index.term_count() > 0 {
        let mut terms: Vec<(&str, usize)> = index.terms().collect();
        terms.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        section_mid("MOST DISCRIMINATIVE");
        for (term, _) in terms.iter().take(INSPECT_TERMS) {
            term_row(processor, term);
        }

        section_mid("MOST COMMON");
        let mut common = terms.clone();
        common.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        for (term, _) in common.iter().take(INSPECT_TERMS) {
            term_row(processor, term);
        }
    }

    section_mid("CHUNKS");
    for chunk in processor.chunks() {
        let terms = chunk.normalized_text().split_whitespace().count();
        let preview = truncate_text(&chunk.raw_text().split_whitespace().collect::<Vec<_>>().join(" "), 52);
        row(&format!(
            "#{:<3} {} {:>4} terms  {}",
            chunk.index(),
            themed(GRAY, &[], &format!("p{:<4}", chunk.page_number())),
            terms,
            preview
        ));
    }
    section_bot();
}

fn term_row(processor: &DocumentProcessor, term: &str) {
    let index = processor.index();
    row(&format!(
        "{} df {:>4}   idf {}",
        pad_right(&themed(CYAN, &[BOLD], term), 24),
        index.doc_freq(term),
        idf_value(index.idf(term))
    ));
}

// ═══════════════════════════════════════════════════════════════════════════
// LIST
// ═══════════════════════════════════════════════════════════════════════════

fn run_list(dir: &Path) -> Result<()> {
    let store = DirectoryStore::new(dir);
    let documents = store.list()?;

    if documents.is_empty() {
        println!("No documents in {}", dir.display());
        return Ok(());
    }

    section_top("DOCUMENTS");
    for doc in &documents {
        row(&format!(
            "{} {:<28} {:>4} chunks {:>4} pages",
            pad_right(&themed(CYAN, &[BOLD], &doc.id), 24),
            truncate_text(&doc.filename, 28),
            doc.chunk_count,
            doc.page_count
        ));
    }
    section_bot();
    Ok(())
}
