// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked chunks into a structured answer.
//!
//! Three tiers, first match wins, all over the raw (unnormalized) chunk text:
//!
//! | Tier | Looks for                              | Lines | Pages                 |
//! |------|----------------------------------------|-------|-----------------------|
//! | 1    | lines starting `<digits>.` (steps)     | ≤ 5   | every input chunk     |
//! | 2    | lines starting `-` (bullets)           | ≤ 5   | every input chunk     |
//! | 3    | sentences of the first chunk (text)    | ≤ 3   | first chunk only      |
//!
//! Lines are trimmed before matching and blank lines are skipped. List lines
//! are gathered in chunk order, then line order.

use super::sentences::split_sentences;
use crate::error::EngineError;
use crate::types::{unique_pages, AnswerKind, ScoredChunk, StructuredAnswer};

/// Most list lines (steps or bullets) an answer carries.
pub const MAX_LIST_LINES: usize = 5;

/// Most sentences a prose answer carries.
pub const MAX_SENTENCES: usize = 3;

/// A numbered step: one or more ASCII digits immediately followed by `.`.
pub fn is_step_line(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}

/// A bullet: starts with a hyphen.
pub fn is_bullet_line(line: &str) -> bool {
    line.starts_with('-')
}

/// Build a structured answer from ranked chunks.
///
/// `scored` must be the ranker's output, best first. An empty slice means
/// there was nothing to answer from and yields [`EngineError::NoRelevantContent`].
pub fn synthesize(scored: &[ScoredChunk<'_>], query: &str) -> Result<StructuredAnswer, EngineError> {
    let Some(first) = scored.first() else {
        return Err(EngineError::NoRelevantContent);
    };

    let answer = list_answer(scored, AnswerKind::Steps, is_step_line)
        .or_else(|| list_answer(scored, AnswerKind::Bullets, is_bullet_line))
        .unwrap_or_else(|| StructuredAnswer {
            kind: AnswerKind::Text,
            lines: split_sentences(first.chunk.raw_text())
                .into_iter()
                .take(MAX_SENTENCES)
                .map(str::to_string)
                .collect(),
            pages: vec![first.chunk.page_number()],
        });

    tracing::debug!(
        query,
        kind = %answer.kind,
        lines = answer.lines.len(),
        pages = ?answer.pages,
        "synthesized answer"
    );
    Ok(answer)
}

fn list_answer(
    scored: &[ScoredChunk<'_>],
    kind: AnswerKind,
    matches: fn(&str) -> bool,
) -> Option<StructuredAnswer> {
    let lines: Vec<String> = scored
        .iter()
        .flat_map(|s| s.chunk.raw_text().lines())
        .map(str::trim)
        .filter(|line| !line.is_empty() && matches(line))
        .take(MAX_LIST_LINES)
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(StructuredAnswer {
        kind,
        lines,
        pages: unique_pages(scored.iter().map(|s| s.chunk.page_number())),
    })
}
