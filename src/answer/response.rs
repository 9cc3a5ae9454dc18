// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `{ answer, citations }` response shape handed to front ends.

use serde::Serialize;

use crate::types::{AnswerKind, StructuredAnswer};

/// Shown when ranking finds nothing to answer from.
pub const NO_RELEVANT_CONTENT_MESSAGE: &str = "No relevant content found in the document.";

/// A rendered answer with the pages it cites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    /// Display text: list lines one per line, sentences joined by spaces.
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnswerKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    pub citations: Vec<u32>,
}

impl AnswerResponse {
    /// The fixed reply for a query with no vocabulary overlap.
    pub fn no_relevant_content() -> Self {
        Self {
            answer: NO_RELEVANT_CONTENT_MESSAGE.to_string(),
            kind: None,
            lines: Vec::new(),
            citations: Vec::new(),
        }
    }
}

impl From<&StructuredAnswer> for AnswerResponse {
    fn from(answer: &StructuredAnswer) -> Self {
        Self {
            answer: answer.to_string(),
            kind: Some(answer.kind),
            lines: answer.lines.clone(),
            citations: answer.pages.clone(),
        }
    }
}

impl From<StructuredAnswer> for AnswerResponse {
    fn from(answer: StructuredAnswer) -> Self {
        Self {
            answer: answer.to_string(),
            kind: Some(answer.kind),
            lines: answer.lines,
            citations: answer.pages,
        }
    }
}
