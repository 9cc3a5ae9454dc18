// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Answer synthesis: from ranked chunks to steps, bullets, or sentences.
//!
//! Instructional structure wins over prose. If any ranked chunk carries
//! numbered steps those are the answer; failing that, hyphen bullets; only
//! then the opening sentences of the best chunk.

mod response;
mod sentences;
mod synthesize;

pub use response::{AnswerResponse, NO_RELEVANT_CONTENT_MESSAGE};
pub use sentences::split_sentences;
pub use synthesize::{is_bullet_line, is_step_line, synthesize, MAX_LIST_LINES, MAX_SENTENCES};
