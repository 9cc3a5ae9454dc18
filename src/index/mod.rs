// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the statistics that make ranking possible.
//!
//! One index type, built once per document session from its chunks and then
//! only read. There is no incremental update; a different chunk set means a
//! new index.

mod tfidf;

pub use tfidf::*;
