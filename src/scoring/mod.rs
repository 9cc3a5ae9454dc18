// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how chunks get their numbers and their order.
//!
//! `core` holds the per-chunk score (TF-IDF plus a flat substring boost);
//! `ranking` turns scores into a top-K list.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_scored, rank, rank_terms};
