// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers, and their order.
//!
//! `core` turns a (query, target) pair into an additive relevance score.
//! `ranking` orders academic materials, where relevance is only the sixth of
//! seven keys: a pinned exam from this year beats a better-matching note from
//! five years ago.

mod core;
pub mod ranking;

pub use self::core::*;
