// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance over weighted record fields.
//!
//! Two pieces: a bounded Levenshtein for one-off token comparisons, and the
//! matcher that scores whole records against a query using the configured
//! field weights.

mod levenshtein;
mod matcher;

pub use levenshtein::edit_distance_within;
pub use matcher::FuzzyMatcher;
