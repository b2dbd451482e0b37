// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! The weighted multi-field matcher.
//!
//! Matching is tiered the way users type: an exact token beats a prefix,
//! a prefix beats a substring, a substring beats a typo. Each tier maps to a
//! band of the 0..1 score scale (0 = perfect), so the configured threshold
//! doubles as a tier cutoff:
//!
//! | Tier      | Score band  | Admitted by threshold |
//! |-----------|-------------|-----------------------|
//! | exact     | 0.0         | any                   |
//! | prefix    | (0.0, 0.1)  | >= 0.1                |
//! | substring | (0.1, 0.2)  | >= 0.2                |
//! | fuzzy     | (0.2, 0.3]  | >= 0.3 (the default)  |
//!
//! A record matches when any configured field scores within the threshold;
//! weights only bias the ranking. Scores never leave this module - callers
//! see matched records in ranked order, nothing else.

use crate::config::MatcherConfig;
use crate::fuzzy::levenshtein::edit_distance_within;
use crate::types::{FieldValue, Record};
use crate::utils::{normalize, tokenize};

/// Tolerance for the threshold test, so a score that lands exactly on the
/// boundary is not rejected by floating-point noise.
const THRESHOLD_EPSILON: f64 = 1e-9;

/// Query tokens shorter than this skip the fuzzy tier entirely - a 2-letter
/// token within 1 edit of everything is noise, not tolerance.
const MIN_FUZZY_LEN: usize = 3;

/// Weighted approximate matcher over one entity collection.
///
/// Holds a disposable token index aligned with the collection it was last
/// [`sync`](FuzzyMatcher::sync)ed with. The index is rebuilt wholesale on
/// every sync; there is no incremental update path and none is needed at
/// list-view sizes.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
    /// Per record, per configured key: the field's normalized tokens.
    index: Vec<Vec<Vec<String>>>,
}

impl FuzzyMatcher {
    /// Create a matcher with an empty index. Call `sync` before searching.
    pub fn new(config: MatcherConfig) -> Self {
        FuzzyMatcher {
            config,
            index: Vec::new(),
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Number of records currently indexed.
    pub fn indexed_len(&self) -> usize {
        self.index.len()
    }

    /// Rebuild the token index from the current collection.
    ///
    /// The index holds nothing but normalized tokens - it is fully
    /// disposable and must be rebuilt whenever the collection may have
    /// changed. A stale index is a defect, not a tradeoff.
    pub fn sync(&mut self, records: &[Record]) {
        self.index = records
            .iter()
            .map(|record| {
                self.config
                    .keys
                    .iter()
                    .map(|key| field_tokens(record, &key.field))
                    .collect()
            })
            .collect();
    }

    /// Match the indexed collection against a free-text query.
    ///
    /// Returns positions into the synced collection, best match first.
    /// Records with equal relevance keep their collection order. A blank
    /// query matches nothing - callers skip the matcher for that case and
    /// use the full collection instead.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let query_tokens = tokenize(&normalize(query));
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let match_anything = self.config.threshold >= 1.0;
        let mut ranked: Vec<(usize, f64)> = Vec::new();

        for (position, fields) in self.index.iter().enumerate() {
            let mut relevance = 0.0;
            let mut matched = false;

            for (key, tokens) in self.config.keys.iter().zip(fields) {
                let score = match field_score(&query_tokens, tokens) {
                    Some(score) => score,
                    None if match_anything => 1.0,
                    None => continue,
                };
                if score <= self.config.threshold + THRESHOLD_EPSILON || match_anything {
                    matched = true;
                    relevance += key.weight * (1.0 - score);
                }
            }

            if matched {
                ranked.push((position, relevance));
            }
        }

        // Stable sort: equal relevance keeps collection order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().map(|(position, _)| position).collect()
    }
}

/// Collect a field's matchable tokens: a string field contributes its own
/// tokens, a list field contributes every element's. Numbers, booleans, and
/// nested records are not text and contribute nothing.
fn field_tokens(record: &Record, path: &str) -> Vec<String> {
    match record.get(path) {
        Some(FieldValue::Str(text)) => tokenize(&normalize(text)),
        Some(FieldValue::List(items)) => items
            .iter()
            .flat_map(|item| tokenize(&normalize(item)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Score a field against the full query: every query token must find a match
/// among the field's tokens (AND semantics), and the field's score is the
/// mean of the per-token best scores. `None` when any token misses.
fn field_score(query_tokens: &[String], field_tokens: &[String]) -> Option<f64> {
    if field_tokens.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    for query_token in query_tokens {
        let best = field_tokens
            .iter()
            .filter_map(|token| token_score(query_token, token))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))?;
        sum += best;
    }
    Some(sum / query_tokens.len() as f64)
}

/// Score one query token against one field token, best tier wins.
fn token_score(query: &str, token: &str) -> Option<f64> {
    if query == token {
        return Some(0.0);
    }

    let query_len = query.chars().count();
    let token_len = token.chars().count();
    let length_penalty = 1.0 - query_len as f64 / token_len.max(1) as f64;

    if token.starts_with(query) {
        return Some(0.1 * length_penalty);
    }
    if token.contains(query) {
        return Some(0.1 + 0.1 * length_penalty);
    }

    if query_len >= MIN_FUZZY_LEN {
        let max_edits = if query_len > 5 { 2 } else { 1 };
        if let Some(distance) = edit_distance_within(query, token, max_edits) {
            return Some(0.2 + 0.3 * distance as f64 / query_len as f64);
        }
    }

    None
}
