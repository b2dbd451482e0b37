// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! The composition root: one entry point per entity type.
//!
//! Every search runs the same fixed pipeline:
//!
//! ```text
//! query?   ──▶ fuzzy matcher (ranked candidates)
//! no query ──▶ full collection, given order
//!     │
//!     ▼
//! filters (AND) ──▶ sort? ──▶ total ──▶ page window ──▶ SearchResult
//! ```
//!
//! The engine owns a snapshot per entity type plus its matcher index, both
//! replaced wholesale by [`update_data`](SearchEngine::update_data). Search
//! calls read only that snapshot, so the index can never disagree with the
//! data it was built from. Callers who prefer handing the collection in on
//! every call (no engine state at all) use [`search_records`] directly.
//!
//! Failure semantics: there are none. Empty collections, absent filters,
//! unknown sort keys, and out-of-range pages all degrade to empty or no-op,
//! never to an error - list views always render something.

use crate::config::{ConfigError, EngineConfig, MatcherConfig};
use crate::contracts;
use crate::filter::matches_filters;
use crate::fuzzy::FuzzyMatcher;
use crate::page::page_window;
use crate::sort::sort_records;
use crate::types::{Record, SearchOptions, SearchResult};

/// One entity type's snapshot and matcher index, kept in lockstep.
#[derive(Debug, Clone)]
struct EntityIndex {
    records: Vec<Record>,
    matcher: FuzzyMatcher,
}

impl EntityIndex {
    fn new(config: MatcherConfig) -> Self {
        EntityIndex {
            records: Vec::new(),
            matcher: FuzzyMatcher::new(config),
        }
    }

    fn replace(&mut self, records: Vec<Record>) {
        self.matcher.sync(&records);
        self.records = records;
    }
}

/// Search across users, job listings, and applications.
///
/// ```
/// use talentai_search::{Record, SearchEngine, SearchOptions, SortOrder};
///
/// let mut engine = SearchEngine::new();
/// let jobs = vec![
///     Record::new().with("title", "Senior Frontend Developer").with("status", "active"),
///     Record::new().with("title", "Backend Engineer").with("status", "active"),
/// ];
/// engine.update_data(vec![], jobs, vec![]);
///
/// let options = SearchOptions::query("frontend")
///     .filter("status", "active")
///     .sort("title", SortOrder::Asc)
///     .page(0, 10);
/// let page = engine.search_jobs(&options);
/// assert_eq!(page.total, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    users: EntityIndex,
    jobs: EntityIndex,
    applications: EntityIndex,
}

impl SearchEngine {
    /// Engine with the default per-entity weights.
    pub fn new() -> Self {
        // Default config is valid by construction (covered in config tests)
        Self::with_config(EngineConfig::default()).expect("default config is valid")
    }

    /// Engine with custom weights/thresholds. Rejects degenerate configs
    /// up front so search calls never have to.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SearchEngine {
            users: EntityIndex::new(config.users),
            jobs: EntityIndex::new(config.jobs),
            applications: EntityIndex::new(config.applications),
        })
    }

    /// Resynchronize all three indices with the current collections.
    ///
    /// Collections are replaced wholesale - the engine never merges. Call
    /// this after any create/update/delete; searching against a stale
    /// snapshot is a defect in the caller.
    pub fn update_data(
        &mut self,
        users: Vec<Record>,
        jobs: Vec<Record>,
        applications: Vec<Record>,
    ) {
        self.users.replace(users);
        self.jobs.replace(jobs);
        self.applications.replace(applications);
    }

    pub fn search_users(&self, options: &SearchOptions) -> SearchResult<Record> {
        search_records(&self.users.records, &self.users.matcher, options)
    }

    pub fn search_jobs(&self, options: &SearchOptions) -> SearchResult<Record> {
        search_records(&self.jobs.records, &self.jobs.matcher, options)
    }

    pub fn search_applications(&self, options: &SearchOptions) -> SearchResult<Record> {
        search_records(&self.applications.records, &self.applications.matcher, options)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new()
    }
}

/// Run the full pipeline over one collection.
///
/// The matcher must be synced with `records` - `SearchEngine` guarantees
/// that; direct callers sync before each call. Pure with respect to its
/// inputs: same collection + options, same result.
pub fn search_records(
    records: &[Record],
    matcher: &FuzzyMatcher,
    options: &SearchOptions,
) -> SearchResult<Record> {
    // 1. Free-text query narrows via the matcher; no query keeps the
    //    collection in its given order.
    let mut candidates: Vec<Record> = if options.has_query() {
        let query = options.query.as_deref().unwrap_or_default();
        let ranked = matcher.search(query);
        contracts::check_ranked_is_subset(&ranked, records.len());
        ranked
            .into_iter()
            .filter_map(|position| records.get(position).cloned())
            .collect()
    } else {
        records.to_vec()
    };

    // 2. Filters, AND semantics, order preserved.
    if !options.filters.is_empty() {
        candidates.retain(|record| matches_filters(record, &options.filters));
    }

    // 3. Optional sort; otherwise relevance order (query) or given order.
    if let Some(sort_by) = options.sort_by.as_deref() {
        sort_records(&mut candidates, sort_by, options.sort_order);
    }

    // 4. Total before the window.
    let total = candidates.len();

    // 5. Page window, clipped.
    let window = page_window(total, options.offset, options.limit);
    contracts::check_window_in_bounds(&window, total);
    let items = candidates[window].to_vec();

    // 6. Assemble.
    let result = SearchResult {
        has_more: options.offset + items.len() < total,
        items,
        total,
    };
    contracts::check_result_shape(&result, options.offset);
    result
}
