// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Weighted fuzzy search, filtering, sorting, and pagination for TalentAI's
//! list views.
//!
//! Every list in the product - admin user tables, employer job boards, the
//! browse page, application queues - runs the same pipeline over whatever
//! collection the caller supplies. There is no persistence here and no I/O:
//! one synchronous pass per call, over a snapshot, producing a page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  fuzzy/     │────▶│  filter.rs   │────▶│  sort.rs    │
//! │ (weighted   │     │ (AND'd field │     │ (stable,    │
//! │  matcher)   │     │  predicates) │     │  one key)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        ▲                                        │
//!        │                                        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  config.rs  │     │  engine.rs   │◀────│  page.rs    │
//! │ (weights,   │────▶│ (composition │     │ (window     │
//! │  threshold) │     │  root)       │     │  slicing)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use talentai_search::{Record, SearchEngine, SearchOptions, SortOrder};
//!
//! let mut engine = SearchEngine::new();
//! engine.update_data(
//!     vec![],
//!     vec![
//!         Record::new().with("title", "Senior Frontend Developer").with("status", "active"),
//!         Record::new().with("title", "Frontend Intern").with("status", "closed"),
//!     ],
//!     vec![],
//! );
//!
//! let page = engine.search_jobs(
//!     &SearchOptions::query("frontend")
//!         .filter("status", "active")
//!         .sort("title", SortOrder::Asc)
//!         .page(0, 10),
//! );
//! assert_eq!(page.total, 1);
//! assert!(!page.has_more);
//! ```

// Module declarations
pub mod contracts;
mod config;
mod engine;
mod filter;
mod fuzzy;
mod page;
mod sort;
mod store;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::{ConfigError, EngineConfig, FieldWeight, MatcherConfig};
pub use engine::{search_records, SearchEngine};
pub use filter::{apply_filters, matches_filters};
pub use fuzzy::{edit_distance_within, FuzzyMatcher};
pub use page::{page_window, paginate};
pub use sort::{compare_values, sort_records};
pub use store::{MemoryStore, RecordStore, ID_FIELD};
pub use types::{
    FieldValue, FilterValue, Record, SearchOptions, SearchResult, SortOrder,
};
pub use utils::{normalize, tokenize};
