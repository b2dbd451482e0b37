// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search request.
//!
//! The engine never owns entities. It sees every user, job listing, and
//! application as a [`Record`]: a map from field name to a [`FieldValue`].
//! Callers hand the engine whole collections; the engine hands back a
//! [`SearchResult`] page. Nothing here has identity or lifecycle.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchOptions**: `offset >= 0` always holds (it is a `usize`), and a
//!   `limit` of `Some(0)` never reaches the pipeline - lenient
//!   deserialization degrades it to `None` (no limit). List views must
//!   always render, so malformed options clamp instead of failing.
//!
//! - **SearchResult**: `items.len() <= total` and
//!   `has_more = offset + items.len() < total`. The `total` counts records
//!   after query and filters, before the page window.
//!
//! Rather than trusting every call site, `contracts::check_result_shape`
//! asserts the result invariants in debug builds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// FIELD VALUES AND RECORDS
// =============================================================================

/// A single field value: the typed union of everything a record may hold.
///
/// Nested objects (`profileData.location`) are represented with the `Record`
/// variant so dot-path lookup is an explicit recursive walk instead of
/// unchecked property chaining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null. Treated as "missing" everywhere.
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// Ordered sequence of strings (skills, requirements, benefits).
    List(Vec<String>),
    /// Nested record, addressed through dot-paths.
    Record(Record),
}

impl FieldValue {
    /// The value's text content, if it has one. Lists have no single text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True for `Null` - the explicit form of a missing field.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// An opaque entity: field name → value.
///
/// `BTreeMap` keeps serialization deterministic, which matters for
/// round-trip tests and for diffing CLI output. Collection order (which
/// record comes before which) is owned by the caller's `Vec<Record>`, not by
/// this map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, FieldValue>);

impl Record {
    pub fn new() -> Self {
        Record(BTreeMap::new())
    }

    /// Set a field, replacing any previous value. Returns `self` for chaining.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// Set a field in place.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.0.insert(field.to_string(), value.into());
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.0.remove(field)
    }

    /// Look up a value by dot-separated path.
    ///
    /// `get("profileData.location")` walks into nested records. A missing
    /// field, a missing intermediate, an explicit `Null`, or a non-record
    /// intermediate all resolve to `None` - the record simply does not have
    /// that value, which downstream predicates treat as a non-match.
    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        let mut current = self;
        let mut segments = path.split('.').peekable();

        while let Some(segment) = segments.next() {
            let value = current.0.get(segment)?;
            if segments.peek().is_none() {
                return if value.is_null() { None } else { Some(value) };
            }
            match value {
                FieldValue::Record(nested) => current = nested,
                _ => return None,
            }
        }
        None
    }

    /// Iterate over the record's top-level fields.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Shallow-merge another record's top-level fields into this one.
    ///
    /// Matches the JS object-spread update: incoming fields win, fields not
    /// mentioned survive. An incoming `Null` overwrites (and thereafter reads
    /// as missing).
    pub fn merge(&mut self, patch: Record) {
        for (field, value) in patch.0 {
            self.0.insert(field, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Record(iter.into_iter().collect())
    }
}

// =============================================================================
// FILTERS
// =============================================================================

/// A single filter constraint supplied by a list view.
///
/// Blank values (`Null`, `""`) are deliberate no-ops: dropdowns reset to an
/// empty selection, and the view passes that straight through rather than
/// pruning its filter map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// Multi-select: record passes when its field value is a member.
    AnyOf(Vec<String>),
}

impl FilterValue {
    /// True when this filter constrains nothing (blank dropdown).
    pub fn is_noop(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Str(s.to_string())
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(items: Vec<&str>) -> Self {
        FilterValue::AnyOf(items.into_iter().map(str::to_string).collect())
    }
}

// =============================================================================
// SEARCH OPTIONS
// =============================================================================

/// Sort direction. `Desc` mirrors each comparison outcome; it never reverses
/// the sorted list, which would also reverse ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// One search request from a list view: free-text query, filters, sort, and
/// page window. Every part is optional; the zero value returns the whole
/// collection in its given order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Free-text query. `None` or blank skips the fuzzy matcher entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Field constraints, ANDed together. Keys may be dot-paths.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, FilterValue>,
    /// Sort key (dot-path). `None` keeps relevance or collection order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// Page size. Deserializing a non-positive limit degrades to `None`.
    #[serde(deserialize_with = "lenient_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Page start. Deserializing a negative offset clamps to 0.
    #[serde(deserialize_with = "lenient_offset")]
    pub offset: usize,
}

impl SearchOptions {
    /// Options carrying only a free-text query.
    pub fn query(query: &str) -> Self {
        SearchOptions {
            query: Some(query.to_string()),
            ..SearchOptions::default()
        }
    }

    /// Add a filter. Returns `self` for chaining.
    pub fn filter(mut self, field: &str, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(field.to_string(), value.into());
        self
    }

    /// Set the sort key and direction.
    pub fn sort(mut self, field: &str, order: SortOrder) -> Self {
        self.sort_by = Some(field.to_string());
        self.sort_order = order;
        self
    }

    /// Set the page window.
    pub fn page(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = if limit == 0 { None } else { Some(limit) };
        self
    }

    /// True when the query would actually narrow candidates.
    pub fn has_query(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.trim().is_empty())
    }
}

/// Accept negative offsets from loosely-typed callers and clamp them to 0.
fn lenient_offset<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.max(0) as usize)
}

/// Accept non-positive limits and degrade them to "no limit".
fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|n| if n > 0 { Some(n as usize) } else { None }))
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// One result page plus the counts a table footer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T> {
    /// Page contents, in final (relevance/sorted) order.
    pub items: Vec<T>,
    /// Count after query and filters, before the page window.
    pub total: usize,
    /// Whether another page exists: `offset + items.len() < total`.
    pub has_more: bool,
}

impl<T> SearchResult<T> {
    /// The empty page: what every degenerate input produces.
    pub fn empty() -> Self {
        SearchResult {
            items: Vec::new(),
            total: 0,
            has_more: false,
        }
    }
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        SearchResult::empty()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}
