// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Filter evaluation: named-field constraints over a candidate list.
//!
//! Every supplied constraint must pass (logical AND). Per entry:
//!
//! - blank filter values (`Null`, `""`) constrain nothing
//! - a multi-select passes records whose field value is a member
//! - string-vs-string is case-insensitive substring containment
//!   (the record's value must *contain* the filter string)
//! - everything else is strict equality
//!
//! Filter keys may be dot-paths (`profileData.location`). A record missing
//! the field fails the entry, unless the entry is a no-op.

use crate::types::{FieldValue, FilterValue, Record};
use std::collections::BTreeMap;

/// Does this record satisfy every non-blank filter?
pub fn matches_filters(record: &Record, filters: &BTreeMap<String, FilterValue>) -> bool {
    filters
        .iter()
        .all(|(path, filter)| filter.is_noop() || matches_entry(record.get(path), filter))
}

/// Narrow a candidate list, preserving relative order.
pub fn apply_filters(records: &[Record], filters: &BTreeMap<String, FilterValue>) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches_filters(record, filters))
        .cloned()
        .collect()
}

fn matches_entry(value: Option<&FieldValue>, filter: &FilterValue) -> bool {
    let value = match value {
        Some(v) => v,
        // Missing field: only a no-op filter passes, and no-ops never get here
        None => return false,
    };

    match (filter, value) {
        (FilterValue::AnyOf(allowed), FieldValue::Str(s)) => allowed.iter().any(|a| a == s),
        (FilterValue::AnyOf(_), _) => false,
        (FilterValue::Str(needle), FieldValue::Str(haystack)) => {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
        (FilterValue::Str(_), _) => false,
        (FilterValue::Number(a), FieldValue::Number(b)) => a == b,
        (FilterValue::Number(_), _) => false,
        (FilterValue::Bool(a), FieldValue::Bool(b)) => a == b,
        (FilterValue::Bool(_), _) => false,
        // Null is a no-op; checked before dispatch
        (FilterValue::Null, _) => true,
    }
}
