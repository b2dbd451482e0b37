// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Single-key ordering with stable ties.
//!
//! Sorting a list view must never crash it, so the comparator is total and
//! forgiving: values of different kinds, and missing values, compare as
//! equal. An unrecognized sort key therefore collapses the sort into a
//! stable no-op - the list keeps its pre-sort order.
//!
//! # Invariants
//!
//! - Ties retain their relative input order, for both directions. That is
//!   why `Desc` mirrors each comparison outcome instead of reversing the
//!   ascending result - reversing a list also reverses its ties.
//! - The sorted list is a permutation of the input: same length, same
//!   contents.

use crate::types::{FieldValue, Record, SortOrder};
use std::cmp::Ordering;

/// Compare two field values the way a list view expects.
///
/// Numbers compare numerically, strings lexicographically, booleans
/// false < true, lists element-wise then by length. Mixed kinds and missing
/// values are equal - there is no meaningful order between them, and
/// treating them as equal keeps the sort stable instead of arbitrary.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Str(x)), Some(FieldValue::Str(y))) => x.cmp(y),
        (Some(FieldValue::Bool(x)), Some(FieldValue::Bool(y))) => x.cmp(y),
        (Some(FieldValue::List(x)), Some(FieldValue::List(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Order records by one dot-path key. Stable; `Desc` mirrors `Asc`.
pub fn sort_records(records: &mut [Record], sort_by: &str, order: SortOrder) {
    records.sort_by(|a, b| {
        let comparison = compare_values(a.get(sort_by), b.get(sort_by));
        match order {
            SortOrder::Asc => comparison,
            SortOrder::Desc => comparison.reverse(),
        }
    });
}
