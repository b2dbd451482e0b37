// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode assertions over engine invariants.
//!
//! These checks are zero-cost in release builds (`debug_assert!`) and catch
//! pipeline regressions early in development:
//!
//! | Contract                  | Invariant                                    |
//! |---------------------------|----------------------------------------------|
//! | `check_result_shape`      | `items <= total`, `has_more` formula holds   |
//! | `check_window_in_bounds`  | page window is within the candidate list     |
//! | `check_ranked_is_subset`  | matcher output indexes the synced collection |

use crate::types::{Record, SearchResult};
use std::ops::Range;

/// Check that a result page is internally consistent.
///
/// # Panics (debug builds only)
/// Panics if `items.len() > total` or `has_more` disagrees with
/// `offset + items.len() < total`.
#[inline]
pub fn check_result_shape(result: &SearchResult<Record>, offset: usize) {
    debug_assert!(
        result.items.len() <= result.total,
        "page holds {} items but total is {}",
        result.items.len(),
        result.total
    );
    debug_assert_eq!(
        result.has_more,
        offset + result.items.len() < result.total,
        "has_more inconsistent: offset={} returned={} total={}",
        offset,
        result.items.len(),
        result.total
    );
}

/// Check that a page window stays inside the candidate list.
#[inline]
pub fn check_window_in_bounds(window: &Range<usize>, len: usize) {
    debug_assert!(
        window.start <= window.end && window.end <= len,
        "window {}..{} out of bounds for len {}",
        window.start,
        window.end,
        len
    );
}

/// Check that ranked matcher positions index the collection they were
/// built from, with no duplicates.
#[inline]
pub fn check_ranked_is_subset(ranked: &[usize], len: usize) {
    debug_assert!(
        ranked.iter().all(|&position| position < len),
        "ranked position out of bounds for collection of {}",
        len
    );
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::new();
        debug_assert!(
            ranked.iter().all(|position| seen.insert(position)),
            "ranked positions contain a duplicate"
        );
    }
}
