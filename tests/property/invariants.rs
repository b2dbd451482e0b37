//! Pipeline laws over random collections: totals, idempotence, windows.

use proptest::prelude::*;
use talentai_search::{Record, SearchEngine, SearchOptions, SortOrder};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn status_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "active".to_string(),
        "paused".to_string(),
        "closed".to_string(),
    ])
}

/// Random job-shaped records.
fn job_strategy() -> impl Strategy<Value = Record> {
    (
        word_strategy(),
        word_strategy(),
        status_strategy(),
        0u32..100,
    )
        .prop_map(|(title, company, status, applicants)| {
            Record::new()
                .with("title", title)
                .with("company", company)
                .with("status", status)
                .with("applicants", f64::from(applicants))
        })
}

fn collection_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(job_strategy(), 0..20)
}

fn engine_with(jobs: Vec<Record>) -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.update_data(vec![], jobs, vec![]);
    engine
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// No query + no filters: total equals the collection length.
    #[test]
    fn identity_options_count_everything(jobs in collection_strategy()) {
        let expected = jobs.len();
        let engine = engine_with(jobs);

        let result = engine.search_jobs(&SearchOptions::default());
        prop_assert_eq!(result.total, expected);
        prop_assert_eq!(result.items.len(), expected);
        prop_assert!(!result.has_more);
    }

    /// limit = total, offset = 0 returns every record exactly once
    /// (as a set), regardless of sort.
    #[test]
    fn full_window_is_a_permutation(jobs in collection_strategy()) {
        let engine = engine_with(jobs.clone());

        let options = SearchOptions::default()
            .sort("title", SortOrder::Desc)
            .page(0, jobs.len().max(1));
        let result = engine.search_jobs(&options);

        prop_assert_eq!(result.items.len(), jobs.len());
        for job in &jobs {
            let occurrences =
                result.items.iter().filter(|item| *item == job).count();
            let expected =
                jobs.iter().filter(|other| *other == job).count();
            prop_assert_eq!(occurrences, expected);
        }
    }

    /// Identical options + unchanged collection: identical results.
    #[test]
    fn search_is_idempotent(
        jobs in collection_strategy(),
        query in word_strategy(),
        offset in 0usize..30,
    ) {
        let engine = engine_with(jobs);
        let options = SearchOptions::query(&query)
            .sort("applicants", SortOrder::Desc)
            .page(offset, 5);

        let first = engine.search_jobs(&options);
        let second = engine.search_jobs(&options);
        prop_assert_eq!(first, second);
    }

    /// Every returned item satisfies every supplied filter.
    #[test]
    fn filters_are_conjunctive(jobs in collection_strategy(), status in status_strategy()) {
        let engine = engine_with(jobs);
        let result = engine.search_jobs(
            &SearchOptions::default().filter("status", status.as_str()),
        );

        for item in &result.items {
            let value = item.get("status").and_then(talentai_search::FieldValue::as_str);
            prop_assert_eq!(value, Some(status.as_str()));
        }
    }

    /// Offset past the total yields an empty page with has_more = false.
    #[test]
    fn window_past_total_is_empty(jobs in collection_strategy(), extra in 1usize..50) {
        let offset = jobs.len() + extra;
        let engine = engine_with(jobs);

        let result = engine.search_jobs(&SearchOptions::default().page(offset, 10));
        prop_assert!(result.items.is_empty());
        prop_assert!(!result.has_more);
    }

    /// has_more agrees with the window arithmetic for any offset/limit.
    #[test]
    fn has_more_formula_holds(
        jobs in collection_strategy(),
        offset in 0usize..30,
        limit in 1usize..10,
    ) {
        let engine = engine_with(jobs);
        let result = engine.search_jobs(&SearchOptions::default().page(offset, limit));

        prop_assert!(result.items.len() <= result.total);
        prop_assert_eq!(result.has_more, offset + result.items.len() < result.total);
    }

    /// The page windows tile: walking page by page visits exactly the
    /// records the full window holds, in the same order.
    #[test]
    fn paging_tiles_the_result(jobs in collection_strategy(), limit in 1usize..5) {
        let engine = engine_with(jobs);
        let full = engine.search_jobs(&SearchOptions::default());

        let mut walked = Vec::new();
        let mut offset = 0;
        loop {
            let page = engine.search_jobs(&SearchOptions::default().page(offset, limit));
            let count = page.items.len();
            walked.extend(page.items);
            if !page.has_more {
                break;
            }
            prop_assert!(count > 0, "has_more with an empty page would loop forever");
            offset += count;
        }

        prop_assert_eq!(walked, full.items);
    }
}
