//! Pipeline composition: query, filter, sort, and window in fixed order.

use super::common::{field_strings, scenario_jobs, seeded_engine};
use talentai_search::{Record, SearchEngine, SearchOptions, SortOrder};

#[test]
fn no_query_no_filters_returns_collection_order() {
    let engine = seeded_engine();
    let result = engine.search_jobs(&SearchOptions::default());

    assert_eq!(result.total, scenario_jobs().len());
    assert_eq!(
        field_strings(&result, "title"),
        vec![
            "Backend Engineer",
            "Senior Frontend Developer",
            "Senior Frontend Developer",
            "DevOps Lead",
            "Frontend Intern",
        ]
    );
}

#[test]
fn query_narrows_before_filters() {
    let engine = seeded_engine();

    // "frontend" matches three titles; the status filter then drops the intern
    let queried = engine.search_jobs(&SearchOptions::query("frontend"));
    assert_eq!(queried.total, 3);

    let filtered = engine.search_jobs(&SearchOptions::query("frontend").filter("status", "active"));
    assert_eq!(filtered.total, 2);
}

#[test]
fn relevance_order_survives_filtering() {
    let engine = seeded_engine();
    let result = engine.search_jobs(&SearchOptions::query("frontend").filter("type", "Full-time"));

    // Both survivors are title matches with equal relevance: collection order
    assert_eq!(
        field_strings(&result, "company"),
        vec!["TechCorp", "Acme Studios"]
    );
}

#[test]
fn idempotent_for_identical_options() {
    let engine = seeded_engine();
    let options = SearchOptions::query("developer")
        .filter("status", "active")
        .sort("company", SortOrder::Desc)
        .page(0, 3);

    let first = engine.search_jobs(&options);
    let second = engine.search_jobs(&options);
    assert_eq!(first, second);
}

#[test]
fn typo_query_still_finds_jobs() {
    let engine = seeded_engine();
    let result = engine.search_jobs(&SearchOptions::query("devops"));
    assert_eq!(result.total, 1);

    let typo = engine.search_jobs(&SearchOptions::query("devpos"));
    assert_eq!(field_strings(&typo, "title"), vec!["DevOps Lead"]);
}

#[test]
fn queries_search_the_configured_fields_only() {
    let engine = seeded_engine();

    // "cloudnine" lives in the company field
    assert_eq!(engine.search_jobs(&SearchOptions::query("cloudnine")).total, 1);

    // "passed" is an application status, not a job field
    assert_eq!(engine.search_jobs(&SearchOptions::query("passed")).total, 0);
    assert_eq!(engine.search_applications(&SearchOptions::query("passed")).total, 1);
}

#[test]
fn degenerate_engine_never_fails() {
    let engine = SearchEngine::new();

    let result = engine.search_jobs(
        &SearchOptions::query("anything")
            .filter("status", "active")
            .sort("title", SortOrder::Desc)
            .page(100, 10),
    );
    assert!(result.items.is_empty());
    assert_eq!(result.total, 0);
    assert!(!result.has_more);
}

#[test]
fn pure_pipeline_matches_engine_result() {
    use talentai_search::{search_records, EngineConfig, FuzzyMatcher};

    let jobs = scenario_jobs();
    let mut matcher = FuzzyMatcher::new(EngineConfig::default().jobs);
    matcher.sync(&jobs);

    let options = SearchOptions::query("frontend").filter("status", "active");
    let direct = search_records(&jobs, &matcher, &options);
    let via_engine = seeded_engine().search_jobs(&options);

    assert_eq!(direct, via_engine);
}

#[test]
fn collections_are_snapshots_not_references() {
    let mut jobs = scenario_jobs();
    let mut engine = SearchEngine::new();
    engine.update_data(vec![], jobs.clone(), vec![]);

    // Mutating the caller's collection does not affect the engine until resync
    jobs.push(Record::new().with("title", "Frontend Architect").with("status", "active"));
    assert_eq!(engine.search_jobs(&SearchOptions::query("frontend")).total, 3);

    engine.update_data(vec![], jobs, vec![]);
    assert_eq!(engine.search_jobs(&SearchOptions::query("frontend")).total, 4);
}
