//! End-to-end scenarios mirroring the product's list views.

use super::common::{field_strings, seed_users, seeded_engine};
use talentai_search::{
    EngineConfig, FieldWeight, MatcherConfig, Record, SearchEngine, SearchOptions, SortOrder,
};

/// The browse-jobs view: active frontend roles, alphabetical, first page.
#[test]
fn browse_active_frontend_jobs() {
    let engine = seeded_engine();

    let result = engine.search_jobs(
        &SearchOptions::query("frontend")
            .filter("status", "active")
            .sort("title", SortOrder::Asc)
            .page(0, 10),
    );

    // Exactly the two active Senior Frontend Developer records:
    // not the closed Frontend Intern, not the unmatched DevOps Lead
    assert_eq!(result.total, 2);
    assert!(!result.has_more);
    assert_eq!(
        field_strings(&result, "title"),
        vec!["Senior Frontend Developer", "Senior Frontend Developer"]
    );
    // Equal titles tie; the pre-sort (collection) order breaks the tie
    assert_eq!(field_strings(&result, "company"), vec!["TechCorp", "Acme Studios"]);
}

/// The admin users table: filter by role dropdown.
#[test]
fn admin_filters_users_by_role() {
    let engine = seeded_engine();

    let employers = engine.search_users(&SearchOptions::default().filter("role", "employer"));
    assert_eq!(employers.total, 1);
    assert_eq!(field_strings(&employers, "email"), vec!["employer@techcorp.com"]);

    let seekers = engine.search_users(&SearchOptions::default().filter("role", "job_seeker"));
    assert_eq!(field_strings(&seekers, "name"), vec!["Jane Doe"]);
}

/// A cleared search box plus a reset status dropdown is the identity query.
#[test]
fn blank_query_and_blank_filter_return_everything() {
    let engine = seeded_engine();

    let baseline = engine.search_users(&SearchOptions::default());
    let blanked = {
        let mut options = SearchOptions::query("");
        options = options.filter("status", "");
        engine.search_users(&options)
    };

    assert_eq!(baseline, blanked);
    assert_eq!(baseline.total, seed_users().len());
}

/// The employer dashboard searches applications by candidate.
#[test]
fn employer_searches_applications_by_candidate_name() {
    let engine = seeded_engine();

    let result = engine.search_applications(&SearchOptions::query("jane"));
    assert_eq!(result.total, 1);
    assert_eq!(field_strings(&result, "candidateEmail"), vec!["jane@example.com"]);
}

/// Relevance weighting: a name hit outranks an email-only hit.
#[test]
fn name_matches_outrank_email_matches() {
    let mut engine = SearchEngine::new();
    engine.update_data(
        vec![
            // Email contains "smith"; name does not
            Record::new()
                .with("name", "Ada Lovelace")
                .with("email", "smith@techcorp.com")
                .with("role", "employer"),
            // Name contains "Smith"
            Record::new()
                .with("name", "John Smith")
                .with("email", "john@techcorp.com")
                .with("role", "employer"),
        ],
        vec![],
        vec![],
    );

    let result = engine.search_users(&SearchOptions::query("smith"));
    assert_eq!(field_strings(&result, "name"), vec!["John Smith", "Ada Lovelace"]);
}

/// Tuned weights change ranking without touching the records.
#[test]
fn custom_config_reweights_ranking() {
    let config = EngineConfig {
        users: MatcherConfig::new(vec![
            // Email now dominates
            FieldWeight::new("email", 0.8),
            FieldWeight::new("name", 0.2),
        ]),
        ..EngineConfig::default()
    };
    let mut engine = SearchEngine::with_config(config).unwrap();
    engine.update_data(
        vec![
            Record::new().with("name", "Smith Jones").with("email", "a@example.com"),
            Record::new().with("name", "Ada Lovelace").with("email", "smith@example.com"),
        ],
        vec![],
        vec![],
    );

    let result = engine.search_users(&SearchOptions::query("smith"));
    assert_eq!(field_strings(&result, "name"), vec!["Ada Lovelace", "Smith Jones"]);
}
