//! Shared test fixtures.

#![allow(dead_code)]

use talentai_search::{FieldValue, Record, SearchEngine, SearchResult};

// Re-export canonical record constructors from talentai_search::testing
pub use talentai_search::testing::{
    make_application, make_employer, make_job, make_seeker_with_profile, make_user,
};

/// The three seed users from the demo data: one of each role.
pub fn seed_users() -> Vec<Record> {
    vec![
        make_user("1", "Admin User", "admin@talentai.com", "admin"),
        make_employer("2", "John Smith", "employer@techcorp.com", "TechCorp"),
        make_seeker_with_profile("3", "Jane Doe", "San Francisco, CA"),
    ]
}

/// The five-job scenario collection:
/// - "Backend Engineer" (active, Contract)
/// - "Senior Frontend Developer" ×2 (active, Full-time, different companies)
/// - "DevOps Lead" (paused, Full-time)
/// - "Frontend Intern" (closed, Part-time)
pub fn scenario_jobs() -> Vec<Record> {
    vec![
        job("1", "Backend Engineer", "DataFlow Inc", "active", "Contract", 8.0),
        job("2", "Senior Frontend Developer", "TechCorp", "active", "Full-time", 12.0),
        job("3", "Senior Frontend Developer", "Acme Studios", "active", "Full-time", 5.0),
        job("4", "DevOps Lead", "CloudNine", "paused", "Full-time", 3.0),
        job("5", "Frontend Intern", "TechCorp", "closed", "Part-time", 20.0),
    ]
}

pub fn seed_applications() -> Vec<Record> {
    vec![
        make_application("1", "Jane Doe", "jane@example.com", "passed"),
        make_application("2", "Sam Rivera", "sam@example.com", "pending"),
    ]
}

/// Engine pre-loaded with all three seed collections.
pub fn seeded_engine() -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.update_data(seed_users(), scenario_jobs(), seed_applications());
    engine
}

/// Pull a string field out of every result item, in page order.
pub fn field_strings<'a>(result: &'a SearchResult<Record>, field: &str) -> Vec<&'a str> {
    result
        .items
        .iter()
        .map(|r| r.get(field).and_then(FieldValue::as_str).unwrap_or("?"))
        .collect()
}

fn job(id: &str, title: &str, company: &str, status: &str, job_type: &str, applicants: f64) -> Record {
    Record::new()
        .with("id", id)
        .with("title", title)
        .with("company", company)
        .with("status", status)
        .with("type", job_type)
        .with("applicants", applicants)
        .with("location", "San Francisco, CA")
        .with("createdAt", format!("2026-02-0{}T09:00:00Z", id))
}
