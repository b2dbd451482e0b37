// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record constructors to avoid duplication.

#![doc(hidden)]

use crate::types::{FieldValue, Record};

/// Create a user record with the fields the default matcher config consults.
pub fn make_user(id: &str, name: &str, email: &str, role: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("name", name)
        .with("email", email)
        .with("role", role)
        .with("createdAt", "2026-01-15T10:00:00Z")
}

/// Create an employer user with a company.
pub fn make_employer(id: &str, name: &str, email: &str, company: &str) -> Record {
    make_user(id, name, email, "employer").with("company", company)
}

/// Create a job listing record.
pub fn make_job(id: &str, title: &str, company: &str, status: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("title", title)
        .with("company", company)
        .with("status", status)
        .with("location", "San Francisco, CA")
        .with("type", "Full-time")
        .with("applicants", 0.0)
        .with("createdAt", "2026-02-01T09:00:00Z")
}

/// Create an application record.
pub fn make_application(id: &str, candidate_name: &str, candidate_email: &str, status: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("jobId", "1")
        .with("candidateName", candidate_name)
        .with("candidateEmail", candidate_email)
        .with("status", status)
        .with("score", 0.0)
        .with("appliedAt", "2026-02-10T14:30:00Z")
}

/// Create a job seeker with nested profile data, for dot-path tests.
pub fn make_seeker_with_profile(id: &str, name: &str, location: &str) -> Record {
    make_user(id, name, &format!("{}@example.com", id), "job_seeker").with(
        "profileData",
        FieldValue::Record(
            Record::new()
                .with("location", location)
                .with("skills", vec!["JavaScript".to_string(), "React".to_string()])
                .with("experience", "3 years"),
        ),
    )
}
