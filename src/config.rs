// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Matcher configuration: which fields to match and how loosely.
//!
//! Weights and thresholds started life as empirically tuned numbers in the
//! production list views. They are defaults here, not constants - load a
//! JSON override when tuning relevance, don't edit the source.
//!
//! # Invariants
//!
//! - `keys` is non-empty: a matcher with nothing to match is a config bug,
//!   not an empty result.
//! - Every `weight > 0`: zero-weighted fields would match but contribute no
//!   relevance, silently flattening the ranking.
//! - `threshold ∈ [0, 1]`: 0 = exact matches only, 1 = match anything.
//!
//! `MatcherConfig::validate` enforces all three; `SearchEngine::with_config`
//! refuses invalid configs up front.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A matchable field and its share of the relevance ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    /// Field name, dot-paths allowed (`profileData.location`).
    pub field: String,
    /// Relative contribution to relevance. Higher-weighted fields push
    /// records up the ranking; they never exclude lower-weighted matches.
    pub weight: f64,
}

impl FieldWeight {
    pub fn new(field: &str, weight: f64) -> Self {
        FieldWeight {
            field: field.to_string(),
            weight,
        }
    }
}

/// Per-entity-type fuzzy matching configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Fields consulted by the matcher, with ranking weights.
    pub keys: Vec<FieldWeight>,
    /// Match looseness: 0 = exact only, 1 = match anything.
    pub threshold: f64,
}

impl MatcherConfig {
    /// Default looseness, carried over from the production views.
    pub const DEFAULT_THRESHOLD: f64 = 0.3;

    pub fn new(keys: Vec<FieldWeight>) -> Self {
        MatcherConfig {
            keys,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Check the config invariants. Call once at construction; the matcher
    /// assumes a valid config afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keys.is_empty() {
            return Err(ConfigError::NoKeys);
        }
        for key in &self.keys {
            if key.field.is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            if key.weight <= 0.0 || key.weight.is_nan() {
                return Err(ConfigError::NonPositiveWeight {
                    field: key.field.clone(),
                    weight: key.weight,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.threshold) || self.threshold.is_nan() {
            return Err(ConfigError::ThresholdOutOfRange {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

/// The full engine configuration: one matcher config per entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub users: MatcherConfig,
    pub jobs: MatcherConfig,
    pub applications: MatcherConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.users.validate()?;
        self.jobs.validate()?;
        self.applications.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            users: MatcherConfig::new(vec![
                FieldWeight::new("name", 0.4),
                FieldWeight::new("email", 0.3),
                FieldWeight::new("company", 0.2),
                FieldWeight::new("role", 0.1),
            ]),
            jobs: MatcherConfig::new(vec![
                FieldWeight::new("title", 0.4),
                FieldWeight::new("company", 0.3),
                FieldWeight::new("location", 0.2),
                FieldWeight::new("requirements", 0.1),
            ]),
            applications: MatcherConfig::new(vec![
                FieldWeight::new("candidateName", 0.4),
                FieldWeight::new("candidateEmail", 0.3),
                FieldWeight::new("status", 0.3),
            ]),
        }
    }
}

/// Error type for configuration violations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A matcher config has no keys at all.
    NoKeys,
    /// A key has an empty field name.
    EmptyFieldName,
    /// A key's weight is zero, negative, or NaN.
    NonPositiveWeight { field: String, weight: f64 },
    /// Threshold is outside `[0, 1]` or NaN.
    ThresholdOutOfRange { threshold: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoKeys => write!(f, "matcher config has no keys"),
            ConfigError::EmptyFieldName => write!(f, "matcher key has an empty field name"),
            ConfigError::NonPositiveWeight { field, weight } => {
                write!(f, "weight {} for field '{}' is not positive", weight, field)
            }
            ConfigError::ThresholdOutOfRange { threshold } => {
                write!(f, "threshold {} is outside [0, 1]", threshold)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
