//! Activity catalog: interests, daily slots, guardrail rules and activities.
//!
//! The catalog is read-only reference data. The built-in catalog is created
//! once per process and handed out as `&'static Catalog`; fixture or
//! deployment catalogs are loaded from JSON and borrowed by the planner.

mod builtin;

use crate::error::{PlannerError, Result};
use crate::types::{Activity, GuardrailRule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Number of interests used when the traveler picks none we recognize.
pub const DEFAULT_INTEREST_COUNT: usize = 3;

/// Validated catalog. Deserializing always goes through [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    interests: Vec<String>,
    slots: Vec<String>,
    guardrails: Vec<GuardrailRule>,
    activities: Vec<Activity>,
}

/// Catalog JSON as written on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    interests: Vec<String>,
    slots: Vec<String>,
    #[serde(default)]
    guardrails: Vec<GuardrailRule>,
    activities: Vec<Activity>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = PlannerError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        Catalog::new(raw.interests, raw.slots, raw.guardrails, raw.activities)
    }
}

impl Catalog {
    /// Build a catalog, rejecting data the planner cannot work with.
    pub fn new(
        interests: Vec<String>,
        slots: Vec<String>,
        guardrails: Vec<GuardrailRule>,
        activities: Vec<Activity>,
    ) -> Result<Self> {
        let catalog = Self {
            interests,
            slots,
            guardrails,
            activities,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(builtin::catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let raw: RawCatalog =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
                let path = err.path().to_string();
                let location = if path.is_empty() || path == "." {
                    "<root>".to_string()
                } else {
                    path
                };
                PlannerError::Catalog(format!(
                    "failed to parse catalog at {}: {}",
                    location,
                    err.inner()
                ))
            })?;
        Catalog::try_from(raw)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            PlannerError::Catalog(format!(
                "failed to read catalog '{}': {}",
                path.display(),
                err
            ))
        })?;
        let catalog = Self::from_json_str(&raw)?;
        debug!(
            target: "travel_planner::catalog",
            path = %path.display(),
            activities = catalog.activities.len(),
            guardrails = catalog.guardrails.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interests.is_empty() {
            return Err(PlannerError::Catalog(
                "catalog must define at least one interest".to_string(),
            ));
        }
        if self.slots.is_empty() {
            return Err(PlannerError::Catalog(
                "catalog must define at least one daily slot".to_string(),
            ));
        }
        if self.activities.is_empty() {
            return Err(PlannerError::Catalog(
                "catalog must define at least one activity".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for interest in &self.interests {
            if !seen.insert(interest.to_ascii_lowercase()) {
                return Err(PlannerError::Catalog(format!(
                    "duplicate interest label '{}'",
                    interest
                )));
            }
        }

        let mut seen = HashSet::new();
        for rule in &self.guardrails {
            if !seen.insert(rule.label.to_ascii_lowercase()) {
                return Err(PlannerError::Catalog(format!(
                    "duplicate guardrail label '{}'",
                    rule.label
                )));
            }
        }

        for activity in &self.activities {
            if !self.interests.contains(&activity.category) {
                return Err(PlannerError::Catalog(format!(
                    "activity '{}' uses unknown category '{}'",
                    activity.name, activity.category
                )));
            }
            if !(1..=4).contains(&activity.duration_hours) {
                return Err(PlannerError::Catalog(format!(
                    "activity '{}' must last between 1 and 4 hours, got {}",
                    activity.name, activity.duration_hours
                )));
            }
        }

        Ok(())
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn guardrails(&self) -> &[GuardrailRule] {
        &self.guardrails
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn guardrail_labels(&self) -> impl Iterator<Item = &str> {
        self.guardrails.iter().map(|rule| rule.label.as_str())
    }

    /// Interests substituted when none of the requested ones are recognized.
    pub fn default_interests(&self) -> &[String] {
        let count = self.interests.len().min(DEFAULT_INTEREST_COUNT);
        &self.interests[..count]
    }

    /// Exact-label rule lookup.
    pub fn guardrail(&self, label: &str) -> Option<&GuardrailRule> {
        self.guardrails.iter().find(|rule| rule.label == label)
    }

    /// Catalog spelling of an interest, matched ignoring case and surrounding space.
    pub fn canonical_interest(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.interests
            .iter()
            .find(|interest| interest.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    /// Catalog spelling of a guardrail, matched ignoring case and surrounding space.
    pub fn canonical_guardrail(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.guardrails
            .iter()
            .find(|rule| rule.label.eq_ignore_ascii_case(wanted))
            .map(|rule| rule.label.as_str())
    }
}
