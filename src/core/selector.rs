use super::constraints::ConstraintSet;
use crate::catalog::Catalog;
use crate::types::Activity;
use serde::Serialize;
use tracing::{debug, info};

/// Rung of the fallback ladder that produced the activity pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
    /// Interests and guardrails applied as requested
    Strict,
    /// No activity matched the interests, so every category was considered
    InterestsWidened,
    /// Guardrail requirements were dropped; exclusions still hold
    RequirementsDropped,
    /// Nothing survived the exclusions; the whole catalog is used
    FullCatalog,
}

/// Ordered, never-empty pool of activities for one request
#[derive(Debug, Clone)]
pub struct Selection<'c> {
    pub activities: Vec<&'c Activity>,
    pub relaxation: Relaxation,
}

impl Selection<'_> {
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.activities
            .iter()
            .map(|activity| activity.name.as_str())
            .collect()
    }
}

/// Filter the catalog by interests and guardrails, relaxing constraints until
/// at least one activity remains. Catalog order is preserved.
pub fn select_activities<'c>(
    catalog: &'c Catalog,
    interests: &[String],
    constraints: &ConstraintSet,
) -> Selection<'c> {
    let (interest_pool, widened) = filter_by_interest(catalog, interests);

    let strict = apply_guardrails(&interest_pool, constraints);
    if !strict.is_empty() {
        let relaxation = if widened {
            Relaxation::InterestsWidened
        } else {
            Relaxation::Strict
        };
        debug!(
            target: "travel_planner::selector",
            pool = strict.len(),
            ?relaxation,
            "activity pool selected"
        );
        return Selection {
            activities: strict,
            relaxation,
        };
    }

    if !constraints.require_tags.is_empty() {
        let relaxed = apply_guardrails(&interest_pool, &constraints.without_requirements());
        if !relaxed.is_empty() {
            info!(
                target: "travel_planner::selector",
                pool = relaxed.len(),
                dropped = ?constraints.require_tags,
                "guardrail requirements dropped to fill the itinerary"
            );
            return Selection {
                activities: relaxed,
                relaxation: Relaxation::RequirementsDropped,
            };
        }
    }

    info!(
        target: "travel_planner::selector",
        pool = catalog.activities().len(),
        "no activity satisfies the guardrails, using the full catalog"
    );
    Selection {
        activities: catalog.activities().iter().collect(),
        relaxation: Relaxation::FullCatalog,
    }
}

fn filter_by_interest<'c>(catalog: &'c Catalog, interests: &[String]) -> (Vec<&'c Activity>, bool) {
    let everything: Vec<&Activity> = catalog.activities().iter().collect();
    if interests.is_empty() {
        return (everything, false);
    }

    let scoped: Vec<&Activity> = catalog
        .activities()
        .iter()
        .filter(|activity| interests.contains(&activity.category))
        .collect();

    if scoped.is_empty() {
        (everything, true)
    } else {
        (scoped, false)
    }
}

fn apply_guardrails<'c>(pool: &[&'c Activity], constraints: &ConstraintSet) -> Vec<&'c Activity> {
    pool.iter()
        .copied()
        .filter(|activity| constraints.allows(&activity.tags))
        .collect()
}
