use crate::catalog::Catalog;
use serde::Serialize;
use std::collections::BTreeSet;

/// Tags every activity must carry and tags no activity may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConstraintSet {
    pub require_tags: BTreeSet<String>,
    pub exclude_tags: BTreeSet<String>,
}

impl ConstraintSet {
    pub fn is_empty(&self) -> bool {
        self.require_tags.is_empty() && self.exclude_tags.is_empty()
    }

    /// Same exclusions, no requirements.
    pub fn without_requirements(&self) -> Self {
        Self {
            require_tags: BTreeSet::new(),
            exclude_tags: self.exclude_tags.clone(),
        }
    }

    pub fn allows(&self, tags: &BTreeSet<String>) -> bool {
        tags.is_disjoint(&self.exclude_tags) && self.require_tags.is_subset(tags)
    }
}

/// Union the rules of every recognized guardrail label. Unknown labels are ignored.
pub fn resolve_constraints<S: AsRef<str>>(catalog: &Catalog, guardrails: &[S]) -> ConstraintSet {
    let mut constraints = ConstraintSet::default();
    for label in guardrails {
        let Some(rule) = catalog.guardrail(label.as_ref()) else {
            continue;
        };
        constraints
            .require_tags
            .extend(rule.require_tags.iter().cloned());
        constraints
            .exclude_tags
            .extend(rule.exclude_tags.iter().cloned());
    }
    constraints
}
