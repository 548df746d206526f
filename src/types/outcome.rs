use super::plan::ItineraryPlan;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which generator produced the itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    RuleBased,
    Ai,
}

impl PlanSource {
    pub fn label(self) -> &'static str {
        match self {
            PlanSource::RuleBased => "rule-based",
            PlanSource::Ai => "ai",
        }
    }
}

/// Result of a planning run: the plan plus how it was obtained
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Final itinerary
    pub plan: ItineraryPlan,
    /// Generator that produced `plan`
    pub source: PlanSource,
    /// Why the AI generator was skipped or failed, when it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_error: Option<String>,
    /// Wall-clock time spent planning
    pub duration: Duration,
}

impl PlanOutcome {
    pub fn new(
        plan: ItineraryPlan,
        source: PlanSource,
        ai_error: Option<String>,
        duration: Duration,
    ) -> Self {
        Self {
            plan,
            source,
            ai_error,
            duration,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PlanSource::RuleBased && self.ai_error.is_some()
    }

    /// One-line status for the console, mirroring what the traveler should know
    pub fn status_line(&self) -> String {
        match (self.source, self.ai_error.as_deref()) {
            (PlanSource::Ai, _) => {
                "Itinerary crafted by the AI planner. Adjust interests or guardrails to regenerate."
                    .to_string()
            }
            (PlanSource::RuleBased, Some(reason)) => {
                format!("AI planner unavailable: {reason}. Showing rule-based fallback.")
            }
            (PlanSource::RuleBased, None) => "Using rule-based itinerary.".to_string(),
        }
    }

    /// Generate a human-readable trace of the planning run
    pub fn replay(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== Planning Trace ===".to_string());
        lines.push(format!("Duration: {:.2}s", self.duration.as_secs_f64()));
        lines.push(format!("Source: {}", self.source.label()));
        if let Some(reason) = &self.ai_error {
            lines.push(format!("AI error: {}", reason));
        }
        lines.push(format!("Destination: {}", self.plan.destination));
        lines.push(format!("Days: {}", self.plan.days.len()));
        lines.push(format!("Interests: {}", self.plan.highlight_text));
        lines.push(self.plan.guardrail_message.clone());

        lines.join("\n")
    }
}
