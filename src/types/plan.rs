use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A catalog activity that can be placed into a daily slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Display name of the activity
    pub name: String,
    /// Interest label this activity belongs to (e.g., "History")
    pub category: String,
    /// One or two sentences describing the experience
    pub description: String,
    /// Expected length in hours, between 1 and 4
    pub duration_hours: u8,
    /// Practical advice shown alongside the activity
    pub tip: String,
    /// Attribute tags matched against guardrail rules
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// Guardrail label with the tags it requires and excludes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GuardrailRule {
    /// Label shown to travelers (e.g., "Kid-friendly only")
    pub label: String,
    /// Every selected activity must carry all of these tags
    #[serde(default)]
    pub require_tags: BTreeSet<String>,
    /// No selected activity may carry any of these tags
    #[serde(default)]
    pub exclude_tags: BTreeSet<String>,
}

/// One activity bound to a named time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DaySlotEntry {
    /// Time slot label (Morning, Afternoon, Evening)
    pub slot: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub duration_hours: u8,
    pub tip: String,
}

impl DaySlotEntry {
    pub fn from_activity(slot: impl Into<String>, activity: &Activity) -> Self {
        Self {
            slot: slot.into(),
            name: activity.name.clone(),
            category: activity.category.clone(),
            description: activity.description.clone(),
            duration_hours: activity.duration_hours,
            tip: activity.tip.clone(),
        }
    }
}

/// Per-day itinerary with its theme and slot assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DayPlan {
    /// 1-based day counter within the itinerary
    pub day: u32,
    /// Theme for the day, e.g. "History focus"
    pub theme: String,
    /// Slot entries in daily order
    pub items: Vec<DaySlotEntry>,
    /// Tip for the whole day, acknowledging the active guardrails
    pub daily_tip: String,
}

/// Complete itinerary handed to renderers and the summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ItineraryPlan {
    /// Destination name, never blank
    pub destination: String,
    /// Day-by-day plan
    pub days: Vec<DayPlan>,
    /// Normalized interest labels in the order they were chosen
    pub interests: Vec<String>,
    /// Guardrail labels that were applied
    pub guardrails: Vec<String>,
    /// Human readable guardrail summary
    pub guardrail_message: String,
    /// Comma separated focus interests
    pub highlight_text: String,
    /// Narrative recap produced by the AI summarizer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

impl ItineraryPlan {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Attach a narrative summary, replacing any previous one.
    pub fn with_ai_summary(mut self, summary: impl Into<String>) -> Self {
        self.ai_summary = Some(summary.into());
        self
    }
}
