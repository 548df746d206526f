use super::schema::{CompletionSchema, SchemaHandle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Itinerary JSON the AI planner asks the model to return.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AiItineraryPayload {
    /// Day-by-day plan in travel order
    pub days: Vec<AiDay>,
    /// One sentence on how the guardrails were honored
    #[serde(default)]
    pub guardrail_message: Option<String>,
    /// Comma separated focus interests
    #[serde(default)]
    pub highlight_text: Option<String>,
    /// Short narrative recap of the whole trip
    #[serde(default)]
    pub ai_summary: Option<String>,
}

/// A single day in the model payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AiDay {
    /// 1-based day counter
    #[serde(default)]
    pub day: Option<u32>,
    /// Theme for the day, e.g. "History focus"
    pub theme: String,
    /// Practical tip for the day
    pub daily_tip: String,
    /// Morning, Afternoon and Evening activities
    pub slots: Vec<AiSlot>,
}

/// A single time slot in the model payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AiSlot {
    /// Morning, Afternoon or Evening
    pub slot: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Expected length in hours
    #[schemars(range(min = 1, max = 4))]
    pub duration_hours: u8,
    pub tip: String,
}

impl CompletionSchema for AiItineraryPayload {
    fn schema() -> &'static SchemaHandle {
        static HANDLE: OnceLock<SchemaHandle> = OnceLock::new();
        HANDLE.get_or_init(|| {
            let root = schemars::schema_for!(AiItineraryPayload);
            SchemaHandle::from_root_schema("itinerary_payload", root)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_required_day_fields() {
        let schema = AiItineraryPayload::schema();
        let json = schema.schema_json();

        assert_eq!(schema.schema_name(), "itinerary_payload");
        assert_eq!(json["type"], "object");
        assert!(json["properties"]["days"].is_object());
        assert!(json["required"]
            .as_array()
            .unwrap()
            .iter()
            .any(|value| value == "days"));
    }

    #[test]
    fn test_schema_handle_is_cached() {
        let first = AiItineraryPayload::schema() as *const SchemaHandle;
        let second = AiItineraryPayload::schema() as *const SchemaHandle;
        assert_eq!(first, second);
    }
}
