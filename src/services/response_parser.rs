//! Maps whatever JSON a model returns onto `ItineraryPlan`.
//!
//! Missing or mistyped fields are replaced with defaults. Only a response with
//! no JSON object at all, or with no usable days, is rejected.

use serde_json::Value;
use tracing::debug;

use crate::catalog::Catalog;
use crate::core::{
    guardrail_message, highlight_text, normalize_destination, normalize_interests,
    selected_guardrails,
};
use crate::error::{PlannerError, Result};
use crate::types::{DayPlan, DaySlotEntry, ItineraryPlan, TripRequest};

const DEFAULT_DURATION_HOURS: u8 = 2;
const DEFAULT_THEME: &str = "Balanced focus";
const DEFAULT_DAILY_TIP: &str = "Blend must-see icons with slow blocks.";
const DEFAULT_SLOT_NAME: &str = "Experience";
const DEFAULT_SLOT_CATEGORY: &str = "General";
const DEFAULT_SLOT_TIP: &str = "Capture a few photos.";
const DEFAULT_HIGHLIGHT: &str = "Varied interests";

/// Slice out the outermost `{ ... }` block of a model reply.
pub fn extract_json_block(raw_text: &str) -> Result<&str> {
    let trimmed = raw_text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(&trimmed[start..=end]),
        _ => Err(PlannerError::Validation(
            "JSON block not found in AI response.".to_string(),
        )),
    }
}

/// Parse a raw model reply into a JSON value.
pub fn parse_payload(raw_text: &str) -> Result<Value> {
    let block = extract_json_block(raw_text)?;
    serde_json::from_str(block).map_err(|err| {
        PlannerError::Validation(format!(
            "AI response was not valid JSON ({err}). Try regenerating."
        ))
    })
}

/// Build a plan from a model payload, normalizing it into the rule-based schema.
pub fn plan_from_payload(
    payload: &Value,
    request: &TripRequest,
    catalog: &Catalog,
) -> Result<ItineraryPlan> {
    let interests = normalize_interests(catalog, &request.interests);
    let guardrails = selected_guardrails(&request.guardrails);
    let requested_days = request.day_count().get() as usize;

    let raw_days = payload
        .get("days")
        .and_then(Value::as_array)
        .filter(|days| !days.is_empty())
        .or_else(|| payload.get("daily_plan").and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default();

    if raw_days.len() > requested_days {
        debug!(
            target: "travel_planner::ai",
            returned = raw_days.len(),
            requested = requested_days,
            "truncating extra days from AI response"
        );
    }

    let days: Vec<DayPlan> = raw_days
        .iter()
        .take(requested_days)
        .enumerate()
        .map(|(index, day)| parse_day(day, index as u32 + 1, catalog.slots()))
        .collect();

    if days.is_empty() {
        return Err(PlannerError::Validation(
            "AI response did not contain any days.".to_string(),
        ));
    }

    let guardrail_message = non_blank_str(payload, "guardrail_message")
        .map(str::to_string)
        .unwrap_or_else(|| guardrail_message(&guardrails));
    let highlight_text = non_blank_str(payload, "highlight_text")
        .map(str::to_string)
        .unwrap_or_else(|| match highlight_text(&interests) {
            text if text.is_empty() => DEFAULT_HIGHLIGHT.to_string(),
            text => text,
        });
    let ai_summary = non_blank_str(payload, "ai_summary")
        .or_else(|| non_blank_str(payload, "summary"))
        .map(str::to_string);

    Ok(ItineraryPlan {
        destination: normalize_destination(&request.destination),
        days,
        interests,
        guardrails,
        guardrail_message,
        highlight_text,
        ai_summary,
    })
}

fn parse_day(day: &Value, position: u32, slots: &[String]) -> DayPlan {
    let raw_slots = day
        .get("slots")
        .and_then(Value::as_array)
        .filter(|slots| !slots.is_empty())
        .or_else(|| day.get("items").and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut items: Vec<DaySlotEntry> = Vec::with_capacity(raw_slots.len().max(slots.len()));
    for slot in raw_slots.iter().filter(|slot| slot.is_object()) {
        let label = non_blank_str(slot, "slot")
            .or_else(|| non_blank_str(slot, "time_block"))
            .map(str::to_string)
            .unwrap_or_else(|| positional_slot(slots, items.len()));
        items.push(DaySlotEntry {
            slot: label,
            name: string_or(slot, "name", DEFAULT_SLOT_NAME),
            category: string_or(slot, "category", DEFAULT_SLOT_CATEGORY),
            description: string_or(slot, "description", ""),
            duration_hours: duration_hours(slot.get("duration_hours")),
            tip: string_or(slot, "tip", DEFAULT_SLOT_TIP),
        });
    }

    if items.is_empty() {
        items = slots.iter().map(|slot| free_exploration(slot)).collect();
    }

    DayPlan {
        day: day
            .get("day")
            .and_then(Value::as_u64)
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| *value > 0)
            .unwrap_or(position),
        theme: string_or(day, "theme", DEFAULT_THEME),
        items,
        daily_tip: string_or(day, "daily_tip", DEFAULT_DAILY_TIP),
    }
}

fn free_exploration(slot: &str) -> DaySlotEntry {
    DaySlotEntry {
        slot: slot.to_string(),
        name: "Free exploration".to_string(),
        category: "Flexible".to_string(),
        description: "Build your own moment in this slot.".to_string(),
        duration_hours: DEFAULT_DURATION_HOURS,
        tip: "Use this pocket to rest or follow spontaneous inspiration.".to_string(),
    }
}

fn positional_slot(slots: &[String], index: usize) -> String {
    if slots.is_empty() {
        return format!("Slot {}", index + 1);
    }
    slots[index % slots.len()].clone()
}

/// Accepts integers, floats and numeric strings; clamps into 1..=4.
fn duration_hours(value: Option<&Value>) -> u8 {
    let hours = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    hours
        .filter(|hours| hours.is_finite())
        .map(|hours| (hours.round() as i64).clamp(1, 4) as u8)
        .unwrap_or(DEFAULT_DURATION_HOURS)
}

fn non_blank_str<'v>(value: &'v Value, key: &str) -> Option<&'v str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn string_or(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => default.to_string(),
    }
}
