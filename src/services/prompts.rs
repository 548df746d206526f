use crate::types::{DayCount, ItineraryPlan};

pub const ITINERARY_SYSTEM_PROMPT: &str = "You are an elite travel concierge. Craft practical, family-friendly itineraries with clear pacing, honoring constraints exactly as provided. Always respond with strict JSON.";

pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a concise travel concierge. Summarize multi-day itineraries in under 180 words, calling out pacing tips, standout activities, and how guardrails are respected.";

/// User prompt asking the model for a JSON itinerary.
pub fn itinerary_prompt(
    destination: &str,
    days: DayCount,
    interests: &[String],
    guardrails: &[String],
    slots: &[String],
) -> String {
    let destination = match destination.trim() {
        "" => "the traveler",
        trimmed => trimmed,
    };
    let interest_text = if interests.is_empty() {
        "General explorer".to_string()
    } else {
        interests.join(", ")
    };
    let guardrail_text = if guardrails.is_empty() {
        "None specified".to_string()
    } else {
        guardrails.join(", ")
    };
    let slot_text = join_with_and(slots);

    format!(
        "Design a {days}-day plan for {destination}. Interests: {interest_text}. Guardrails: {guardrail_text}. \
         Return strict JSON with keys days (list), guardrail_message, highlight_text, ai_summary. Each day must \
         include a theme, daily_tip, and slots array for {slot_text} with name, category, \
         description, duration_hours (1-4), and tip.",
        days = days.get(),
    )
}

/// Plain-text outline of a plan: one header line per day, one line per slot.
pub fn format_outline(plan: &ItineraryPlan) -> String {
    let mut lines = Vec::new();
    for day in &plan.days {
        lines.push(format!("Day {} ({}): {}", day.day, day.theme, day.daily_tip));
        for item in &day.items {
            lines.push(format!(
                "- {}: {} [{}] - {}",
                item.slot, item.name, item.category, item.description
            ));
        }
    }
    lines.join("\n")
}

/// User prompt asking the model for a short narrative recap.
pub fn summary_prompt(plan: &ItineraryPlan) -> String {
    let focus = if plan.highlight_text.is_empty() {
        "Varied"
    } else {
        plan.highlight_text.as_str()
    };
    format!(
        "Destination: {}.\nGuardrails: {}\nFocus interests: {}\n{}",
        plan.destination,
        plan.guardrail_message,
        focus,
        format_outline(plan)
    )
}

fn join_with_and(labels: &[String]) -> String {
    match labels {
        [] => "each part of the day".to_string(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}
