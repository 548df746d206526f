use crate::types::{DayPlan, ItineraryPlan};

const BALANCED_FOCUS: &str = "Balanced Focus";
const BALANCED_VARIETY: &str = "Balanced Variety";

/// "history focus" -> "History"; blank themes read "Balanced Focus".
pub fn normalize_theme_label(theme: &str) -> String {
    let cleaned = theme.replace(" focus", "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        BALANCED_FOCUS.to_string()
    } else {
        title_case(cleaned)
    }
}

/// Human list of focus interests: "A", "A & B", "A, B & C".
pub fn format_focus_text(interests: &[String], fallback: Option<&str>) -> String {
    let mut deduped: Vec<&str> = Vec::new();
    for label in interests.iter().map(String::as_str) {
        if !label.is_empty() && !deduped.contains(&label) {
            deduped.push(label);
        }
    }
    if deduped.is_empty() {
        if let Some(fallback) = fallback.filter(|text| !text.is_empty()) {
            deduped.push(fallback);
        }
    }

    match deduped.as_slice() {
        [] => BALANCED_VARIETY.to_string(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{} & {}", rest.join(", "), last),
    }
}

pub fn day_header(destination: &str, day: &DayPlan) -> String {
    format!(
        "Day {} - {} ({})",
        day.day,
        destination,
        normalize_theme_label(&day.theme)
    )
}

/// Day block as shown on screen: header, numbered slots, then the tip.
pub fn format_day_block(destination: &str, day: &DayPlan) -> String {
    let mut lines = vec![day_header(destination, day)];
    for (idx, item) in day.items.iter().enumerate() {
        lines.push(format!(
            "{}. {}: {} - {}",
            idx + 1,
            item.slot,
            item.name,
            item.description
        ));
    }
    lines.push(format!("Tip: {}", day.daily_tip));
    lines.join("\n")
}

/// Whole plan as plain text.
pub fn render_plan_text(plan: &ItineraryPlan) -> String {
    let mut sections = Vec::with_capacity(plan.days.len() + 2);

    sections.push(format!(
        "{} itinerary\nFocus: {}\n{}\nTrip length: {} day(s)",
        plan.destination,
        format_focus_text(&plan.interests, Some(&plan.highlight_text)),
        plan.guardrail_message,
        plan.days.len()
    ));

    for day in &plan.days {
        sections.push(format_day_block(&plan.destination, day));
    }

    if let Some(summary) = plan.ai_summary.as_deref() {
        sections.push(format!("AI insight\n{}", summary));
    }

    sections.join("\n\n")
}

/// Download name for the PDF: "New York" -> "new_york_itinerary.pdf".
pub fn pdf_file_name(destination: &str) -> String {
    let stem = destination.trim().replace(' ', "_").to_lowercase();
    let stem = if stem.is_empty() {
        "travel_plan".to_string()
    } else {
        stem
    };
    format!("{stem}_itinerary.pdf")
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                titled.extend(ch.to_uppercase());
            } else {
                titled.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            titled.push(ch);
            at_word_start = true;
        }
    }
    titled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_itinerary;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_normalize_theme_label() {
        assert_eq!(normalize_theme_label("History focus"), "History");
        assert_eq!(normalize_theme_label("slow food focus"), "Slow Food");
        assert_eq!(normalize_theme_label("kid-friendly fun"), "Kid-Friendly Fun");
        assert_eq!(normalize_theme_label(" focus"), BALANCED_FOCUS);
        assert_eq!(normalize_theme_label(""), BALANCED_FOCUS);
    }

    #[test]
    fn test_format_focus_text() {
        assert_eq!(format_focus_text(&labels(&["Art"]), None), "Art");
        assert_eq!(format_focus_text(&labels(&["Art", "Food"]), None), "Art & Food");
        assert_eq!(
            format_focus_text(&labels(&["Art", "Food", "Art", "Nature"]), None),
            "Art, Food & Nature"
        );
        assert_eq!(format_focus_text(&[], Some("Varied interests")), "Varied interests");
        assert_eq!(format_focus_text(&labels(&[""]), Some("")), BALANCED_VARIETY);
    }

    #[test]
    fn test_format_day_block() {
        let no_guardrails: [&str; 0] = [];
        let plan = generate_itinerary("Lisbon", 1, &["History"], &no_guardrails);
        let block = format_day_block(&plan.destination, &plan.days[0]);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines[0], "Day 1 - Lisbon (History)");
        assert!(lines[1].starts_with("1. Morning: Old town heritage walk - "));
        assert!(lines[3].starts_with("3. Evening: Castle and fortifications - "));
        assert!(lines[4].starts_with("Tip: Start early"));
    }

    #[test]
    fn test_render_plan_text_includes_summary() {
        let plan = generate_itinerary("Porto", 2, &["Food", "Art"], &["Budget friendly"])
            .with_ai_summary("Tasty and thrifty.");
        let text = render_plan_text(&plan);

        assert!(text.starts_with("Porto itinerary\nFocus: Food & Art\n"));
        assert!(text.contains("Guardrails locked in: Budget friendly"));
        assert!(text.contains("Trip length: 2 day(s)"));
        assert!(text.contains("Day 2 - Porto (Art)"));
        assert!(text.ends_with("AI insight\nTasty and thrifty."));
    }

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(pdf_file_name("New York"), "new_york_itinerary.pdf");
        assert_eq!(pdf_file_name("  "), "travel_plan_itinerary.pdf");
    }
}
