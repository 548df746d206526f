pub const NO_GUARDRAILS_MESSAGE: &str = "No guardrails selected. Using balanced variety.";

pub fn guardrail_message(guardrails: &[String]) -> String {
    if guardrails.is_empty() {
        NO_GUARDRAILS_MESSAGE.to_string()
    } else {
        format!("Guardrails locked in: {}", guardrails.join(", "))
    }
}

/// Comma-joined interests with duplicates removed, first occurrence wins.
pub fn highlight_text(interests: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(interests.len());
    for interest in interests {
        if !seen.contains(&interest.as_str()) {
            seen.push(interest);
        }
    }
    seen.join(", ")
}
