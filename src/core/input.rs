use crate::catalog::Catalog;

/// Placeholder used when the traveler leaves the destination blank
pub const DEFAULT_DESTINATION: &str = "Your Destination";

pub fn normalize_destination(destination: &str) -> String {
    let trimmed = destination.trim();
    if trimmed.is_empty() {
        DEFAULT_DESTINATION.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Keep interests that exactly match a catalog label, first occurrence wins.
///
/// Falls back to the catalog's default interests when nothing survives.
/// Callers that accept free-typed labels canonicalize them first with
/// [`Catalog::canonical_interest`].
pub fn normalize_interests<S: AsRef<str>>(catalog: &Catalog, interests: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(interests.len());
    for interest in interests {
        let interest = interest.as_ref();
        let known = catalog.interests().iter().any(|label| label == interest);
        if known && !normalized.iter().any(|existing| existing == interest) {
            normalized.push(interest.to_string());
        }
    }
    if normalized.is_empty() {
        catalog.default_interests().to_vec()
    } else {
        normalized
    }
}

/// Selected guardrails exactly as given: order, repeats and unknown labels kept.
///
/// Unknown labels are listed in the plan but contribute no constraints.
pub fn selected_guardrails<S: AsRef<str>>(guardrails: &[S]) -> Vec<String> {
    guardrails
        .iter()
        .map(|label| label.as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_destination_gets_placeholder() {
        assert_eq!(normalize_destination("   "), DEFAULT_DESTINATION);
        assert_eq!(normalize_destination(" Lisbon "), "Lisbon");
    }

    #[test]
    fn test_interests_are_filtered_and_deduplicated() {
        let catalog = Catalog::builtin();
        let interests = normalize_interests(
            catalog,
            &["Food", "Astrology", "food", "History", "Food"],
        );
        assert_eq!(interests, ["Food", "History"]);
    }

    #[test]
    fn test_interests_match_exactly() {
        let catalog = Catalog::builtin();
        assert_eq!(
            normalize_interests(catalog, &["history", " Food "]),
            catalog.default_interests()
        );
    }

    #[test]
    fn test_unknown_interests_fall_back_to_defaults() {
        let catalog = Catalog::builtin();
        let empty: [&str; 0] = [];
        assert_eq!(
            normalize_interests(catalog, &empty),
            catalog.default_interests()
        );
        assert_eq!(
            normalize_interests(catalog, &["Astrology", "Karaoke"]),
            catalog.default_interests()
        );
    }

    #[test]
    fn test_guardrails_are_kept_verbatim() {
        let guardrails = selected_guardrails(&[
            "no late nights",
            "Pets allowed",
            "No late nights",
            "no late nights",
        ]);
        assert_eq!(
            guardrails,
            ["no late nights", "Pets allowed", "No late nights", "no late nights"]
        );
    }
}
