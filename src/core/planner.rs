use super::{
    assembler::{assemble_days, AssemblyInput},
    constraints::resolve_constraints,
    input::{normalize_destination, normalize_interests, selected_guardrails},
    selector::select_activities,
    summary::{guardrail_message, highlight_text},
};
use crate::catalog::Catalog;
use crate::types::{ItineraryPlan, TripRequest};
use tracing::debug;

/// Rule-based itinerary generator bound to a catalog.
///
/// Holds nothing but a shared reference, so one planner can serve any number
/// of threads. Every call builds its own cursors and intermediate pools.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'c> {
    catalog: &'c Catalog,
}

impl<'c> Planner<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Build a plan. Invalid input is clamped or dropped, never rejected.
    pub fn generate(&self, request: &TripRequest) -> ItineraryPlan {
        let days = request.day_count();
        let destination = normalize_destination(&request.destination);
        let interests = normalize_interests(self.catalog, &request.interests);
        let guardrails = selected_guardrails(&request.guardrails);

        let constraints = resolve_constraints(self.catalog, &guardrails);
        let selection = select_activities(self.catalog, &interests, &constraints);

        debug!(
            target: "travel_planner::planner",
            destination = %destination,
            days = days.get(),
            pool = selection.len(),
            relaxation = ?selection.relaxation,
            "assembling itinerary"
        );

        let day_plans = assemble_days(AssemblyInput {
            days,
            slots: self.catalog.slots(),
            interests: &interests,
            pool: &selection.activities,
            guardrails: &guardrails,
        });

        ItineraryPlan {
            destination,
            days: day_plans,
            guardrail_message: guardrail_message(&guardrails),
            highlight_text: highlight_text(&interests),
            interests,
            guardrails,
            ai_summary: None,
        }
    }
}

/// Generate an itinerary from the built-in catalog.
pub fn generate_itinerary<I, G>(
    destination: &str,
    days: i64,
    interests: &[I],
    guardrails: &[G],
) -> ItineraryPlan
where
    I: AsRef<str>,
    G: AsRef<str>,
{
    let request = TripRequest::new(destination, days)
        .with_interests(interests.iter().map(|label| label.as_ref().to_string()))
        .with_guardrails(guardrails.iter().map(|label| label.as_ref().to_string()));
    Planner::new(Catalog::builtin()).generate(&request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lisbon_history_example() {
        let no_guardrails: [&str; 0] = [];
        let plan = generate_itinerary("Lisbon", 2, &["History"], &no_guardrails);

        assert_eq!(plan.destination, "Lisbon");
        assert_eq!(plan.days.len(), 2);
        assert_eq!(plan.interests, ["History"]);
        assert_eq!(plan.highlight_text, "History");
        assert_eq!(
            plan.guardrail_message,
            "No guardrails selected. Using balanced variety."
        );
        for day in &plan.days {
            assert_eq!(day.theme, "History focus");
            assert_eq!(day.items.len(), 3);
            assert!(day.items.iter().all(|item| item.category == "History"));
        }
        assert_eq!(plan.days[1].day, 2);
        assert!(plan.ai_summary.is_none());
    }

    #[test]
    fn test_planner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Planner<'static>>();
        assert_send_sync::<ItineraryPlan>();
    }
}
