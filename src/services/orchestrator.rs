use std::time::Instant;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::core::Planner;
use crate::types::{PlanOutcome, PlanSource, TripRequest};

use super::ai_planner::AiPlanner;
use super::openai_client::ChatBackend;

/// How the AI generator participates in a planning run
#[derive(Debug)]
pub enum AiMode<'a, B: ChatBackend> {
    /// Try this planner first, fall back to the rules on any error
    Enabled(&'a AiPlanner<B>),
    /// AI was not configured; the reason is reported with the outcome
    Unavailable(String),
    /// Caller opted out of AI planning
    Disabled,
}

/// Produce a plan, preferring the AI generator and always falling back to
/// the rule-based engine.
pub async fn plan_trip<B: ChatBackend>(
    request: &TripRequest,
    catalog: &Catalog,
    ai: AiMode<'_, B>,
) -> PlanOutcome {
    let started = Instant::now();

    let ai_error = match ai {
        AiMode::Enabled(planner) => match planner.generate_plan(request, catalog).await {
            Ok(plan) => {
                info!(
                    target: "travel_planner::orchestrator",
                    days = plan.days.len(),
                    "using AI itinerary"
                );
                return PlanOutcome::new(plan, PlanSource::Ai, None, started.elapsed());
            }
            Err(err) => {
                warn!(
                    target: "travel_planner::orchestrator",
                    error = %err,
                    code = err.error_code(),
                    "AI planner failed, using rule-based fallback"
                );
                Some(err.to_string())
            }
        },
        AiMode::Unavailable(reason) => Some(reason),
        AiMode::Disabled => None,
    };

    let plan = Planner::new(catalog).generate(request);
    PlanOutcome::new(plan, PlanSource::RuleBased, ai_error, started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PlannerError, Result};
    use crate::services::openai_client::ChatCompletionRequest;
    use async_trait::async_trait;

    struct FixedReply(Option<&'static str>);

    #[async_trait]
    impl ChatBackend for FixedReply {
        async fn complete(&self, _request: ChatCompletionRequest) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| PlannerError::Timeout("request exceeded 60s".to_string()))
        }
    }

    fn request() -> TripRequest {
        TripRequest::new("Seville", 3).with_interests(["Food"])
    }

    #[tokio::test]
    async fn test_ai_plan_is_used_when_available() {
        let planner = AiPlanner::new(FixedReply(Some(r#"{"days": [{}, {}, {}]}"#)));

        let outcome = plan_trip(&request(), Catalog::builtin(), AiMode::Enabled(&planner)).await;

        assert_eq!(outcome.source, PlanSource::Ai);
        assert!(outcome.ai_error.is_none());
        assert_eq!(outcome.plan.days.len(), 3);
    }

    #[tokio::test]
    async fn test_falls_back_when_ai_fails() {
        let planner = AiPlanner::new(FixedReply(None));

        let outcome = plan_trip(&request(), Catalog::builtin(), AiMode::Enabled(&planner)).await;

        assert_eq!(outcome.source, PlanSource::RuleBased);
        assert!(outcome.is_fallback());
        assert!(outcome.ai_error.unwrap().contains("request exceeded"));
        assert_eq!(outcome.plan.days.len(), 3);
        assert!(outcome.plan.days[0]
            .items
            .iter()
            .all(|item| item.category == "Food"));
    }

    #[tokio::test]
    async fn test_unavailable_reason_is_reported() {
        let outcome = plan_trip::<FixedReply>(
            &request(),
            Catalog::builtin(),
            AiMode::Unavailable("Set OPENAI_API_KEY to unlock AI planning.".to_string()),
        )
        .await;

        assert_eq!(outcome.source, PlanSource::RuleBased);
        assert_eq!(
            outcome.ai_error.as_deref(),
            Some("Set OPENAI_API_KEY to unlock AI planning.")
        );
    }

    #[tokio::test]
    async fn test_disabled_ai_is_not_a_fallback() {
        let outcome =
            plan_trip::<FixedReply>(&request(), Catalog::builtin(), AiMode::Disabled).await;

        assert!(!outcome.is_fallback());
        assert!(outcome.plan.ai_summary.is_none());
    }
}
