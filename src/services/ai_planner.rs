use serde_json::json;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::{AiSettings, DEFAULT_MODEL};
use crate::core::{normalize_interests, selected_guardrails};
use crate::error::{PlannerError, Result};
use crate::schemas::{validate_structured_payload, AiItineraryPayload, CompletionSchema};
use crate::types::{ItineraryPlan, TripRequest};

use super::openai_client::{ChatBackend, ChatCompletionRequest, OpenAIClient};
use super::prompts::{
    itinerary_prompt, summary_prompt, ITINERARY_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT,
};
use super::response_parser::{parse_payload, plan_from_payload};

const ITINERARY_TEMPERATURE: f64 = 0.7;
const ITINERARY_MAX_TOKENS: u32 = 1200;
const SUMMARY_TEMPERATURE: f64 = 0.6;
const SUMMARY_MAX_TOKENS: u32 = 400;

/// LLM-backed itinerary generator and summarizer
#[derive(Debug)]
pub struct AiPlanner<B = OpenAIClient> {
    backend: B,
    model: String,
}

impl AiPlanner<OpenAIClient> {
    pub fn from_settings(settings: &AiSettings) -> Self {
        Self::new(OpenAIClient::from_settings(settings)).with_model(settings.model())
    }
}

impl<B: ChatBackend> AiPlanner<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model for a full itinerary and normalize the reply.
    pub async fn generate_plan(
        &self,
        request: &TripRequest,
        catalog: &Catalog,
    ) -> Result<ItineraryPlan> {
        let interests = normalize_interests(catalog, &request.interests);
        let guardrails = selected_guardrails(&request.guardrails);
        let prompt = itinerary_prompt(
            &request.destination,
            request.day_count(),
            &interests,
            &guardrails,
            catalog.slots(),
        );

        let chat_request = ChatCompletionRequest::new(
            self.model.clone(),
            vec![
                json!({"role": "system", "content": ITINERARY_SYSTEM_PROMPT}),
                json!({"role": "user", "content": prompt}),
            ],
        )
        .with_temperature(ITINERARY_TEMPERATURE)
        .with_max_tokens(Some(ITINERARY_MAX_TOKENS));

        info!(
            target: "travel_planner::ai",
            model = %self.model,
            destination = %request.destination,
            "requesting AI itinerary"
        );
        let raw = self.backend.complete(chat_request).await?;
        let payload = parse_payload(&raw)?;

        if let Err(err) = validate_structured_payload(AiItineraryPayload::schema(), &payload) {
            warn!(
                target: "travel_planner::ai",
                error = %err,
                "AI itinerary deviates from the expected schema, normalizing anyway"
            );
        }

        let plan = plan_from_payload(&payload, request, catalog)?;
        debug!(
            target: "travel_planner::ai",
            days = plan.days.len(),
            "AI itinerary normalized"
        );
        Ok(plan)
    }

    /// Ask the model for a short narrative recap of a plan.
    pub async fn summarize(&self, plan: &ItineraryPlan) -> Result<String> {
        let chat_request = ChatCompletionRequest::new(
            self.model.clone(),
            vec![
                json!({"role": "system", "content": SUMMARY_SYSTEM_PROMPT}),
                json!({"role": "user", "content": summary_prompt(plan)}),
            ],
        )
        .with_temperature(SUMMARY_TEMPERATURE)
        .with_max_tokens(Some(SUMMARY_MAX_TOKENS));

        let summary = self.backend.complete(chat_request).await?;
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(PlannerError::EmptyResponse(
                "AI summary was empty. Try regenerating.".to_string(),
            ));
        }
        Ok(summary.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays canned replies and records the requests it saw.
    struct ScriptedBackend {
        replies: Mutex<Vec<Result<String>>>,
        seen: Mutex<Vec<ChatCompletionRequest>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn complete(&self, request: ChatCompletionRequest) -> Result<String> {
            self.seen.lock().unwrap().push(request);
            self.replies.lock().unwrap().remove(0)
        }
    }

    fn request() -> TripRequest {
        TripRequest::new("Kyoto", 2).with_interests(["History"])
    }

    #[test]
    fn test_generate_plan_normalizes_reply() {
        let reply = r#"Sure! {"days": [{"theme": "Temples", "slots": [{"slot": "Morning", "name": "Fushimi Inari"}]}]}"#;
        let planner = AiPlanner::new(ScriptedBackend::new(vec![Ok(reply.to_string())]))
            .with_model("test-model");

        let plan = tokio_test::block_on(planner.generate_plan(&request(), Catalog::builtin()))
            .unwrap();

        assert_eq!(plan.destination, "Kyoto");
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].items[0].name, "Fushimi Inari");
        assert_eq!(plan.highlight_text, "History");

        let seen = planner.backend.seen.lock().unwrap();
        assert_eq!(seen[0].model(), "test-model");
        let prompt = seen[0].messages()[1]["content"].as_str().unwrap();
        assert!(prompt.contains("Design a 2-day plan for Kyoto."));
    }

    #[test]
    fn test_generate_plan_propagates_backend_errors() {
        let planner = AiPlanner::new(ScriptedBackend::new(vec![Err(PlannerError::Http(
            "connection refused".to_string(),
        ))]));

        let err = tokio_test::block_on(planner.generate_plan(&request(), Catalog::builtin()))
            .unwrap_err();
        assert_eq!(err.error_code(), "HTTP_ERROR");
    }

    #[test]
    fn test_generate_plan_rejects_prose_only_reply() {
        let planner = AiPlanner::new(ScriptedBackend::new(vec![Ok(
            "I cannot help with that.".to_string()
        )]));

        let err = tokio_test::block_on(planner.generate_plan(&request(), Catalog::builtin()))
            .unwrap_err();
        assert!(err.to_string().contains("JSON block not found"));
    }

    #[tokio::test]
    async fn test_summarize_trims_reply() {
        let planner = AiPlanner::new(ScriptedBackend::new(vec![Ok(
            "  Two calm days of temples.  ".to_string()
        )]));
        let plan = crate::core::generate_itinerary("Kyoto", 2, &["History"], &["No late nights"]);

        let summary = planner.summarize(&plan).await.unwrap();
        assert_eq!(summary, "Two calm days of temples.");

        let seen = planner.backend.seen.lock().unwrap();
        let prompt = seen[0].messages()[1]["content"].as_str().unwrap();
        assert!(prompt.contains("Guardrails: Guardrails locked in: No late nights"));
    }
}
