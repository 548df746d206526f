pub mod ai_planner;
pub mod openai_client;
pub mod orchestrator;
pub mod prompts;
pub mod response_parser;

pub use ai_planner::AiPlanner;
pub use openai_client::{ChatBackend, ChatCompletionRequest, OpenAIClient};
pub use orchestrator::{plan_trip, AiMode};
