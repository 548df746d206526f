pub mod payload;
pub mod schema;
pub mod validation;

pub use payload::{AiDay, AiItineraryPayload, AiSlot};
pub use schema::{CompletionSchema, SchemaHandle};
pub use validation::validate_structured_payload;
