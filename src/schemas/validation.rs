use crate::error::{PlannerError, Result};
use crate::schemas::SchemaHandle;
use jsonschema::{Draft, JSONSchema, ValidationError};
use serde_json::Value;

const MAX_REPORTED_PROBLEMS: usize = 3;

/// Check a model payload against its Draft 7 schema.
///
/// The error lists the first few offending JSON pointers and counts the rest.
pub fn validate_structured_payload(schema: &SchemaHandle, payload: &Value) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::Validation(format!(
                "could not compile the `{}` schema: {err}",
                schema.schema_name()
            ))
        })?;

    let problems: Vec<String> = match validator.validate(payload) {
        Ok(()) => return Ok(()),
        Err(errors) => errors.map(|error| describe(&error)).collect(),
    };

    let shown = problems.len().min(MAX_REPORTED_PROBLEMS);
    let mut detail = problems[..shown].join("; ");
    if problems.len() > shown {
        detail.push_str(&format!(" (+{} more)", problems.len() - shown));
    }

    Err(PlannerError::Validation(format!(
        "AI itinerary does not fit the `{}` schema: {detail}",
        schema.schema_name()
    )))
}

fn describe(error: &ValidationError<'_>) -> String {
    let path = error.instance_path.to_string();
    let location = if path.is_empty() { "<root>" } else { path.as_str() };
    format!("{location}: {error}")
}
