use serde_json::json;
use travel_planner::schemas::{validate_structured_payload, AiItineraryPayload};
use travel_planner::CompletionSchema;

fn valid_payload() -> serde_json::Value {
    json!({
        "days": [{
            "day": 1,
            "theme": "Food focus",
            "daily_tip": "Eat where the locals queue.",
            "slots": [
                {
                    "slot": "Morning",
                    "name": "Market breakfast crawl",
                    "category": "Food",
                    "description": "Pastries and fruit.",
                    "duration_hours": 2,
                    "tip": "Bring small change."
                }
            ]
        }],
        "highlight_text": "Food"
    })
}

#[test]
fn test_schema_has_correct_structure() {
    let schema = AiItineraryPayload::schema().schema_json();

    assert_eq!(schema["type"], "object");
    let props = schema["properties"].as_object().unwrap();
    assert!(props.contains_key("days"));
    assert!(props.contains_key("guardrail_message"));
    assert!(props.contains_key("highlight_text"));
    assert!(props.contains_key("ai_summary"));
    assert_eq!(props["days"]["type"], "array");
}

#[test]
fn test_schema_describes_optional_fields() {
    let schema = AiItineraryPayload::schema().schema_json();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|value| value.as_str())
        .collect();

    assert_eq!(required, ["days"]);
}

#[test]
fn test_schema_handles_nested_objects() {
    let schema = AiItineraryPayload::schema().schema_json();

    let items = &schema["properties"]["days"]["items"];
    assert!(items.get("$ref").is_some() || items.get("properties").is_some());
    assert!(schema["definitions"]["AiSlot"]["properties"]["duration_hours"].is_object());
}

#[test]
fn test_valid_payload_passes() {
    let schema = AiItineraryPayload::schema();
    assert!(validate_structured_payload(schema, &valid_payload()).is_ok());
    assert!(serde_json::from_value::<AiItineraryPayload>(valid_payload()).is_ok());
}

#[test]
fn test_out_of_range_duration_is_reported() {
    let mut payload = valid_payload();
    payload["days"][0]["slots"][0]["duration_hours"] = json!(9);

    let err = validate_structured_payload(AiItineraryPayload::schema(), &payload).unwrap_err();
    let message = err.to_string();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(message.contains("itinerary_payload"));
    assert!(message.contains("/days/0/slots/0/duration_hours"));
}

#[test]
fn test_missing_days_is_reported_at_root() {
    let err = validate_structured_payload(AiItineraryPayload::schema(), &json!({"summary": "hi"}))
        .unwrap_err();
    assert!(err.to_string().contains("<root>"));
}
