use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON schema the model output is checked against, built once per type.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    schema_json: Value,
}

impl SchemaHandle {
    pub fn from_root_schema(schema_name: &'static str, root: RootSchema) -> Self {
        let schema_json =
            serde_json::to_value(root).unwrap_or_else(|_| Value::Object(Default::default()));

        Self {
            schema_name,
            schema_json,
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn schema_json(&self) -> &Value {
        &self.schema_json
    }
}

/// Types the model is asked to produce, with a schema built once per process.
pub trait CompletionSchema: DeserializeOwned + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}
