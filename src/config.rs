use crate::error::{PlannerError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the optional AI planner
#[derive(Clone)]
pub struct AiSettings {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl std::fmt::Debug for AiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read settings from the process environment.
    ///
    /// `OPENAI_API_KEY` is required. `OPENAI_BASE_URL` (or `OPENROUTER_BASE_URL`)
    /// and `OPENAI_MODEL` override the defaults. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_key(None)
    }

    /// Same as [`AiSettings::from_env`], but an explicit key wins over
    /// `OPENAI_API_KEY`.
    pub fn from_env_with_key(api_key: Option<String>) -> Result<Self> {
        let api_key = resolve_api_key(api_key, env::var("OPENAI_API_KEY").ok()).ok_or_else(|| {
            PlannerError::Config("Set OPENAI_API_KEY to unlock AI planning.".to_string())
        })?;

        let mut settings = Self::new(api_key);
        if let Some(base_url) = env::var("OPENAI_BASE_URL")
            .ok()
            .or_else(|| env::var("OPENROUTER_BASE_URL").ok())
        {
            settings = settings.with_base_url(base_url);
        }
        if let Ok(model) = env::var("OPENAI_MODEL") {
            settings = settings.with_model(model);
        }
        Ok(settings)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if !model.trim().is_empty() {
            self.model = model;
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// First non-blank key, explicit before environment.
fn resolve_api_key(explicit: Option<String>, from_env: Option<String>) -> Option<String> {
    let usable = |key: &String| !key.trim().is_empty();
    explicit.filter(usable).or_else(|| from_env.filter(usable))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_overrides() {
        let settings = AiSettings::new("sk-test")
            .with_model("gpt-4.1-mini")
            .with_base_url("http://localhost:8080/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(settings.model(), "gpt-4.1-mini");
        assert_eq!(settings.base_url(), "http://localhost:8080/v1");
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert_eq!(AiSettings::new("k").model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_blank_model_keeps_default() {
        let settings = AiSettings::new("k").with_model("  ");
        assert_eq!(settings.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_explicit_key_is_used() {
        let settings = AiSettings::from_env_with_key(Some("sk-flag".to_string())).unwrap();
        assert_eq!(settings.api_key(), "sk-flag");
    }

    #[test]
    fn test_api_key_resolution_order() {
        let key = |value: &str| Some(value.to_string());

        assert_eq!(resolve_api_key(key("sk-flag"), key("sk-env")), key("sk-flag"));
        assert_eq!(resolve_api_key(key("   "), key("sk-env")), key("sk-env"));
        assert_eq!(resolve_api_key(None, key("sk-env")), key("sk-env"));
        assert_eq!(resolve_api_key(key(""), key(" ")), None);
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let rendered = format!("{:?}", AiSettings::new("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
