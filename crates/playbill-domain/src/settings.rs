//! Extraction settings - which completion endpoint to use, if any

use serde::{Deserialize, Serialize};

/// Provider name for a self-hosted, OpenAI-compatible endpoint
pub const PROVIDER_CUSTOM: &str = "custom";

/// Built-in default completion endpoint (local Ollama in OpenAI-compat mode)
pub const DEFAULT_API_URL: &str = "http://localhost:11434/v1/chat/completions";

/// Built-in default model
pub const DEFAULT_MODEL: &str = "qwen2.5:3b-instruct";

/// Settings controlling the model extraction path.
///
/// Read once from persistent storage at pipeline entry and never mutated by
/// the pipeline. When nothing has been saved yet, [`Default`] supplies a
/// configuration pointing at the local model endpoint; a local endpoint does
/// not check credentials, so the key is only a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// `"custom"` for a self-hosted endpoint, otherwise a hosted provider name
    pub provider: String,

    /// Chat-completions endpoint URL
    #[serde(rename = "apiUrl")]
    pub api_url: String,

    /// Model identifier sent with each request
    pub model: String,

    /// Bearer token; optional for the custom provider
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ExtractionSettings {
    /// True for a self-hosted endpoint, which is always worth attempting
    pub fn is_custom(&self) -> bool {
        self.provider == PROVIDER_CUSTOM
    }

    /// True when a non-trivial API key is configured.
    ///
    /// Hosted providers reject anything shorter, so a short key means the
    /// model path would be a guaranteed-failing network call.
    pub fn has_usable_key(&self) -> bool {
        matches!(&self.api_key, Some(key) if key.len() > 5)
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            provider: PROVIDER_CUSTOM.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: Some("ollama".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_local_endpoint() {
        let settings = ExtractionSettings::default();
        assert!(settings.is_custom());
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn short_keys_are_not_usable() {
        let mut settings = ExtractionSettings {
            provider: "openai".to_string(),
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
        };
        assert!(!settings.has_usable_key());

        settings.api_key = Some(String::new());
        assert!(!settings.has_usable_key());

        settings.api_key = Some("abc".to_string());
        assert!(!settings.has_usable_key());

        settings.api_key = Some("sk-0123456789".to_string());
        assert!(settings.has_usable_key());
    }

    #[test]
    fn settings_round_trip_wire_names() {
        let json = r#"{
            "provider": "openai",
            "apiUrl": "https://api.openai.com/v1/chat/completions",
            "model": "gpt-4o-mini",
            "apiKey": "sk-0123456789"
        }"#;

        let settings: ExtractionSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.provider, "openai");
        assert_eq!(settings.api_key.as_deref(), Some("sk-0123456789"));

        let back = serde_json::to_string(&settings).unwrap();
        assert!(back.contains("apiUrl"));
        assert!(back.contains("apiKey"));
    }

    #[test]
    fn absent_key_deserializes_to_none() {
        let json = r#"{"provider": "custom", "apiUrl": "http://localhost:1234", "model": "m"}"#;
        let settings: ExtractionSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.api_key, None);
    }
}
