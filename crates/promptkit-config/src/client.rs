//! Resolved client configuration: API key plus generation defaults.

use std::fmt;

use promptkit_common::ConfigError;

use crate::env::{self, API_KEY_VAR};
use crate::schema::GenerationConfig;
use crate::validation;

/// Everything the API client needs, fixed at construction.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub default_model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub base_url: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("default_model", &self.default_model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClientConfig {
    /// Build a config from an explicit key and already-resolved defaults.
    pub fn new(
        api_key: impl Into<String>,
        generation: &GenerationConfig,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        validation::validate(generation)?;

        Ok(Self {
            api_key,
            default_model: generation.model.clone(),
            max_tokens: generation.max_tokens,
            temperature: generation.temperature,
            base_url: generation.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the key and generation defaults against an environment.
    ///
    /// The key comes from `api_key` when non-empty, otherwise from
    /// `OPENAI_API_KEY`. Generation variables are layered over `generation`.
    pub fn resolve<F>(
        api_key: Option<String>,
        generation: &GenerationConfig,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .or_else(|| env::non_empty(&lookup, API_KEY_VAR))
            .ok_or(ConfigError::MissingApiKey)?;

        let mut generation = generation.clone();
        env::apply_env_overrides(&mut generation, &lookup)?;

        Self::new(api_key, &generation)
    }

    /// [`ClientConfig::resolve`] against the process environment and built-in defaults.
    pub fn from_env(api_key: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(api_key, &GenerationConfig::default(), env::process_env)
    }

    /// Full URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_key_everywhere_fails() {
        let err = ClientConfig::resolve(None, &GenerationConfig::default(), env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn blank_key_in_env_fails() {
        let err = ClientConfig::resolve(
            None,
            &GenerationConfig::default(),
            env(&[(API_KEY_VAR, "  ")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn explicit_key_wins_over_env() {
        let config = ClientConfig::resolve(
            Some("sk-explicit".into()),
            &GenerationConfig::default(),
            env(&[(API_KEY_VAR, "sk-env")]),
        )
        .unwrap();
        assert_eq!(config.api_key, "sk-explicit");
    }

    #[test]
    fn empty_explicit_key_falls_back_to_env() {
        let config = ClientConfig::resolve(
            Some(String::new()),
            &GenerationConfig::default(),
            env(&[(API_KEY_VAR, "sk-env")]),
        )
        .unwrap();
        assert_eq!(config.api_key, "sk-env");
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = ClientConfig::resolve(
            None,
            &GenerationConfig::default(),
            env(&[(API_KEY_VAR, "sk-test")]),
        )
        .unwrap();
        assert_eq!(config.default_model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 1500);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(
            config.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn env_overrides_layer_over_file_defaults() {
        let file = GenerationConfig {
            model: "from-file".into(),
            max_tokens: 200,
            ..GenerationConfig::default()
        };
        let config = ClientConfig::resolve(
            None,
            &file,
            env(&[(API_KEY_VAR, "sk-test"), ("MAX_TOKENS", "300")]),
        )
        .unwrap();
        assert_eq!(config.default_model, "from-file");
        assert_eq!(config.max_tokens, 300);
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let err = ClientConfig::resolve(
            None,
            &GenerationConfig::default(),
            env(&[(API_KEY_VAR, "sk-test"), ("TEMPERATURE", "3.0")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let gen = GenerationConfig {
            base_url: "http://localhost:11434/v1/".into(),
            ..GenerationConfig::default()
        };
        let config = ClientConfig::new("sk-test", &gen).unwrap();
        assert_eq!(
            config.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClientConfig::new("sk-secret", &GenerationConfig::default()).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
