//! Environment variable overrides.
//!
//! Lookups go through a caller-supplied closure so tests can resolve
//! configuration without touching the process environment.

use std::str::FromStr;

use promptkit_common::ConfigError;

use crate::schema::GenerationConfig;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "DEFAULT_MODEL";
pub const MAX_TOKENS_VAR: &str = "MAX_TOKENS";
pub const TEMPERATURE_VAR: &str = "TEMPERATURE";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Read a variable from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Look up `key`, treating blank values as unset.
pub fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::ParseError(format!("{key}={raw:?}: {e}"))),
        None => Ok(None),
    }
}

/// Apply `DEFAULT_MODEL`, `MAX_TOKENS`, `TEMPERATURE` and `OPENAI_BASE_URL`
/// on top of `generation`.
pub fn apply_env_overrides<F>(generation: &mut GenerationConfig, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(model) = non_empty(lookup, MODEL_VAR) {
        generation.model = model;
    }
    if let Some(max_tokens) = parse_var::<u32, _>(lookup, MAX_TOKENS_VAR)? {
        generation.max_tokens = max_tokens;
    }
    if let Some(temperature) = parse_var::<f64, _>(lookup, TEMPERATURE_VAR)? {
        generation.temperature = temperature;
    }
    if let Some(base_url) = non_empty(lookup, BASE_URL_VAR) {
        generation.base_url = base_url;
    }
    Ok(())
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
    fn no_variables_keeps_defaults() {
        let mut gen = GenerationConfig::default();
        apply_env_overrides(&mut gen, &env(&[])).unwrap();
        assert_eq!(gen, GenerationConfig::default());
    }

    #[test]
    fn all_variables_override() {
        let mut gen = GenerationConfig::default();
        let lookup = env(&[
            (MODEL_VAR, "gpt-4o"),
            (MAX_TOKENS_VAR, "256"),
            (TEMPERATURE_VAR, "0.2"),
            (BASE_URL_VAR, "http://localhost:8080/v1"),
        ]);
        apply_env_overrides(&mut gen, &lookup).unwrap();
        assert_eq!(gen.model, "gpt-4o");
        assert_eq!(gen.max_tokens, 256);
        assert!((gen.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(gen.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn zero_temperature_is_not_treated_as_unset() {
        let mut gen = GenerationConfig::default();
        apply_env_overrides(&mut gen, &env(&[(TEMPERATURE_VAR, "0")])).unwrap();
        assert_eq!(gen.temperature, 0.0);
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut gen = GenerationConfig::default();
        let lookup = env(&[(MODEL_VAR, "   "), (MAX_TOKENS_VAR, "")]);
        apply_env_overrides(&mut gen, &lookup).unwrap();
        assert_eq!(gen.model, "gpt-3.5-turbo");
        assert_eq!(gen.max_tokens, 1500);
    }

    #[test]
    fn non_numeric_max_tokens_is_a_parse_error() {
        let mut gen = GenerationConfig::default();
        let err = apply_env_overrides(&mut gen, &env(&[(MAX_TOKENS_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn non_numeric_temperature_is_a_parse_error() {
        let mut gen = GenerationConfig::default();
        let err = apply_env_overrides(&mut gen, &env(&[(TEMPERATURE_VAR, "warm")])).unwrap_err();
        assert!(err.to_string().contains("TEMPERATURE"));
    }
}
