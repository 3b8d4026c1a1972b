//! Generation parameter validation.
//!
//! Collects every problem into a single `ConfigError::ValidationError`.

use promptkit_common::ConfigError;

use crate::schema::GenerationConfig;

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

pub fn validate(generation: &GenerationConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if generation.model.trim().is_empty() {
        errors.push("model must not be empty".to_string());
    }
    if generation.max_tokens == 0 {
        errors.push("max_tokens must be at least 1".to_string());
    }
    validate_range_f64(&mut errors, "temperature", generation.temperature, 0.0, 1.0);
    if !(generation.base_url.starts_with("http://") || generation.base_url.starts_with("https://"))
    {
        errors.push(format!(
            "base_url = {:?} must start with http:// or https://",
            generation.base_url
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
