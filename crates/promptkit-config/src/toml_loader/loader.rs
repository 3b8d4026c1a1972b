//! Core TOML config loading: read from path or platform default.

use std::fmt;
use std::path::{Path, PathBuf};

use promptkit_common::ConfigError;
use tracing::debug;

use super::paths::default_config_path;
use crate::schema::PromptkitConfig;

/// Where a loaded config came from.
///
/// Loading usually happens before logging is set up, so callers report the
/// source themselves once a subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
pub fn load_from_path(path: &Path) -> Result<PromptkitConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PromptkitConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    debug!("parsed config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path, or defaults if there is none.
pub fn load_default() -> Result<(PromptkitConfig, ConfigSource), ConfigError> {
    let Some(path) = default_config_path() else {
        return Ok((PromptkitConfig::default(), ConfigSource::Defaults));
    };

    match load_from_path(&path) {
        Ok(config) => Ok((config, ConfigSource::File(path))),
        Err(ConfigError::FileNotFound(_)) => Ok((PromptkitConfig::default(), ConfigSource::Defaults)),
        Err(e) => Err(e),
    }
}
