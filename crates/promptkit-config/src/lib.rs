//! Promptkit configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then a `.env` file, then the process environment. The API key is never
//! read from the config file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use promptkit_config::{load_config, load_dotenv, ClientConfig};
//!
//! load_dotenv().expect("malformed .env");
//! let (config, source) = load_config(None).expect("failed to load config");
//! println!("config from {source}");
//! let client_config = ClientConfig::resolve(
//!     None,
//!     &config.generation,
//!     promptkit_config::env::process_env,
//! )
//! .expect("OPENAI_API_KEY must be set");
//! println!("{client_config:?}");
//! ```

pub mod client;
pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use client::ClientConfig;
pub use schema::{GenerationConfig, LoggingConfig, PromptkitConfig};
pub use toml_loader::ConfigSource;

use std::path::{Path, PathBuf};

use promptkit_common::ConfigError;

/// Load the config file from `path`, or from the platform default location.
///
/// An explicit path must exist. The default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<(PromptkitConfig, ConfigSource), ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        }
        None => toml_loader::load_default(),
    }
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables that are already set are left untouched.
///
/// Returns the file that was loaded, or `None` when there is no `.env`.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    dotenv_outcome(dotenvy::dotenv())
}

/// Like [`load_dotenv`], for a specific file.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    dotenv_outcome(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn dotenv_outcome(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>, ConfigError> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!("failed to load .env: {e}"))),
    }
}
