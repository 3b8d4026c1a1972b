//! Startup shared by every binary: environment, config, logging, client.

use promptkit_ai::ChatClient;
use promptkit_common::PromptkitError;
use promptkit_config::{env, load_config, load_dotenv, ClientConfig, PromptkitConfig};
use tracing::{debug, info, warn};

use crate::cli::Args;
use crate::logging;

/// Prepare everything a driver needs and return the client.
pub fn start(args: &Args) -> Result<ChatClient, PromptkitError> {
    let dotenv = load_dotenv();
    let (config, source) = load_config(args.config.as_deref())?;

    let directive = args.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init(directive);
    info!("promptkit v{} starting", env!("CARGO_PKG_VERSION"));
    info!(%source, "configuration loaded");
    match dotenv {
        Ok(Some(path)) => info!("loaded environment from {}", path.display()),
        Ok(None) => debug!("no .env file found"),
        Err(e) => warn!("{e}"),
    }

    build_client(&config)
}

/// Resolve the API key and defaults against the process environment.
pub fn build_client(config: &PromptkitConfig) -> Result<ChatClient, PromptkitError> {
    let client_config = ClientConfig::resolve(None, &config.generation, env::process_env)?;
    info!(config = ?client_config, "client configured");
    Ok(ChatClient::new(client_config)?)
}
