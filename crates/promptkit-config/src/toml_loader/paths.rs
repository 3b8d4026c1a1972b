//! Platform config path resolution.

use std::path::PathBuf;

/// Platform-specific default config path.
///
/// On macOS: `~/Library/Application Support/promptkit/config.toml`
/// On Linux: `~/.config/promptkit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("promptkit").join("config.toml"))
}
