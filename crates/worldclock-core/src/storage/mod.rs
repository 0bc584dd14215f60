mod config;

pub use config::{ColorScheme, Config};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/worldclock[-dev]/` based on WORLDCLOCK_ENV.
///
/// Set WORLDCLOCK_ENV=dev to use development data directory. The directory
/// is created lazily by whoever writes into it.
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("WORLDCLOCK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("worldclock-dev")
    } else {
        base_dir.join("worldclock")
    };

    Ok(dir)
}
