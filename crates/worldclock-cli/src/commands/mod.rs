pub mod colleague;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod now;
pub mod search;
pub mod timeline;

use std::path::{Path, PathBuf};

use worldclock_core::{ConfigError, ViewerZone};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// The `--config` path if given, otherwise the default location.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path),
        None => worldclock_core::Config::default_path(),
    }
}

/// Dashboard log file, kept next to the config file.
pub fn log_path(config_path: &Path) -> PathBuf {
    config_path.with_file_name("worldclock.log")
}

/// Viewer zone from the configured override, `$TZ` or the host.
pub fn viewer_zone(config: &worldclock_core::Config) -> ViewerZone {
    ViewerZone::detect(config.viewer_timezone.as_deref())
}
