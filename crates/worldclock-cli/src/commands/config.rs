use std::path::Path;

use clap::Subcommand;
use worldclock_core::Config;

use super::CmdResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "time_format", "colleagues.0.timezone")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(config_path: &Path, action: ConfigAction) -> CmdResult {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_from(config_path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(config_path)?;
            config.set(&key, &value)?;
            config.save_to(config_path)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load_from(config_path)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save_to(config_path)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
