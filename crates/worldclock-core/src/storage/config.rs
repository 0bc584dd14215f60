//! TOML-based roster and preferences.
//!
//! Stores:
//! - Clock format (12h/24h) and how colleague names get a location suffix
//! - Color scheme and timeline mode for the dashboard
//! - An optional viewer timezone override
//! - The roster of colleagues
//!
//! Configuration is stored at `~/.config/worldclock/config.toml` unless a
//! path is given explicitly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::data_dir;
use crate::catalog::CityRecord;
use crate::clock::{validate_timezone, TimeFormat};
use crate::error::{ConfigError, Result, ValidationError};
use crate::roster::RosterEntry;
use crate::search::{display_name, DisplayFormat};
use crate::timeline::TimelineMode;

/// Dashboard color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Classic,
    Dark,
    HighContrast,
    Nord,
    Solarized,
    SolarizedDark,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Classic,
        ColorScheme::Dark,
        ColorScheme::HighContrast,
        ColorScheme::Nord,
        ColorScheme::Solarized,
        ColorScheme::SolarizedDark,
    ];

    /// The scheme after this one, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "classic",
            ColorScheme::Dark => "dark",
            ColorScheme::HighContrast => "high-contrast",
            ColorScheme::Nord => "nord",
            ColorScheme::Solarized => "solarized",
            ColorScheme::SolarizedDark => "solarized-dark",
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML; every field has a default so a partial file
/// loads cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default)]
    pub location_display_format: DisplayFormat,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub timeline_mode: TimelineMode,
    /// IANA zone to use instead of the host's local time.
    #[serde(default)]
    pub viewer_timezone: Option<String>,
    #[serde(default)]
    pub colleagues: Vec<RosterEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            location_display_format: DisplayFormat::default(),
            color_scheme: ColorScheme::default(),
            timeline_mode: TimelineMode::default(),
            viewer_timezone: None,
            colleagues: vec![
                RosterEntry::new("Alice (New York)", "America/New_York").with_work_hours(9, 17),
                RosterEntry::new("Bob (London)", "Europe/London").with_work_hours(9, 17),
                RosterEntry::new("Charlie (Tokyo)", "Asia/Tokyo").with_work_hours(9, 17),
            ],
        }
    }
}

impl Config {
    fn child<'a>(value: &'a serde_json::Value, part: &str) -> Option<&'a serde_json::Value> {
        match value {
            serde_json::Value::Array(items) => items.get(part.parse::<usize>().ok()?),
            other => other.get(part),
        }
    }

    fn child_mut<'a>(
        value: &'a mut serde_json::Value,
        part: &str,
    ) -> Option<&'a mut serde_json::Value> {
        match value {
            serde_json::Value::Array(items) => items.get_mut(part.parse::<usize>().ok()?),
            other => other.get_mut(part),
        }
    }

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = Self::child(current, part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut parent = root;
        if let Some(path) = parent_path {
            for part in path.split('.') {
                parent = Self::child_mut(parent, part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            }
        }

        let slot = Self::child_mut(parent, leaf)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let new_value = match slot {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
            }
            _ => serde_json::Value::String(value.into()),
        };

        *slot = new_value;
        Ok(())
    }

    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> std::result::Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from `path`, writing and returning the defaults if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the default config cannot be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(ConfigError::from)?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                info!(path = %path.display(), "created default config");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to `path`, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| save_failed(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key. List elements are
    /// addressed by index, e.g. `colleagues.0.name`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not fit the
    /// field (e.g. `time_format = "36h"`), or a changed colleague no longer
    /// validates.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        if let Some(tz) = &updated.viewer_timezone {
            validate_timezone(tz)?;
        }
        for (i, entry) in updated.colleagues.iter().enumerate() {
            if self.colleagues.get(i) != Some(entry) {
                entry.validate()?;
            }
        }
        *self = updated;
        Ok(())
    }

    // ── Roster ───────────────────────────────────────────────────────

    fn check_index(&self, index: usize) -> std::result::Result<(), ValidationError> {
        if index >= self.colleagues.len() {
            return Err(ValidationError::OutOfBounds {
                collection: "colleagues".to_string(),
                index,
                len: self.colleagues.len(),
            });
        }
        Ok(())
    }

    /// Append a validated colleague. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the roster untouched if the entry is
    /// invalid.
    pub fn add_colleague(&mut self, entry: RosterEntry) -> Result<usize> {
        entry.validate()?;
        info!(name = %entry.name, timezone = %entry.timezone, "adding colleague");
        self.colleagues.push(entry);
        Ok(self.colleagues.len() - 1)
    }

    /// Replace the colleague at `index` with a validated entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or the entry is invalid.
    pub fn update_colleague(&mut self, index: usize, entry: RosterEntry) -> Result<()> {
        self.check_index(index)?;
        entry.validate()?;
        info!(index, name = %entry.name, timezone = %entry.timezone, "updating colleague");
        self.colleagues[index] = entry;
        Ok(())
    }

    /// Remove and return the colleague at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds.
    pub fn remove_colleague(&mut self, index: usize) -> Result<RosterEntry> {
        self.check_index(index)?;
        let removed = self.colleagues.remove(index);
        info!(name = %removed.name, "removed colleague");
        Ok(removed)
    }

    /// Add a colleague placed through timezone search, naming them with the
    /// configured location suffix.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting entry is invalid.
    pub fn add_from_search(&mut self, base_name: &str, city: &CityRecord, query: &str) -> Result<usize> {
        let name = display_name(base_name, city, query, self.location_display_format);
        self.add_colleague(RosterEntry::new(name, city.timezone).with_work_hours(9, 17))
    }

    /// Rename and relocate an existing colleague from a search selection.
    /// Work and sleep hours are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or the result is
    /// invalid.
    pub fn update_from_search(
        &mut self,
        index: usize,
        base_name: &str,
        city: &CityRecord,
        query: &str,
    ) -> Result<()> {
        self.check_index(index)?;
        let mut entry = self.colleagues[index].clone();
        entry.name = display_name(base_name, city, query, self.location_display_format);
        entry.timezone = city.timezone.to_string();
        self.update_colleague(index, entry)
    }

    /// Set (or clear, with `None`) a colleague's work hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or the hours are
    /// invalid.
    pub fn set_work_hours(&mut self, index: usize, hours: Option<(u8, u8)>) -> Result<()> {
        self.check_index(index)?;
        let mut entry = self.colleagues[index].clone();
        entry.work_start = hours.map(|(start, _)| start);
        entry.work_end = hours.map(|(_, end)| end);
        self.update_colleague(index, entry)
    }

    /// Set (or clear, with `None`) a colleague's sleep hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or the hours are
    /// invalid.
    pub fn set_sleep_hours(&mut self, index: usize, hours: Option<(u8, u8)>) -> Result<()> {
        self.check_index(index)?;
        let mut entry = self.colleagues[index].clone();
        entry.sleep_start = hours.map(|(start, _)| start);
        entry.sleep_end = hours.map(|(_, end)| end);
        self.update_colleague(index, entry)
    }
}
