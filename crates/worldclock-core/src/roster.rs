//! Roster entries: the colleagues tracked by the dashboard.
//!
//! Work and sleep hours are optional. An absent hour falls back to the
//! defaults below, so a colleague configured with an explicit `0` really does
//! start or stop at midnight.

use serde::{Deserialize, Serialize};

use crate::clock::resolve_timezone;
use crate::error::ValidationError;

/// Default work start hour (9am).
pub const DEFAULT_WORK_START: u8 = 9;
/// Default work end hour (5pm).
pub const DEFAULT_WORK_END: u8 = 17;
/// Default sleep start hour (11pm).
pub const DEFAULT_SLEEP_START: u8 = 23;
/// Default sleep end hour (7am).
pub const DEFAULT_SLEEP_END: u8 = 7;

/// Highest accepted hour value; `24` marks the exclusive end of the day.
pub const MAX_HOUR: u8 = 24;

/// One tracked colleague.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// IANA timezone identifier, e.g. `Europe/London`.
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_start: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_end: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_start: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_end: Option<u8>,
}

impl RosterEntry {
    /// Create an entry that uses the default work and sleep hours.
    pub fn new(name: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timezone: timezone.into(),
            work_start: None,
            work_end: None,
            sleep_start: None,
            sleep_end: None,
        }
    }

    pub fn with_work_hours(mut self, start: u8, end: u8) -> Self {
        self.work_start = Some(start);
        self.work_end = Some(end);
        self
    }

    pub fn with_sleep_hours(mut self, start: u8, end: u8) -> Self {
        self.sleep_start = Some(start);
        self.sleep_end = Some(end);
        self
    }

    // ── Resolved hours ───────────────────────────────────────────────

    pub fn work_start(&self) -> u8 {
        self.work_start.unwrap_or(DEFAULT_WORK_START)
    }

    pub fn work_end(&self) -> u8 {
        self.work_end.unwrap_or(DEFAULT_WORK_END)
    }

    pub fn sleep_start(&self) -> u8 {
        self.sleep_start.unwrap_or(DEFAULT_SLEEP_START)
    }

    pub fn sleep_end(&self) -> u8 {
        self.sleep_end.unwrap_or(DEFAULT_SLEEP_END)
    }

    /// Check that the entry can be committed to the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone does not resolve, an hour is above
    /// 24, or the work range is empty or wraps past midnight.
    pub fn validate(&self) -> Result<(), ValidationError> {
        resolve_timezone(&self.timezone)?;

        let hours = [
            ("work_start", self.work_start),
            ("work_end", self.work_end),
            ("sleep_start", self.sleep_start),
            ("sleep_end", self.sleep_end),
        ];
        for (field, value) in hours {
            if let Some(value) = value {
                if value > MAX_HOUR {
                    return Err(ValidationError::InvalidHour { field, value });
                }
            }
        }

        let (start, end) = (self.work_start(), self.work_end());
        if start >= end {
            return Err(ValidationError::InvalidWorkHours { start, end });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_hours_fall_back_to_defaults() {
        let entry = RosterEntry::new("Alice", "America/New_York");
        assert_eq!(entry.work_start(), 9);
        assert_eq!(entry.work_end(), 17);
        assert_eq!(entry.sleep_start(), 23);
        assert_eq!(entry.sleep_end(), 7);
    }

    #[test]
    fn explicit_midnight_is_not_a_default() {
        let entry = RosterEntry::new("Night owl", "UTC").with_sleep_hours(4, 0);
        assert_eq!(entry.sleep_start(), 4);
        assert_eq!(entry.sleep_end(), 0);

        let entry = RosterEntry::new("Early", "UTC").with_work_hours(0, 8);
        assert_eq!(entry.work_start(), 0);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_timezone() {
        let entry = RosterEntry::new("Nobody", "Mars/Olympus_Mons");
        assert_eq!(
            entry.validate(),
            Err(ValidationError::UnknownTimezone("Mars/Olympus_Mons".into()))
        );
    }

    #[test]
    fn validate_rejects_inverted_work_hours() {
        let entry = RosterEntry::new("Bob", "Europe/London").with_work_hours(17, 9);
        assert_eq!(
            entry.validate(),
            Err(ValidationError::InvalidWorkHours { start: 17, end: 9 })
        );

        let entry = RosterEntry::new("Bob", "Europe/London").with_work_hours(9, 9);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn validate_rejects_hours_past_end_of_day() {
        let entry = RosterEntry::new("Bob", "Europe/London").with_sleep_hours(25, 7);
        assert_eq!(
            entry.validate(),
            Err(ValidationError::InvalidHour {
                field: "sleep_start",
                value: 25
            })
        );
    }

    #[test]
    fn wrapping_sleep_hours_are_valid() {
        let entry = RosterEntry::new("Carol", "Asia/Tokyo")
            .with_work_hours(10, 19)
            .with_sleep_hours(1, 9);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn unset_hours_are_omitted_from_toml() {
        let entry = RosterEntry::new("Alice", "America/New_York").with_work_hours(8, 16);
        let text = toml::to_string(&entry).unwrap();
        assert!(text.contains("work_start = 8"));
        assert!(!text.contains("sleep_start"));

        let parsed: RosterEntry = toml::from_str(&text).unwrap();
        assert_eq!(parsed, entry);
    }
}
