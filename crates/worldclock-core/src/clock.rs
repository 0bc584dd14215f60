//! Time computation engine.
//!
//! Turns roster entries into what the dashboard shows for one frame: each
//! colleague's wall-clock time, their offset from the viewer and whether they
//! are working right now. Everything here is a pure function of the roster,
//! the viewer's zone and a reference instant, so the caller simply recomputes
//! the whole set on every tick.
//!
//! ## Usage
//!
//! ```ignore
//! let viewer = ViewerZone::detect(None);
//! let rows = compute_times(&config.colleagues, &viewer, Utc::now());
//! ```

use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::roster::RosterEntry;

const SECONDS_PER_HOUR: i32 = 3600;

/// Resolve an IANA timezone identifier.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownTimezone`] if the identifier is not in
/// the timezone database.
pub fn resolve_timezone(id: &str) -> Result<Tz, ValidationError> {
    id.parse::<Tz>()
        .map_err(|_| ValidationError::UnknownTimezone(id.to_string()))
}

/// Check that a user-entered timezone can be committed to the roster.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownTimezone`] when resolution fails.
pub fn validate_timezone(id: &str) -> Result<(), ValidationError> {
    resolve_timezone(id).map(|_| ())
}

/// The timezone of the person looking at the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerZone {
    /// A named IANA zone.
    Named(Tz),
    /// Whatever offset the host reports for local time.
    System,
}

impl ViewerZone {
    /// Pick the viewer zone: explicit override first, then `$TZ`, then the
    /// host's local time.
    pub fn detect(override_id: Option<&str>) -> Self {
        if let Some(id) = override_id {
            match resolve_timezone(id) {
                Ok(tz) => return Self::Named(tz),
                Err(e) => debug!("ignoring viewer timezone override: {e}"),
            }
        }
        std::env::var("TZ")
            .ok()
            .and_then(|id| resolve_timezone(id.trim_start_matches(':')).ok())
            .map(Self::Named)
            .unwrap_or(Self::System)
    }

    /// UTC offset of the viewer at `instant`, in seconds east of UTC.
    pub fn offset_seconds_at(&self, instant: DateTime<Utc>) -> i32 {
        self.local_time(instant).offset().local_minus_utc()
    }

    /// The viewer's wall-clock time at `instant`.
    pub fn local_time(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Named(tz) => instant.with_timezone(tz).fixed_offset(),
            Self::System => instant.with_timezone(&Local).fixed_offset(),
        }
    }

    /// Human-readable name, e.g. `Europe/Paris` or `local`.
    pub fn name(&self) -> String {
        match self {
            Self::Named(tz) => tz.name().to_string(),
            Self::System => "local".to_string(),
        }
    }
}

impl From<Tz> for ViewerZone {
    fn from(tz: Tz) -> Self {
        Self::Named(tz)
    }
}

/// Computed time information for one roster entry at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedTime {
    pub entry: RosterEntry,
    pub local_time: DateTime<Tz>,
    /// Exact offset from the viewer in seconds (may be a fractional hour).
    pub offset_seconds: i32,
    /// Whole-hour display form of `offset_seconds`: `same`, `+5h`, `-8h`.
    pub offset_label: String,
    pub is_working_time: bool,
    pub is_weekend: bool,
}

impl ComputedTime {
    /// Signed, fractional hour difference from the viewer.
    pub fn offset_hours(&self) -> f64 {
        f64::from(self.offset_seconds) / f64::from(SECONDS_PER_HOUR)
    }

    pub fn status(&self) -> Status {
        if self.is_weekend {
            Status::Weekend
        } else if self.is_working_time {
            Status::Working
        } else {
            Status::OffHours
        }
    }
}

/// Coarse availability of a colleague, used for row indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Working,
    OffHours,
    Weekend,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Working => "working",
            Status::OffHours => "off-hours",
            Status::Weekend => "weekend",
        }
    }
}

/// Format an offset difference for display.
///
/// The hour count truncates toward zero, so `+5:30` shows as `+5h` and
/// `-0:30` as `same`.
pub fn offset_label(offset_seconds: i32) -> String {
    let hours = offset_seconds / SECONDS_PER_HOUR;
    match hours {
        0 => "same".to_string(),
        h if h > 0 => format!("+{h}h"),
        h => format!("{h}h"),
    }
}

/// `true` for Saturday and Sunday.
pub fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Compute the time information for a single entry.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownTimezone`] if the entry's timezone does
/// not resolve.
pub fn compute_time(
    entry: &RosterEntry,
    viewer: &ViewerZone,
    now: DateTime<Utc>,
) -> Result<ComputedTime, ValidationError> {
    let tz = resolve_timezone(&entry.timezone)?;
    let local_time = now.with_timezone(&tz);

    let colleague_offset = local_time.offset().fix().local_minus_utc();
    let offset_seconds = colleague_offset - viewer.offset_seconds_at(now);

    let is_weekend = is_weekend_day(local_time.weekday());
    let hour = local_time.hour();
    let is_working_time = !is_weekend
        && hour >= u32::from(entry.work_start())
        && hour < u32::from(entry.work_end());

    Ok(ComputedTime {
        entry: entry.clone(),
        local_time,
        offset_seconds,
        offset_label: offset_label(offset_seconds),
        is_working_time,
        is_weekend,
    })
}

/// Compute the time information for every entry that resolves.
///
/// Entries with an unknown timezone are left out of the result; the others
/// keep their relative order.
pub fn compute_times(
    entries: &[RosterEntry],
    viewer: &ViewerZone,
    now: DateTime<Utc>,
) -> Vec<ComputedTime> {
    compute_indexed_times(entries, viewer, now)
        .into_iter()
        .map(|(_, computed)| computed)
        .collect()
}

/// Like [`compute_times`], but each row carries the position of its entry in
/// `entries`.
pub fn compute_indexed_times(
    entries: &[RosterEntry],
    viewer: &ViewerZone,
    now: DateTime<Utc>,
) -> Vec<(usize, ComputedTime)> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match compute_time(entry, viewer, now) {
            Ok(computed) => Some((index, computed)),
            Err(e) => {
                debug!(name = %entry.name, "skipping roster entry: {e}");
                None
            }
        })
        .collect()
}

/// Clock display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

impl TimeFormat {
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::H24 => TimeFormat::H12,
            TimeFormat::H12 => TimeFormat::H24,
        }
    }
}

/// `15:04:05` or `3:04:05 PM`.
pub fn format_time<T: TimeZone>(time: &DateTime<T>, format: TimeFormat) -> String
where
    T::Offset: std::fmt::Display,
{
    match format {
        TimeFormat::H24 => time.format("%H:%M:%S").to_string(),
        TimeFormat::H12 => time.format("%-I:%M:%S %p").to_string(),
    }
}

/// `Mon, Jan 02`.
pub fn format_date<T: TimeZone>(time: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    time.format("%a, %b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::{America, Asia, Europe};

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn offset_label_formats() {
        assert_eq!(offset_label(0), "same");
        assert_eq!(offset_label(5 * 3600), "+5h");
        assert_eq!(offset_label(-8 * 3600), "-8h");
    }

    #[test]
    fn offset_label_truncates_fractional_hours() {
        assert_eq!(offset_label(5 * 3600 + 1800), "+5h");
        assert_eq!(offset_label(-(3 * 3600 + 1800)), "-3h");
        assert_eq!(offset_label(1800), "same");
        assert_eq!(offset_label(-1800), "same");
    }

    #[test]
    fn working_time_is_half_open() {
        let viewer = ViewerZone::Named(Tz::UTC);
        let entry = RosterEntry::new("Ann", "UTC");
        // Wednesday
        let at_start = compute_time(&entry, &viewer, instant("2024-01-17T09:00:00Z")).unwrap();
        let at_end = compute_time(&entry, &viewer, instant("2024-01-17T17:00:00Z")).unwrap();
        let before_end = compute_time(&entry, &viewer, instant("2024-01-17T16:59:59Z")).unwrap();
        assert!(at_start.is_working_time);
        assert!(before_end.is_working_time);
        assert!(!at_end.is_working_time);
    }

    #[test]
    fn weekend_is_never_working_time() {
        let viewer = ViewerZone::Named(Tz::UTC);
        let entry = RosterEntry::new("Ann", "UTC");
        // Saturday, 11:00
        let computed = compute_time(&entry, &viewer, instant("2024-01-20T11:00:00Z")).unwrap();
        assert!(computed.is_weekend);
        assert!(!computed.is_working_time);
        assert_eq!(computed.status(), Status::Weekend);
    }

    #[test]
    fn weekend_follows_colleague_calendar() {
        // Friday 20:00 in New York is already Saturday in Tokyo.
        let viewer = ViewerZone::Named(America::New_York);
        let entry = RosterEntry::new("Kenji", "Asia/Tokyo");
        let computed = compute_time(&entry, &viewer, instant("2024-01-20T01:00:00Z")).unwrap();
        assert_eq!(computed.local_time.weekday(), Weekday::Sat);
        assert!(computed.is_weekend);
        assert_eq!(computed.offset_label, "+14h");
    }

    #[test]
    fn fractional_offsets_keep_exact_seconds() {
        let viewer = ViewerZone::Named(Europe::London);
        let entry = RosterEntry::new("Priya", "Asia/Kolkata");
        let computed = compute_time(&entry, &viewer, instant("2024-01-17T12:00:00Z")).unwrap();
        assert_eq!(computed.offset_seconds, 5 * 3600 + 1800);
        assert_eq!(computed.offset_label, "+5h");
        assert!((computed.offset_hours() - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn compute_times_skips_unknown_zones() {
        let viewer = ViewerZone::Named(Asia::Tokyo);
        let entries = vec![
            RosterEntry::new("A", "Europe/Berlin"),
            RosterEntry::new("B", "Not/AZone"),
            RosterEntry::new("C", "America/Chicago"),
        ];
        let computed = compute_times(&entries, &viewer, Utc::now());
        let names: Vec<_> = computed.iter().map(|c| c.entry.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn indexed_times_keep_roster_positions() {
        let viewer = ViewerZone::Named(Asia::Tokyo);
        let entries = vec![
            RosterEntry::new("A", "Not/AZone"),
            RosterEntry::new("B", "Europe/Berlin"),
            RosterEntry::new("C", "Also/Bogus"),
            RosterEntry::new("D", "America/Chicago"),
        ];
        let computed = compute_indexed_times(&entries, &viewer, Utc::now());
        let rows: Vec<_> = computed
            .iter()
            .map(|(i, c)| (*i, c.entry.name.as_str()))
            .collect();
        assert_eq!(rows, [(1, "B"), (3, "D")]);
    }

    #[test]
    fn dst_changes_the_offset_label() {
        let viewer = ViewerZone::Named(America::New_York);
        let entry = RosterEntry::new("Bob", "Europe/London");
        // Both zones on winter time.
        let jan = compute_time(&entry, &viewer, instant("2024-01-17T15:00:00Z")).unwrap();
        // US already on DST, UK not yet.
        let mar = compute_time(&entry, &viewer, instant("2024-03-20T15:00:00Z")).unwrap();
        assert_eq!(jan.offset_label, "+5h");
        assert_eq!(mar.offset_label, "+4h");
    }

    #[test]
    fn viewer_override_wins() {
        assert_eq!(
            ViewerZone::detect(Some("Asia/Tokyo")),
            ViewerZone::Named(Asia::Tokyo)
        );
    }

    #[test]
    fn format_time_in_both_styles() {
        let t = instant("2024-01-17T15:04:05Z").with_timezone(&Tz::UTC);
        assert_eq!(format_time(&t, TimeFormat::H24), "15:04:05");
        assert_eq!(format_time(&t, TimeFormat::H12), "3:04:05 PM");
        assert_eq!(format_date(&t), "Wed, Jan 17");
    }

    #[test]
    fn time_format_serializes_as_short_names() {
        assert_eq!(serde_json::to_string(&TimeFormat::H12).unwrap(), "\"12h\"");
        assert_eq!(
            serde_json::from_str::<TimeFormat>("\"24h\"").unwrap(),
            TimeFormat::H24
        );
    }
}
