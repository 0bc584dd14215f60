//! 24-hour occupancy bars.
//!
//! A day is mapped linearly onto `width` cells; cell `i` covers the hours
//! `[i / width * 24, (i + 1) / width * 24)`. Each cell is classified as sleep,
//! work or awake-but-off from the colleague's configured hours, and exactly
//! one cell carries the "now" marker for the viewer's current time.
//!
//! In [`TimelineMode::Shared`] every bar is drawn on the viewer's axis, so a
//! colleague five and a half hours ahead has their day shifted left by
//! 5.5 hours worth of cells. Positions are computed in whole seconds scaled
//! by the width, which keeps the shift exact and periodic over 24 hours.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::clock::ComputedTime;
use crate::roster::RosterEntry;

/// Narrowest bar: one cell per hour.
pub const MIN_BAR_WIDTH: usize = 24;
/// Widest bar: two cells per hour. Extra space stays blank.
pub const IDEAL_BAR_WIDTH: usize = 48;

/// Columns for the colleague name in a timeline row.
pub const NAME_FIELD_WIDTH: usize = 25;
/// Columns for the colleague's clock in a timeline row.
pub const TIME_FIELD_WIDTH: usize = 12;
/// Everything on a row that is not the bar: name, time, padding, brackets.
pub const RESERVED_COLUMNS: usize = NAME_FIELD_WIDTH + TIME_FIELD_WIDTH + 5 + 2;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const MINUTES_PER_DAY: usize = 24 * 60;

/// How bars relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineMode {
    /// Each bar is the colleague's own day, midnight to midnight.
    Individual,
    /// Every bar is drawn on the viewer's local day.
    #[default]
    Shared,
}

impl TimelineMode {
    pub fn toggle(self) -> Self {
        match self {
            TimelineMode::Individual => TimelineMode::Shared,
            TimelineMode::Shared => TimelineMode::Individual,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimelineMode::Individual => "individual",
            TimelineMode::Shared => "shared",
        }
    }
}

impl std::str::FromStr for TimelineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "individual" => Ok(TimelineMode::Individual),
            "shared" => Ok(TimelineMode::Shared),
            other => Err(format!("unknown timeline mode '{other}'")),
        }
    }
}

/// Semantic class of one timeline cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellClass {
    Sleep,
    AwakeOff,
    Work,
    /// Inside the work range on a weekend day.
    WeekendWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub class: CellClass,
    pub is_marker: bool,
}

/// A fixed-width row of classified cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineBar {
    pub cells: Vec<Cell>,
}

impl TimelineBar {
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn marker_index(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_marker)
    }

    pub fn classes(&self) -> impl Iterator<Item = CellClass> + '_ {
        self.cells.iter().map(|c| c.class)
    }
}

/// Half-open hour range test that wraps past midnight when `start > end`.
///
/// `in_range(h, 9, 17)` is `9 <= h < 17`; `in_range(h, 23, 7)` is
/// `h >= 23 || h < 7`.
pub fn in_range(hour: u8, start: u8, end: u8) -> bool {
    if start <= end {
        hour >= start && hour < end
    } else {
        hour >= start || hour < end
    }
}

/// Cell holding the "now" marker: `floor((hour + minute / 60) / 24 * width)`.
///
/// Returns `None` for an empty bar.
pub fn marker_index<T: Timelike>(viewer_now: &T, width: usize) -> Option<usize> {
    if width == 0 {
        return None;
    }
    let minutes = (viewer_now.hour() * 60 + viewer_now.minute()) as usize;
    Some(minutes * width / MINUTES_PER_DAY)
}

/// Hour (0..=23) that cell `index` shows on the colleague's own clock, given
/// the colleague's offset from the bar's axis.
///
/// Equivalent to `floor(((index / width + offset_hours / 24) mod 1) * 24)`,
/// evaluated without floating point.
pub fn represented_hour(index: usize, width: usize, offset_seconds: i64) -> u8 {
    if width == 0 {
        return 0;
    }
    let width = width as i64;
    let position = (index as i64 * SECONDS_PER_DAY + offset_seconds * width)
        .rem_euclid(SECONDS_PER_DAY * width);
    (position / (SECONDS_PER_HOUR * width)) as u8
}

/// Classify one hour of a colleague's day.
///
/// The work range is tested regardless of the weekend flag; on weekends a
/// work-range hour becomes [`CellClass::WeekendWork`] rather than `Work`.
pub fn classify_hour(hour: u8, entry: &RosterEntry, is_weekend: bool) -> CellClass {
    if in_range(hour, entry.sleep_start(), entry.sleep_end()) {
        return CellClass::Sleep;
    }
    let in_work = in_range(hour, entry.work_start(), entry.work_end());
    match (in_work, is_weekend) {
        (true, false) => CellClass::Work,
        (true, true) => CellClass::WeekendWork,
        (false, _) => CellClass::AwakeOff,
    }
}

/// Render one colleague's bar.
///
/// `viewer_now` is the viewer's local time; it places the marker in both
/// modes.
pub fn render_bar<T: Timelike>(
    computed: &ComputedTime,
    width: usize,
    mode: TimelineMode,
    viewer_now: &T,
) -> TimelineBar {
    let offset = match mode {
        TimelineMode::Individual => 0,
        TimelineMode::Shared => i64::from(computed.offset_seconds),
    };
    let marker = marker_index(viewer_now, width);

    let cells = (0..width)
        .map(|i| {
            let hour = represented_hour(i, width, offset);
            Cell {
                class: classify_hour(hour, &computed.entry, computed.is_weekend),
                is_marker: marker == Some(i),
            }
        })
        .collect();

    TimelineBar { cells }
}

/// Bar width for the space left after `reserved` columns, clamped to
/// `[MIN_BAR_WIDTH, IDEAL_BAR_WIDTH]`.
pub fn bar_width(available: usize, reserved: usize) -> usize {
    available
        .saturating_sub(reserved)
        .clamp(MIN_BAR_WIDTH, IDEAL_BAR_WIDTH)
}

/// Bar width for a terminal `columns` wide using the standard row layout.
pub fn bar_width_for_terminal(columns: usize) -> usize {
    bar_width(columns, RESERVED_COLUMNS)
}

/// A rendered bar plus what the presentation layer prints beside it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRow {
    pub name: String,
    pub local_time: DateTime<Tz>,
    pub offset_label: String,
    pub bar: TimelineBar,
}

/// Render a bar for every computed colleague, in order.
pub fn render_rows<T: Timelike>(
    computed: &[ComputedTime],
    width: usize,
    mode: TimelineMode,
    viewer_now: &T,
) -> Vec<TimelineRow> {
    computed
        .iter()
        .map(|ct| TimelineRow {
            name: ct.entry.name.clone(),
            local_time: ct.local_time,
            offset_label: ct.offset_label.clone(),
            bar: render_bar(ct, width, mode, viewer_now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{compute_time, ViewerZone};
    use chrono::{NaiveTime, Utc};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// Colleague in UTC viewed from UTC on a Wednesday.
    fn weekday_utc(entry: RosterEntry) -> ComputedTime {
        let now = "2024-01-17T12:00:00Z".parse::<chrono::DateTime<Utc>>().unwrap();
        compute_time(&entry, &ViewerZone::Named(Tz::UTC), now).unwrap()
    }

    fn classes(bar: &TimelineBar) -> Vec<CellClass> {
        bar.classes().collect()
    }

    #[test]
    fn in_range_plain_and_wrapping() {
        assert!(in_range(9, 9, 17));
        assert!(in_range(16, 9, 17));
        assert!(!in_range(17, 9, 17));
        assert!(!in_range(8, 9, 17));

        assert!(in_range(23, 23, 7));
        assert!(in_range(0, 23, 7));
        assert!(in_range(6, 23, 7));
        assert!(!in_range(7, 23, 7));
        assert!(!in_range(12, 23, 7));
    }

    #[test]
    fn in_range_empty_when_start_equals_end() {
        for h in 0..24 {
            assert!(!in_range(h, 5, 5));
        }
    }

    #[test]
    fn individual_bar_one_cell_per_hour() {
        let ct = weekday_utc(RosterEntry::new("Ann", "UTC"));
        let bar = render_bar(&ct, 24, TimelineMode::Individual, &at(12, 0));
        let c = classes(&bar);

        assert!(c[0..7].iter().all(|&k| k == CellClass::Sleep));
        assert!(c[7..9].iter().all(|&k| k == CellClass::AwakeOff));
        assert!(c[9..17].iter().all(|&k| k == CellClass::Work));
        assert!(c[17..23].iter().all(|&k| k == CellClass::AwakeOff));
        assert_eq!(c[23], CellClass::Sleep);
    }

    #[test]
    fn individual_bar_two_cells_per_hour() {
        let ct = weekday_utc(RosterEntry::new("Ann", "UTC"));
        let bar = render_bar(&ct, 48, TimelineMode::Individual, &at(0, 0));
        assert_eq!(bar.width(), 48);
        assert_eq!(bar.cells[17].class, CellClass::AwakeOff); // 8:30
        assert_eq!(bar.cells[18].class, CellClass::Work); // 9:00
        assert_eq!(bar.cells[33].class, CellClass::Work); // 16:30
        assert_eq!(bar.cells[34].class, CellClass::AwakeOff); // 17:00
    }

    #[test]
    fn exactly_one_marker_at_viewer_time() {
        let ct = weekday_utc(RosterEntry::new("Ann", "UTC"));
        let bar = render_bar(&ct, 48, TimelineMode::Individual, &at(10, 30));
        assert_eq!(bar.cells.iter().filter(|c| c.is_marker).count(), 1);
        assert_eq!(bar.marker_index(), Some(21));
    }

    #[test]
    fn marker_stays_inside_bar_at_end_of_day() {
        assert_eq!(marker_index(&at(23, 59), 24), Some(23));
        assert_eq!(marker_index(&at(23, 59), 48), Some(47));
        assert_eq!(marker_index(&at(0, 0), 48), Some(0));
        assert_eq!(marker_index(&at(12, 0), 0), None);
    }

    #[test]
    fn marker_uses_viewer_clock_even_in_individual_mode() {
        let now = "2024-01-17T15:00:00Z".parse::<chrono::DateTime<Utc>>().unwrap();
        let viewer = ViewerZone::Named(chrono_tz::America::New_York);
        let ct = compute_time(&RosterEntry::new("Kenji", "Asia/Tokyo"), &viewer, now).unwrap();
        let viewer_now = viewer.local_time(now);

        let bar = render_bar(&ct, 24, TimelineMode::Individual, &viewer_now);
        // 10:00 in New York, midnight in Tokyo.
        assert_eq!(bar.marker_index(), Some(10));
    }

    #[test]
    fn weekend_work_hours_are_tinted_not_work() {
        let now = "2024-01-20T12:00:00Z".parse::<chrono::DateTime<Utc>>().unwrap();
        let ct = compute_time(&RosterEntry::new("Ann", "UTC"), &ViewerZone::Named(Tz::UTC), now)
            .unwrap();
        assert!(ct.is_weekend);

        let bar = render_bar(&ct, 24, TimelineMode::Individual, &at(12, 0));
        assert!(bar.classes().all(|c| c != CellClass::Work));
        assert_eq!(bar.cells[10].class, CellClass::WeekendWork);
        assert_eq!(bar.cells[8].class, CellClass::AwakeOff);
        assert_eq!(bar.cells[3].class, CellClass::Sleep);
    }

    #[test]
    fn sleep_wins_over_overlapping_work() {
        let entry = RosterEntry::new("Odd", "UTC")
            .with_work_hours(6, 14)
            .with_sleep_hours(22, 8);
        assert_eq!(classify_hour(7, &entry, false), CellClass::Sleep);
        assert_eq!(classify_hour(8, &entry, false), CellClass::Work);
    }

    #[test]
    fn shared_bar_shifts_by_whole_hours() {
        let mut ct = weekday_utc(RosterEntry::new("Raj", "UTC"));
        ct.offset_seconds = 5 * 3600;

        let bar = render_bar(&ct, 24, TimelineMode::Shared, &at(0, 0));
        // Viewer 04:00 is colleague 09:00.
        assert_eq!(bar.cells[3].class, CellClass::AwakeOff);
        assert_eq!(bar.cells[4].class, CellClass::Work);
        assert_eq!(bar.cells[11].class, CellClass::Work);
        assert_eq!(bar.cells[12].class, CellClass::AwakeOff);
        // Viewer 18:00 is colleague 23:00.
        assert_eq!(bar.cells[18].class, CellClass::Sleep);
        assert_eq!(bar.cells[1].class, CellClass::Sleep);
        assert_eq!(bar.cells[2].class, CellClass::AwakeOff);
    }

    #[test]
    fn shared_bar_negative_offset_wraps() {
        let mut ct = weekday_utc(RosterEntry::new("Lee", "UTC"));
        ct.offset_seconds = -8 * 3600;

        let bar = render_bar(&ct, 24, TimelineMode::Shared, &at(0, 0));
        // Viewer 17:00 is colleague 09:00; viewer 00:00 is colleague 16:00.
        assert_eq!(bar.cells[17].class, CellClass::Work);
        assert_eq!(bar.cells[0].class, CellClass::Work);
        assert_eq!(bar.cells[1].class, CellClass::AwakeOff);
    }

    #[test]
    fn shared_bar_honours_half_hour_offsets() {
        let mut whole = weekday_utc(RosterEntry::new("Priya", "UTC"));
        whole.offset_seconds = 5 * 3600;
        let mut half = whole.clone();
        half.offset_seconds = 5 * 3600 + 1800;

        let whole_bar = render_bar(&whole, 48, TimelineMode::Shared, &at(0, 0));
        let half_bar = render_bar(&half, 48, TimelineMode::Shared, &at(0, 0));
        // Cell 7 is viewer 03:30: colleague 08:30 vs 09:00.
        assert_eq!(whole_bar.cells[7].class, CellClass::AwakeOff);
        assert_eq!(half_bar.cells[7].class, CellClass::Work);
        assert_eq!(half_bar.cells[6].class, CellClass::AwakeOff);
    }

    #[test]
    fn individual_mode_ignores_offset() {
        let mut ct = weekday_utc(RosterEntry::new("Ann", "UTC"));
        let baseline = render_bar(&ct, 48, TimelineMode::Individual, &at(9, 0));
        ct.offset_seconds = 7 * 3600;
        assert_eq!(render_bar(&ct, 48, TimelineMode::Individual, &at(9, 0)), baseline);
    }

    #[test]
    fn represented_hour_without_offset_is_linear() {
        for width in [24usize, 30, 37, 48] {
            for i in 0..width {
                let expected = (i * 24 / width) as u8;
                assert_eq!(represented_hour(i, width, 0), expected, "width {width} cell {i}");
            }
        }
    }

    #[test]
    fn bar_width_clamps() {
        assert_eq!(bar_width(0, 44), MIN_BAR_WIDTH);
        assert_eq!(bar_width(60, 44), MIN_BAR_WIDTH);
        assert_eq!(bar_width(80, 44), 36);
        assert_eq!(bar_width(92, 44), IDEAL_BAR_WIDTH);
        assert_eq!(bar_width(500, 44), IDEAL_BAR_WIDTH);
        assert_eq!(bar_width_for_terminal(100), IDEAL_BAR_WIDTH);
        assert_eq!(RESERVED_COLUMNS, 44);
    }

    #[test]
    fn render_rows_keeps_metadata() {
        let mut ct = weekday_utc(RosterEntry::new("Ann", "UTC"));
        ct.offset_label = "+2h".into();
        let rows = render_rows(&[ct.clone()], 24, TimelineMode::Shared, &at(1, 0));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ann");
        assert_eq!(rows[0].offset_label, "+2h");
        assert_eq!(rows[0].bar.marker_index(), Some(1));
    }

    #[test]
    fn timeline_mode_parses_and_toggles() {
        assert_eq!("Shared".parse::<TimelineMode>(), Ok(TimelineMode::Shared));
        assert_eq!("individual".parse::<TimelineMode>(), Ok(TimelineMode::Individual));
        assert!("sideways".parse::<TimelineMode>().is_err());
        assert_eq!(TimelineMode::Shared.toggle(), TimelineMode::Individual);
    }
}
