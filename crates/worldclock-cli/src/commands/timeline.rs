use std::path::Path;

use chrono::Utc;
use worldclock_core::timeline::{NAME_FIELD_WIDTH, TIME_FIELD_WIDTH};
use worldclock_core::{
    bar_width_for_terminal, compute_times, format_date, format_time, hour_labels, render_rows,
    Config, TimelineBar, TimelineMode,
};

use super::{viewer_zone, CmdResult};
use crate::text::fit;
use crate::tui::theme::{cell_glyph, AWAKE_OFF_GLYPH, PLAIN_MARKER, SLEEP_GLYPH, WORK_GLYPH};

const FALLBACK_COLUMNS: usize = 80;

/// Bar as plain text, marker drawn as `|`.
pub fn plain_bar(bar: &TimelineBar) -> String {
    bar.cells
        .iter()
        .map(|cell| {
            if cell.is_marker {
                PLAIN_MARKER
            } else {
                cell_glyph(cell.class)
            }
        })
        .collect()
}

pub fn run(config_path: &Path, mode: Option<TimelineMode>, width: Option<usize>) -> CmdResult {
    let config = Config::load_from(config_path)?;
    let mode = mode.unwrap_or(config.timeline_mode);
    let columns = width.unwrap_or_else(|| {
        crossterm::terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(FALLBACK_COLUMNS)
    });
    let bar_width = bar_width_for_terminal(columns);

    let viewer = viewer_zone(&config);
    let now = Utc::now();
    let viewer_now = viewer.local_time(now);
    let computed = compute_times(&config.colleagues, &viewer, now);
    let rows = render_rows(&computed, bar_width, mode, &viewer_now);

    println!(
        "Timeline ({}) - Local time: {} ({})",
        mode.name(),
        format_time(&viewer_now, config.time_format),
        format_date(&viewer_now)
    );
    println!();

    for row in &rows {
        println!(
            "{} {} [{}]",
            fit(&row.name, NAME_FIELD_WIDTH),
            fit(&format_time(&row.local_time, config.time_format), TIME_FIELD_WIDTH),
            plain_bar(&row.bar)
        );
    }

    let indent = " ".repeat(NAME_FIELD_WIDTH + TIME_FIELD_WIDTH + 2);
    println!("{indent}{}", hour_labels(bar_width, mode));
    println!();
    println!(
        "{SLEEP_GLYPH} sleep • {AWAKE_OFF_GLYPH} off-hours • {WORK_GLYPH} work • {PLAIN_MARKER} now"
    );
    Ok(())
}
