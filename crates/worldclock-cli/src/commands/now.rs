use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use worldclock_core::{
    compute_times, format_date, format_time, ComputedTime, Config, Status, TimeFormat,
};

use super::{viewer_zone, CmdResult};
use crate::text::fit;
use crate::tui::theme::status_glyph;

#[derive(Serialize)]
struct NowRow<'a> {
    name: &'a str,
    timezone: &'a str,
    time: String,
    date: String,
    offset: &'a str,
    offset_seconds: i32,
    status: Status,
}

impl<'a> NowRow<'a> {
    fn new(ct: &'a ComputedTime, format: TimeFormat) -> Self {
        Self {
            name: &ct.entry.name,
            timezone: &ct.entry.timezone,
            time: format_time(&ct.local_time, format),
            date: format_date(&ct.local_time),
            offset: &ct.offset_label,
            offset_seconds: ct.offset_seconds,
            status: ct.status(),
        }
    }
}

pub fn run(config_path: &Path, json: bool) -> CmdResult {
    let config = Config::load_from(config_path)?;
    let viewer = viewer_zone(&config);
    let now = Utc::now();
    let computed = compute_times(&config.colleagues, &viewer, now);

    if json {
        let rows: Vec<NowRow> = computed
            .iter()
            .map(|ct| NowRow::new(ct, config.time_format))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let local = viewer.local_time(now);
    println!(
        "Local time: {} ({}) [{}]",
        format_time(&local, config.time_format),
        format_date(&local),
        viewer.name()
    );

    if computed.is_empty() {
        println!("No colleagues configured. Add one with `worldclock colleague add`.");
        return Ok(());
    }

    for ct in &computed {
        println!(
            "{} {} {}  {}  {}",
            status_glyph(ct.status()),
            fit(&ct.entry.name, 25),
            fit(&format_time(&ct.local_time, config.time_format), 11),
            fit(&ct.offset_label, 5),
            format_date(&ct.local_time),
        );
    }
    Ok(())
}
