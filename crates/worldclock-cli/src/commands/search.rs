use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use worldclock_core::{catalog, format_time, search, Config, MatchField, SearchResult, TimeFormat};

use super::CmdResult;

#[derive(Serialize)]
struct SearchRow {
    city: &'static str,
    country: &'static str,
    timezone: &'static str,
    abbreviations: &'static [&'static str],
    time: String,
    score: u32,
    match_field: MatchField,
}

impl SearchRow {
    fn new(result: &SearchResult, format: TimeFormat) -> Self {
        Self {
            city: result.city.city,
            country: result.city.country,
            timezone: result.city.timezone,
            abbreviations: result.city.abbreviations,
            time: format_time(&result.current_time, format),
            score: result.score,
            match_field: result.match_field,
        }
    }
}

/// `City, Country (Zone) [ABBR/ABBR] - time`
pub fn describe(result: &SearchResult, format: TimeFormat) -> String {
    let abbrevs = if result.city.abbreviations.is_empty() {
        String::new()
    } else {
        format!(" [{}]", result.city.abbreviations.join("/"))
    };
    format!(
        "{}, {} ({}){} - {}",
        result.city.city,
        result.city.country,
        result.city.timezone,
        abbrevs,
        format_time(&result.current_time, format)
    )
}

pub fn run(config_path: &Path, query: &str, limit: usize, json: bool) -> CmdResult {
    let config = Config::load_from(config_path)?;
    let mut results = search(query, catalog::all(), Utc::now());
    results.truncate(limit);

    if json {
        let rows: Vec<SearchRow> = results
            .iter()
            .map(|r| SearchRow::new(r, config.time_format))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for '{query}'");
        return Ok(());
    }
    for result in &results {
        println!("{}", describe(result, config.time_format));
    }
    Ok(())
}
