//! Fuzzy timezone search over the city catalog.
//!
//! ## Scoring
//!
//! Every rule that matches adds its points; a city that matches the query
//! exactly also gets the prefix and substring points.
//!
//! | Condition | Points |
//! |-----------|--------|
//! | city == query | 1000 |
//! | abbreviation == query | 900 |
//! | country == query | 800 |
//! | city starts with query | 500 |
//! | country starts with query | 400 |
//! | abbreviation contains query | 350 |
//! | city contains query | 300 |
//! | country contains query | 250 |
//! | timezone id contains query | 200 |
//! | popularity boost (score > 0) | (6 - popularity) * 10 |
//!
//! Results are ordered by descending score; equal scores keep catalog order.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CityRecord;
use crate::clock::resolve_timezone;

const EXACT_CITY: u32 = 1000;
const EXACT_ABBREV: u32 = 900;
const EXACT_COUNTRY: u32 = 800;
const PREFIX_CITY: u32 = 500;
const PREFIX_COUNTRY: u32 = 400;
const CONTAINS_ABBREV: u32 = 350;
const CONTAINS_CITY: u32 = 300;
const CONTAINS_COUNTRY: u32 = 250;
const CONTAINS_TIMEZONE: u32 = 200;

/// Which field of a city a query lined up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    City,
    Country,
    Abbrev,
    Timezone,
    /// Empty query: every city is listed.
    All,
}

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub city: CityRecord,
    pub current_time: DateTime<Tz>,
    pub score: u32,
    pub match_field: MatchField,
}

/// Score added for popularity alone: rank 1 gets 50, rank 5 gets 10.
pub fn popularity_boost(city: &CityRecord) -> u32 {
    u32::from(6u8.saturating_sub(city.popularity)) * 10
}

/// Search the catalog for `query`.
///
/// An empty (or whitespace-only) query lists the whole catalog ranked by
/// popularity. Otherwise only cities with a positive score are returned.
/// Cities whose timezone cannot be resolved are skipped.
pub fn search(query: &str, catalog: &[CityRecord], now: DateTime<Utc>) -> Vec<SearchResult> {
    let query_lower = query.trim().to_lowercase();

    let mut results: Vec<SearchResult> = catalog
        .iter()
        .filter_map(|city| {
            let (score, match_field) = if query_lower.is_empty() {
                (popularity_boost(city), MatchField::All)
            } else {
                let score = score_match(city, &query_lower);
                if score == 0 {
                    return None;
                }
                (score, match_field(city, &query_lower))
            };

            let tz = resolve_timezone(city.timezone).ok()?;
            Some(SearchResult {
                city: *city,
                current_time: now.with_timezone(&tz),
                score,
                match_field,
            })
        })
        .collect();

    // stable: ties keep catalog order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(query = %query_lower, hits = results.len(), "timezone search");
    results
}

/// Relevance of `city` for an already lower-cased, trimmed query.
pub fn score_match(city: &CityRecord, query_lower: &str) -> u32 {
    let city_lower = city.city.to_lowercase();
    let country_lower = city.country.to_lowercase();
    let timezone_lower = city.timezone.to_lowercase();
    let abbrevs: Vec<String> = city
        .abbreviations
        .iter()
        .map(|a| a.to_lowercase())
        .collect();

    let mut score = 0;

    if city_lower == query_lower {
        score += EXACT_CITY;
    }
    if country_lower == query_lower {
        score += EXACT_COUNTRY;
    }
    if abbrevs.iter().any(|a| a == query_lower) {
        score += EXACT_ABBREV;
    }

    if city_lower.starts_with(query_lower) {
        score += PREFIX_CITY;
    }
    if country_lower.starts_with(query_lower) {
        score += PREFIX_COUNTRY;
    }

    if city_lower.contains(query_lower) {
        score += CONTAINS_CITY;
    }
    if country_lower.contains(query_lower) {
        score += CONTAINS_COUNTRY;
    }
    if timezone_lower.contains(query_lower) {
        score += CONTAINS_TIMEZONE;
    }
    if abbrevs.iter().any(|a| a.contains(query_lower)) {
        score += CONTAINS_ABBREV;
    }

    if score > 0 {
        score += popularity_boost(city);
    }
    score
}

/// Classify what a query matched, for naming the colleague afterwards.
pub fn match_field(city: &CityRecord, query_lower: &str) -> MatchField {
    let city_lower = city.city.to_lowercase();
    let country_lower = city.country.to_lowercase();

    if city_lower.starts_with(query_lower) {
        return MatchField::City;
    }
    if city
        .abbreviations
        .iter()
        .any(|a| a.to_lowercase() == query_lower)
    {
        return MatchField::Abbrev;
    }
    if country_lower.starts_with(query_lower) {
        return MatchField::Country;
    }
    if city_lower.contains(query_lower) {
        return MatchField::City;
    }
    MatchField::Timezone
}

/// How a colleague's name is suffixed with their location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Follow whatever the search query matched.
    #[default]
    Auto,
    City,
    Timezone,
    Abbreviation,
}

/// Build the roster name for a colleague placed through search, e.g.
/// `Alice` + New York found via `est` becomes `Alice (EST)`.
///
/// The suffix is left off when `base_name` already mentions it.
pub fn display_name(
    base_name: &str,
    city: &CityRecord,
    query: &str,
    format: DisplayFormat,
) -> String {
    match format {
        DisplayFormat::City => with_city(base_name, city),
        DisplayFormat::Timezone => with_timezone(base_name, city),
        DisplayFormat::Abbreviation => with_abbrev(base_name, city),
        DisplayFormat::Auto => {
            let query_lower = query.trim().to_lowercase();
            match match_field(city, &query_lower) {
                MatchField::Abbrev => with_abbrev(base_name, city),
                _ => with_city(base_name, city),
            }
        }
    }
}

fn with_city(base_name: &str, city: &CityRecord) -> String {
    if base_name.to_lowercase().contains(&city.city.to_lowercase()) {
        return base_name.to_string();
    }
    format!("{base_name} ({})", city.city)
}

fn with_timezone(base_name: &str, city: &CityRecord) -> String {
    if base_name.contains(city.timezone) {
        return base_name.to_string();
    }
    format!("{base_name} ({})", city.timezone)
}

fn with_abbrev(base_name: &str, city: &CityRecord) -> String {
    let Some(abbrev) = city.abbreviations.first() else {
        return with_city(base_name, city);
    };
    if base_name.to_uppercase().contains(&abbrev.to_uppercase()) {
        return base_name.to_string();
    }
    format!("{base_name} ({abbrev})")
}
