//! Roster management commands for CLI.

use std::path::Path;

use chrono::Utc;
use clap::Subcommand;
use worldclock_core::{catalog, resolve_timezone, search, CityRecord, Config, RosterEntry};

use super::CmdResult;

#[derive(Subcommand)]
pub enum ColleagueAction {
    /// List colleagues with their index
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a colleague
    Add {
        /// Display name
        name: String,
        /// IANA timezone (e.g. "Europe/Berlin") or a city/abbreviation to search for
        location: String,
        /// Work hours, e.g. 9-17 (default: 9-17)
        #[arg(long, value_parser = parse_hours)]
        work: Option<(u8, u8)>,
        /// Sleep hours, e.g. 23-7 (default: 23-7)
        #[arg(long, value_parser = parse_hours)]
        sleep: Option<(u8, u8)>,
    },
    /// Rename or relocate a colleague
    Edit {
        /// Index from `colleague list`
        index: usize,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New IANA timezone or a city/abbreviation to search for
        #[arg(long)]
        location: Option<String>,
    },
    /// Remove a colleague
    Remove {
        /// Index from `colleague list`
        index: usize,
    },
    /// Change work or sleep hours
    Hours {
        /// Index from `colleague list`
        index: usize,
        /// Work hours, e.g. 8-16
        #[arg(long, value_parser = parse_hours, conflicts_with = "clear_work")]
        work: Option<(u8, u8)>,
        /// Sleep hours, e.g. 0-8
        #[arg(long, value_parser = parse_hours, conflicts_with = "clear_sleep")]
        sleep: Option<(u8, u8)>,
        /// Go back to the default work hours
        #[arg(long)]
        clear_work: bool,
        /// Go back to the default sleep hours
        #[arg(long)]
        clear_sleep: bool,
    },
}

/// Parse `START-END` hours, e.g. `9-17` or `23-7`.
fn parse_hours(s: &str) -> Result<(u8, u8), String> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| format!("expected START-END, got '{s}'"))?;
    let start = start
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("invalid start hour '{start}'"))?;
    let end = end
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("invalid end hour '{end}'"))?;
    Ok((start, end))
}

/// Where a location argument points: a zone used as-is, or a catalog city.
enum Location {
    Zone(String),
    City(&'static CityRecord),
}

fn locate(query: &str) -> Result<Location, Box<dyn std::error::Error>> {
    if resolve_timezone(query).is_ok() {
        return Ok(Location::Zone(query.to_string()));
    }
    let results = search(query, catalog::all(), Utc::now());
    let top = results
        .first()
        .ok_or_else(|| format!("no timezone or city matches '{query}'"))?;
    catalog::find_by_city(top.city.city)
        .map(Location::City)
        .ok_or_else(|| format!("no timezone or city matches '{query}'").into())
}

pub fn run(config_path: &Path, action: ColleagueAction) -> CmdResult {
    let mut config = Config::load_from(config_path)?;

    match action {
        ColleagueAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config.colleagues)?);
                return Ok(());
            }
            if config.colleagues.is_empty() {
                println!("No colleagues configured.");
            }
            for (i, entry) in config.colleagues.iter().enumerate() {
                println!(
                    "{i:>3}  {}  {}  work {:02}-{:02}  sleep {:02}-{:02}",
                    entry.name,
                    entry.timezone,
                    entry.work_start(),
                    entry.work_end(),
                    entry.sleep_start(),
                    entry.sleep_end(),
                );
            }
            return Ok(());
        }
        ColleagueAction::Add {
            name,
            location,
            work,
            sleep,
        } => {
            let index = match locate(&location)? {
                Location::Zone(tz) => config.add_colleague(RosterEntry::new(name, tz).with_work_hours(9, 17))?,
                Location::City(city) => config.add_from_search(&name, city, &location)?,
            };
            if let Some(hours) = work {
                config.set_work_hours(index, Some(hours))?;
            }
            if let Some(hours) = sleep {
                config.set_sleep_hours(index, Some(hours))?;
            }
            let entry = &config.colleagues[index];
            println!("Added [{index}] {} ({})", entry.name, entry.timezone);
        }
        ColleagueAction::Edit {
            index,
            name,
            location,
        } => {
            let current = config
                .colleagues
                .get(index)
                .cloned()
                .ok_or_else(|| format!("no colleague at index {index}"))?;
            let base_name = name.unwrap_or_else(|| current.name.clone());

            match location {
                Some(query) => match locate(&query)? {
                    Location::Zone(tz) => {
                        let mut entry = current;
                        entry.name = base_name;
                        entry.timezone = tz;
                        config.update_colleague(index, entry)?;
                    }
                    Location::City(city) => {
                        config.update_from_search(index, &base_name, city, &query)?;
                    }
                },
                None => {
                    let mut entry = current;
                    entry.name = base_name;
                    config.update_colleague(index, entry)?;
                }
            }
            let entry = &config.colleagues[index];
            println!("Updated [{index}] {} ({})", entry.name, entry.timezone);
        }
        ColleagueAction::Remove { index } => {
            let removed = config.remove_colleague(index)?;
            println!("Removed {}", removed.name);
        }
        ColleagueAction::Hours {
            index,
            work,
            sleep,
            clear_work,
            clear_sleep,
        } => {
            if clear_work {
                config.set_work_hours(index, None)?;
            } else if let Some(hours) = work {
                config.set_work_hours(index, Some(hours))?;
            }
            if clear_sleep {
                config.set_sleep_hours(index, None)?;
            } else if let Some(hours) = sleep {
                config.set_sleep_hours(index, Some(hours))?;
            }
            let entry = config
                .colleagues
                .get(index)
                .ok_or_else(|| format!("no colleague at index {index}"))?;
            println!(
                "{}: work {:02}-{:02}, sleep {:02}-{:02}",
                entry.name,
                entry.work_start(),
                entry.work_end(),
                entry.sleep_start(),
                entry.sleep_end()
            );
        }
    }

    config.save_to(config_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hours_accepts_wrapping_ranges() {
        assert_eq!(parse_hours("9-17"), Ok((9, 17)));
        assert_eq!(parse_hours("23-7"), Ok((23, 7)));
        assert_eq!(parse_hours(" 0 - 8 "), Ok((0, 8)));
    }

    #[test]
    fn parse_hours_rejects_garbage() {
        assert!(parse_hours("9").is_err());
        assert!(parse_hours("nine-17").is_err());
        assert!(parse_hours("9-300").is_err());
    }

    #[test]
    fn locate_prefers_iana_ids() {
        assert!(matches!(locate("Europe/Berlin"), Ok(Location::Zone(tz)) if tz == "Europe/Berlin"));
        assert!(matches!(locate("tokyo"), Ok(Location::City(c)) if c.city == "Tokyo"));
        assert!(locate("qqqqzzzz").is_err());
    }
}
