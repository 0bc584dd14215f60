//! # Worldclock Core Library
//!
//! This library provides the core logic for the worldclock team dashboard:
//! where each colleague is in their day, relative to the person looking.
//! Everything the terminal front end shows is computed here as plain data,
//! so the CLI subcommands and the interactive dashboard share one engine.
//!
//! ## Architecture
//!
//! - **Clock**: Per-colleague local time, offset from the viewer and
//!   working/weekend status at a given instant
//! - **Catalog & Search**: A static table of world cities and a ranked
//!   substring search over it
//! - **Timeline**: 24-hour occupancy bars in individual or shared mode, plus
//!   the hour axis drawn beneath them
//! - **Storage**: TOML-based configuration holding the roster and preferences
//!
//! ## Key Components
//!
//! - [`compute_times`]: Roster in, [`ComputedTime`] rows out
//! - [`search`]: Catalog lookup ranked by [`SearchResult::score`]
//! - [`render_rows`]: Timeline bars for a set of computed rows
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod clock;
pub mod error;
pub mod roster;
pub mod search;
pub mod storage;
pub mod timeline;

pub use catalog::CityRecord;
pub use clock::{
    compute_indexed_times, compute_time, compute_times, format_date, format_time, offset_label,
    resolve_timezone, validate_timezone, ComputedTime, Status, TimeFormat, ViewerZone,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use roster::RosterEntry;
pub use search::{display_name, search, DisplayFormat, MatchField, SearchResult};
pub use storage::{data_dir, ColorScheme, Config};
pub use timeline::{
    bar_width_for_terminal, hour_labels, render_bar, render_rows, CellClass, TimelineBar,
    TimelineMode, TimelineRow,
};
