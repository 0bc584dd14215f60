use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use worldclock_core::TimelineMode;

mod commands;
mod text;
mod tui;

#[derive(Parser)]
#[command(name = "worldclock", version, about = "See where your team is in their day")]
struct Cli {
    /// Config file (default: ~/.config/worldclock/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (the default)
    Dashboard,
    /// Current time for every colleague
    Now {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search the city catalog
    Search {
        /// City, country, abbreviation or timezone fragment
        query: String,
        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Print the 24-hour timeline
    Timeline {
        /// individual or shared (default: from config)
        #[arg(long)]
        mode: Option<TimelineMode>,
        /// Terminal width to lay out for (default: detected)
        #[arg(long, value_name = "COLUMNS")]
        width: Option<usize>,
    },
    /// Roster management
    Colleague {
        #[command(subcommand)]
        action: commands::colleague::ColleagueAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

/// Log filter comes from WORLDCLOCK_LOG (default `warn`). With a log file,
/// output goes there instead of stderr so it cannot tear the dashboard.
fn init_logging(log_file: Option<&Path>) {
    let filter =
        EnvFilter::try_from_env("WORLDCLOCK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => match open_log_file(path) {
            Some(file) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .try_init();
            }
            None => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::sink)
                    .try_init();
            }
        },
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Dashboard);

    let config_path = match commands::resolve_config_path(cli.config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let log_file = matches!(command, Commands::Dashboard).then(|| commands::log_path(&config_path));
    init_logging(log_file.as_deref());

    let result = match command {
        Commands::Dashboard => commands::dashboard::run(&config_path),
        Commands::Now { json } => commands::now::run(&config_path, json),
        Commands::Search { query, limit, json } => {
            commands::search::run(&config_path, &query, limit, json)
        }
        Commands::Timeline { mode, width } => commands::timeline::run(&config_path, mode, width),
        Commands::Colleague { action } => commands::colleague::run(&config_path, action),
        Commands::Config { action } => commands::config::run(&config_path, action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
