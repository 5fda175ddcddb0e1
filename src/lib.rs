#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for check_table.rs and tests)
pub use app::App;
pub use config::PERSISTENCE;
pub use data::TimeTable;
pub use engine::PrayerResolver;

// CLI argument parsing
use {
    anyhow::Result,
    chrono::NaiveDateTime,
    clap::{Parser, Subcommand},
    std::path::PathBuf,
    utils::TimeUtils,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Time table JSON to use instead of the bundled one
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// City to show (key, English or Bengali name). Defaults to the saved city
    #[arg(long, global = true)]
    pub city: Option<String>,

    /// Pretend the current Bangladesh time is this (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, global = true, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,

    /// Show labels, dates and times in Bengali
    #[arg(long, global = true, default_value_t = false)]
    pub bengali: bool,

    /// Preference file holding the saved city
    #[arg(long, global = true, default_value = PERSISTENCE.app.state_path)]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Today's prayers with Sehri and Iftar countdowns (default)
    Today,
    /// The 30-day Ramadan calendar
    Calendar {
        /// Print the schedule as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Countdown to the next prayer
    Countdown {
        /// Keep ticking once per second for this many seconds
        #[arg(long, default_value_t = 0)]
        watch: u64,
    },
    /// List the supported cities
    Cities,
    /// Save the city to show by default
    Select { city: String },
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, TimeUtils::CLI_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS], got '{}': {}", raw, e))
}

/// Main application entry point.
/// This is the public API for the binary to call
pub fn run(args: Cli) -> Result<()> {
    let mut app = App::new(&args)?;
    app.run(args.command.unwrap_or(Command::Today))
}
