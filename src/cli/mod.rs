//! CLI argument parsing for rumo
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;
use parse::{parse_heuristic, parse_strategy};
use rumo_core::graph::{HeuristicKind, Strategy};

/// Rumo - route planner for Brazil's state capitals
#[derive(Parser, Debug)]
#[command(name = "rumo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the capitals on the map
    Capitals,

    /// Show the direct connections of a capital
    Borders {
        /// Capital name
        capital: String,
    },

    /// Find a route between two capitals
    Route {
        /// Origin capital
        from: String,

        /// Destination capital
        to: String,

        /// Search strategy
        #[arg(long, value_parser = parse_strategy, default_value = "breadth-first")]
        strategy: Strategy,

        /// Heuristic for best-first search
        #[arg(long, value_parser = parse_heuristic, default_value = "desirability")]
        heuristic: HeuristicKind,
    },

    /// Run all three strategies between two capitals
    Compare {
        /// Origin capital
        from: String,

        /// Destination capital
        to: String,

        /// Heuristic for the best-first leg
        #[arg(long, value_parser = parse_heuristic, default_value = "desirability")]
        heuristic: HeuristicKind,
    },
}
