//! Command dispatch logic for rumo

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use rumo_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Capitals) => commands::capitals::execute(cli),

        Some(Commands::Borders { capital }) => commands::borders::execute(cli, capital),

        Some(Commands::Route {
            from,
            to,
            strategy,
            heuristic,
        }) => commands::route::execute(cli, from, to, *strategy, *heuristic, start),

        Some(Commands::Compare {
            from,
            to,
            heuristic,
        }) => commands::compare::execute(cli, from, to, *heuristic, start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("rumo {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A route planner for Brazil's state capitals.");
    println!();
    println!("Run `rumo --help` for usage information.");
    Ok(())
}
