//! `rumo capitals` command - list the capitals on the map

use crate::cli::{Cli, OutputFormat};
use rumo_core::atlas::Atlas;
use rumo_core::error::Result;

/// Execute the capitals command
pub fn execute(cli: &Cli) -> Result<()> {
    let atlas = Atlas::brazil();

    match cli.format {
        OutputFormat::Json => {
            let rows: Vec<_> = atlas.states().collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Human => {
            for row in atlas.states() {
                println!("{} ({}, {})", row.capital, row.code, row.state);
            }
        }
    }

    Ok(())
}
