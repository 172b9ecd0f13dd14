//! `rumo borders` command - show the direct connections of a capital

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use rumo_core::atlas::Atlas;
use rumo_core::builder::build_graph;
use rumo_core::error::Result;

#[derive(Serialize)]
struct BorderEntry<'a> {
    capital: &'a str,
    cost: u32,
}

/// Execute the borders command
pub fn execute(cli: &Cli, capital: &str) -> Result<()> {
    let atlas = Atlas::brazil();
    let graph = build_graph(&atlas)?;
    let node = graph.get_node(capital)?;

    let entries: Vec<BorderEntry> = graph
        .edges(node)
        .map(|(target, cost)| BorderEntry {
            capital: graph.name(target),
            cost,
        })
        .collect();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Human => {
            for entry in &entries {
                println!("{} ({} km)", entry.capital, entry.cost);
            }
        }
    }

    Ok(())
}
