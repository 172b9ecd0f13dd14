//! `rumo compare` command - run every strategy between two capitals

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::route::{build_report, render_human, search_route, RouteReport};
use rumo_core::atlas::Atlas;
use rumo_core::builder::build_graph;
use rumo_core::error::Result;
use rumo_core::graph::{HeuristicKind, Strategy};

const STRATEGIES: [Strategy; 3] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::BestFirst,
];

/// Execute the compare command
pub fn execute(
    cli: &Cli,
    from: &str,
    to: &str,
    heuristic: HeuristicKind,
    start: Instant,
) -> Result<()> {
    let atlas = Atlas::brazil();
    let graph = build_graph(&atlas)?;

    if cli.verbose {
        eprintln!("build_graph: {:?}", start.elapsed());
    }

    let mut reports: Vec<RouteReport> = Vec::with_capacity(STRATEGIES.len());
    for strategy in STRATEGIES {
        let result = search_route(&graph, &atlas, from, to, strategy, heuristic)?;
        reports.push(build_report(&graph, from, to, strategy, &result));
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Human => {
            for report in &reports {
                println!("== {} ==", report.strategy);
                render_human(report);
                println!();
            }
        }
    }

    Ok(())
}
