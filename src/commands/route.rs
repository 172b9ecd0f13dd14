//! `rumo route` command - find a route between two capitals

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use rumo_core::atlas::Atlas;
use rumo_core::builder::build_graph;
use rumo_core::error::Result;
use rumo_core::graph::{run_search, Graph, HeuristicKind, SearchResult, Strategy};

/// One search outcome, ready for rendering
#[derive(Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub strategy: &'static str,
    pub found: bool,
    pub route: Vec<String>,
    pub cost: u32,
}

/// Resolve endpoints and run one strategy over the graph
pub fn search_route(
    graph: &Graph,
    atlas: &Atlas,
    from: &str,
    to: &str,
    strategy: Strategy,
    heuristic: HeuristicKind,
) -> Result<SearchResult> {
    let source = graph.get_node(from)?;
    let dest = graph.get_node(to)?;

    match strategy {
        Strategy::BestFirst => {
            let h = heuristic.build(atlas);
            run_search(graph, strategy, source, dest, Some(&h))
        }
        _ => run_search(graph, strategy, source, dest, None),
    }
}

pub fn build_report(
    graph: &Graph,
    from: &str,
    to: &str,
    strategy: Strategy,
    result: &SearchResult,
) -> RouteReport {
    RouteReport {
        from: from.to_string(),
        to: to.to_string(),
        strategy: strategy.label(),
        found: result.is_found(),
        route: graph
            .route_names(&result.path)
            .into_iter()
            .map(String::from)
            .collect(),
        cost: result.cost,
    }
}

pub fn render_human(report: &RouteReport) {
    if report.found {
        println!("{}", report.route.join(" -> "));
        println!("cost: {}", report.cost);
    } else {
        println!("destination not found");
    }
}

/// Execute the route command
pub fn execute(
    cli: &Cli,
    from: &str,
    to: &str,
    strategy: Strategy,
    heuristic: HeuristicKind,
    start: Instant,
) -> Result<()> {
    let atlas = Atlas::brazil();
    let graph = build_graph(&atlas)?;

    if cli.verbose {
        eprintln!("build_graph: {:?}", start.elapsed());
    }

    let result = search_route(&graph, &atlas, from, to, strategy, heuristic)?;
    let report = build_report(&graph, from, to, strategy, &result);

    if cli.verbose {
        eprintln!("search: {:?}", start.elapsed());
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => render_human(&report),
    }

    Ok(())
}
