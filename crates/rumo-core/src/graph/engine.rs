//! Breadth-first, depth-first and best-first route search
//!
//! All three strategies share one loop: a frontier of (node, path-so-far)
//! entries seeded with the source, and a visited set checked at dequeue
//! time. The removal policy is the only axis of variation, plus one
//! intentional asymmetry: depth-first also filters visited children at
//! enqueue time, since without it the stack grows much faster than the
//! queue-based strategies.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RumoError};
use crate::graph::cost::path_cost;
use crate::graph::heuristic::Heuristic;
use crate::graph::store::{Graph, NodeId};

/// Route search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    BreadthFirst,
    DepthFirst,
    BestFirst,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::BestFirst => "best-first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            "depth-first" | "dfs" => Ok(Strategy::DepthFirst),
            "best-first" | "a-star" | "astar" => Ok(Strategy::BestFirst),
            other => Err(format!(
                "unknown strategy '{}' (expected: breadth-first, depth-first, best-first)",
                other
            )),
        }
    }
}

/// Outcome of a single search
///
/// An empty path means the destination was never reached. Cost alone does
/// not signal failure: a same-node route also costs 0, so callers must
/// check [`SearchResult::is_found`] rather than the cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Vec<NodeId>,
    pub cost: u32,
}

impl SearchResult {
    pub fn not_found() -> Self {
        SearchResult {
            path: Vec::new(),
            cost: 0,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// How the next frontier entry is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    /// Front of the frontier (breadth-first)
    Fifo,
    /// Back of the frontier (depth-first)
    Lifo,
    /// Front of the frontier after a stable re-rank by estimated total cost
    BestFirst,
}

struct Policy<'h, 'a> {
    removal: Removal,
    filter_on_enqueue: bool,
    heuristic: Option<&'h Heuristic<'a>>,
}

/// Runs one search strategy from `source` to `dest` over an immutable graph
///
/// Best-first requires a heuristic; the other strategies ignore it.
/// Exhausting the frontier is a normal outcome, reported as an empty-path
/// result rather than an error.
#[tracing::instrument(skip(graph, heuristic), fields(strategy = %strategy, source = graph.name(source), dest = graph.name(dest)))]
pub fn run_search(
    graph: &Graph,
    strategy: Strategy,
    source: NodeId,
    dest: NodeId,
    heuristic: Option<&Heuristic>,
) -> Result<SearchResult> {
    let policy = match strategy {
        Strategy::BreadthFirst => Policy {
            removal: Removal::Fifo,
            filter_on_enqueue: false,
            heuristic: None,
        },
        Strategy::DepthFirst => Policy {
            removal: Removal::Lifo,
            filter_on_enqueue: true,
            heuristic: None,
        },
        Strategy::BestFirst => {
            if heuristic.is_none() {
                return Err(RumoError::MissingHeuristic);
            }
            Policy {
                removal: Removal::BestFirst,
                filter_on_enqueue: false,
                heuristic,
            }
        }
    };

    search(graph, source, dest, &policy)
}

fn search(graph: &Graph, source: NodeId, dest: NodeId, policy: &Policy) -> Result<SearchResult> {
    let mut frontier: VecDeque<(NodeId, Vec<NodeId>)> = VecDeque::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    frontier.push_back((source, Vec::new()));

    loop {
        if let Some(heuristic) = policy.heuristic {
            rank_frontier(graph, &mut frontier, dest, heuristic)?;
        }

        let Some((node, mut path)) = (match policy.removal {
            Removal::Lifo => frontier.pop_back(),
            Removal::Fifo | Removal::BestFirst => frontier.pop_front(),
        }) else {
            break;
        };

        // The visited check happens at dequeue time, so duplicate entries
        // may sit in the frontier until they surface.
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node);

        path.push(node);
        if node == dest {
            let cost = path_cost(graph, &path);
            tracing::debug!(hops = path.len() - 1, cost, "route found");
            return Ok(SearchResult { path, cost });
        }

        for child in graph.children(node) {
            if policy.filter_on_enqueue && visited.contains(&child) {
                continue;
            }
            frontier.push_back((child, path.clone()));
        }
    }

    tracing::debug!("frontier exhausted");
    Ok(SearchResult::not_found())
}

/// Stable re-rank of the frontier ascending by estimated total cost
///
/// The estimate for an entry is the cost of its candidate path (path so far
/// plus the entry's node) plus the heuristic's remaining-cost estimate for
/// that candidate. Entries with equal estimates keep their insertion order.
fn rank_frontier(
    graph: &Graph,
    frontier: &mut VecDeque<(NodeId, Vec<NodeId>)>,
    dest: NodeId,
    heuristic: &Heuristic,
) -> Result<()> {
    let mut ranked: Vec<(u32, (NodeId, Vec<NodeId>))> = Vec::with_capacity(frontier.len());
    for (node, path) in frontier.drain(..) {
        let mut candidate = Vec::with_capacity(path.len() + 1);
        candidate.extend_from_slice(&path);
        candidate.push(node);
        let estimate = path_cost(graph, &candidate) + heuristic(graph, &candidate, dest)?;
        ranked.push((estimate, (node, path)));
    }
    ranked.sort_by_key(|(estimate, _)| *estimate);
    frontier.extend(ranked.into_iter().map(|(_, entry)| entry));
    Ok(())
}
