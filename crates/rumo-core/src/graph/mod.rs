//! Graph representation and route search
//!
//! Provides the computational core of rumo:
//! - Interned node store with weighted adjacency lists
//! - Path cost accumulation
//! - Pluggable heuristics for best-first search
//! - Breadth-first, depth-first and best-first traversal

pub mod cost;
pub mod engine;
pub mod heuristic;
pub mod store;

pub use cost::path_cost;
pub use engine::{run_search, SearchResult, Strategy};
pub use heuristic::{Heuristic, HeuristicKind};
pub use store::{Graph, NodeId};
