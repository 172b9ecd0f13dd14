//! Path cost accumulation

use crate::graph::store::{Graph, NodeId};

/// Total edge weight along `path`
///
/// A consecutive pair with no direct edge contributes 0 instead of failing.
/// The traversal engine never produces such a pair, so the lenient sum only
/// matters for hand-built paths; callers relying on it should treat the
/// result as a lower bound, not a validation.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> u32 {
    path.windows(2)
        .map(|leg| graph.edge_cost(leg[0], leg[1]).unwrap_or(0))
        .sum()
}
