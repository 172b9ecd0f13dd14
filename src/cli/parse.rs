use rumo_core::graph::{HeuristicKind, Strategy};

/// Parse search strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>()
}

/// Parse heuristic kind from string
pub fn parse_heuristic(s: &str) -> std::result::Result<HeuristicKind, String> {
    s.parse::<HeuristicKind>()
}
