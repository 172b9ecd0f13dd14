//! One-shot construction of the capital graph from the atlas

use crate::atlas::Atlas;
use crate::error::Result;
use crate::graph::store::Graph;

/// Builds the capital graph: one node per capital, one weighted edge in
/// each direction for every pair of bordering states
///
/// Runs once per process; the returned graph is read-only afterwards.
/// Construction aborts on the first atlas lookup that fails, so a graph is
/// only ever returned fully populated.
#[tracing::instrument(skip(atlas))]
pub fn build_graph(atlas: &Atlas) -> Result<Graph> {
    let mut graph = Graph::new();

    for row in atlas.states() {
        graph.intern(row.capital);
    }

    for row in atlas.states() {
        let from = graph.get_node(row.capital)?;
        for border in atlas.borders_of(row.code)? {
            let capital = atlas.capital_of(border)?;
            let cost = atlas.border_cost(row.code, border)?;
            let to = graph.add_connection(from, capital, cost);
            graph.add_connection(to, row.capital, cost);
        }
    }

    tracing::debug!(nodes = graph.node_count(), "graph built");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{path_cost, run_search, Strategy};

    #[test]
    fn test_builds_one_node_per_capital() {
        let atlas = Atlas::brazil();
        let graph = build_graph(&atlas).unwrap();
        assert_eq!(graph.node_count(), 27);
        for row in atlas.states() {
            assert!(graph.get_node(row.capital).is_ok());
        }
    }

    #[test]
    fn test_edges_exist_in_both_directions_with_equal_cost() {
        let atlas = Atlas::brazil();
        let graph = build_graph(&atlas).unwrap();
        for row in atlas.states() {
            let from = graph.get_node(row.capital).unwrap();
            for (to, cost) in graph.edges(from).collect::<Vec<_>>() {
                assert_eq!(graph.edge_cost(to, from), Some(cost));
            }
        }
    }

    #[test]
    fn test_children_follow_border_order() {
        let atlas = Atlas::brazil();
        let graph = build_graph(&atlas).unwrap();
        let brasilia = graph.get_node("Brasília").unwrap();
        let names: Vec<_> = graph
            .children(brasilia)
            .map(|id| graph.name(id))
            .collect();
        // DF borders GO then MG in the atlas
        assert_eq!(names, vec!["Goiânia", "Belo Horizonte"]);
    }

    #[test]
    fn test_spot_check_edge_costs() {
        let atlas = Atlas::brazil();
        let graph = build_graph(&atlas).unwrap();
        let sao_paulo = graph.get_node("São Paulo").unwrap();
        assert_eq!(graph.edge_cost_by_name(sao_paulo, "Rio de Janeiro"), Some(430));
        assert_eq!(graph.edge_cost_by_name(sao_paulo, "Curitiba"), Some(410));
        assert_eq!(graph.edge_cost_by_name(sao_paulo, "Salvador"), None);
    }

    #[test]
    fn test_map_is_connected_for_routing() {
        let atlas = Atlas::brazil();
        let graph = build_graph(&atlas).unwrap();
        let manaus = graph.get_node("Manaus").unwrap();
        let porto_alegre = graph.get_node("Porto Alegre").unwrap();

        let result = run_search(&graph, Strategy::BreadthFirst, manaus, porto_alegre, None).unwrap();
        assert!(result.is_found());
        assert_eq!(result.cost, path_cost(&graph, &result.path));
    }
}
