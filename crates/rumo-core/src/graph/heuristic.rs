//! Pluggable remaining-cost estimates for best-first search

use std::str::FromStr;

use crate::atlas::Atlas;
use crate::error::Result;
use crate::graph::store::{Graph, NodeId};

/// Top of the desirability scale documented by the atlas
const DESIRABILITY_CEILING: u32 = 10;

/// Estimate of the remaining cost from the tip of a candidate route to the
/// destination
///
/// Called once per frontier entry per ranking round, not cached. The
/// estimate is advisory: nothing requires it to stay below the true
/// remaining cost, so best-first results are only as good as the supplied
/// heuristic and are not guaranteed minimal.
pub type Heuristic<'a> = Box<dyn Fn(&Graph, &[NodeId], NodeId) -> Result<u32> + 'a>;

/// Built-in heuristic strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    #[default]
    Desirability,
    RegionDistance,
}

impl HeuristicKind {
    pub fn build(self, atlas: &Atlas) -> Heuristic<'_> {
        match self {
            HeuristicKind::Desirability => desirability(atlas),
            HeuristicKind::RegionDistance => region_distance(atlas),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeuristicKind::Desirability => "desirability",
            HeuristicKind::RegionDistance => "region-distance",
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desirability" => Ok(HeuristicKind::Desirability),
            "region-distance" => Ok(HeuristicKind::RegionDistance),
            other => Err(format!(
                "unknown heuristic '{}' (expected: desirability, region-distance)",
                other
            )),
        }
    }
}

/// Rewards routes whose tip sits in a highly desirable region
///
/// The estimate is the tip region's distance from the top of the 0-10
/// desirability scale; an unknown capital or region is a fatal lookup
/// error.
pub fn desirability(atlas: &Atlas) -> Heuristic<'_> {
    Box::new(move |graph, candidate, _dest| {
        let Some(&tip) = candidate.last() else {
            return Ok(0);
        };
        let region = atlas.region_of(graph.name(tip))?;
        let score = atlas.desirability_of(region)?;
        Ok(DESIRABILITY_CEILING.saturating_sub(score))
    })
}

/// Estimates remaining travel as the distance between the macro-regions of
/// the tip and the destination
pub fn region_distance(atlas: &Atlas) -> Heuristic<'_> {
    Box::new(move |graph, candidate, dest| {
        let Some(&tip) = candidate.last() else {
            return Ok(0);
        };
        let from = atlas.region_of(graph.name(tip))?;
        let to = atlas.region_of(graph.name(dest))?;
        atlas.region_distance(from, to)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RumoError;

    #[test]
    fn test_desirability_inverts_score() {
        let atlas = Atlas::brazil();
        let mut graph = Graph::new();
        let rio = graph.intern("Rio de Janeiro");
        let porto_velho = graph.intern("Porto Velho");

        let h = desirability(&atlas);
        // Rio de Janeiro scores 10, Porto Velho 4
        assert_eq!(h(&graph, &[rio], porto_velho).unwrap(), 0);
        assert_eq!(h(&graph, &[porto_velho], rio).unwrap(), 6);
    }

    #[test]
    fn test_desirability_uses_path_tip() {
        let atlas = Atlas::brazil();
        let mut graph = Graph::new();
        let rio = graph.intern("Rio de Janeiro");
        let porto_velho = graph.intern("Porto Velho");

        let h = desirability(&atlas);
        assert_eq!(h(&graph, &[rio, porto_velho], rio).unwrap(), 6);
    }

    #[test]
    fn test_region_distance_between_zones() {
        let atlas = Atlas::brazil();
        let mut graph = Graph::new();
        let manaus = graph.intern("Manaus");
        let porto_alegre = graph.intern("Porto Alegre");
        let sao_paulo = graph.intern("São Paulo");
        let rio = graph.intern("Rio de Janeiro");

        let h = region_distance(&atlas);
        // Norte to Sul
        assert_eq!(h(&graph, &[manaus], porto_alegre).unwrap(), 3200);
        // same macro-region estimates zero remaining cost
        assert_eq!(h(&graph, &[sao_paulo], rio).unwrap(), 0);
    }

    #[test]
    fn test_unknown_capital_is_fatal() {
        let atlas = Atlas::brazil();
        let mut graph = Graph::new();
        let atlantis = graph.intern("Atlantis");
        let rio = graph.intern("Rio de Janeiro");

        let h = desirability(&atlas);
        assert!(matches!(
            h(&graph, &[atlantis], rio),
            Err(RumoError::UnknownCapital { .. })
        ));

        let h = region_distance(&atlas);
        assert!(matches!(
            h(&graph, &[rio], atlantis),
            Err(RumoError::UnknownCapital { .. })
        ));
    }

    #[test]
    fn test_kind_parses() {
        assert_eq!(
            "desirability".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::Desirability
        );
        assert_eq!(
            "region-distance".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::RegionDistance
        );
        assert!("closest".parse::<HeuristicKind>().is_err());
    }
}
