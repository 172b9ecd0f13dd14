//! Static map data for Brazil's state capitals
//!
//! The atlas is the fixed dataset the graph is built from: one row per
//! federative unit (26 states plus the Federal District), the border
//! adjacency between them, and the travel cost recorded for each border
//! pair. Row order and border order are part of the contract: they decide
//! edge-insertion order in the graph and therefore which of several equal
//! routes a traversal reports.

mod tables;

use std::fmt;

use serde::Serialize;

use crate::error::{Result, RumoError};

/// Geographic macro-region of a federative unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zone {
    Norte,
    Nordeste,
    CentroOeste,
    Sudeste,
    Sul,
}

impl Zone {
    /// Coarse distance in kilometres between macro-region centres, used by
    /// the region-distance heuristic as a remaining-cost estimate.
    pub fn distance(self, other: Zone) -> u32 {
        use Zone::*;
        match (self, other) {
            (Norte, Norte)
            | (Nordeste, Nordeste)
            | (CentroOeste, CentroOeste)
            | (Sudeste, Sudeste)
            | (Sul, Sul) => 0,
            (Norte, Nordeste) | (Nordeste, Norte) => 1600,
            (Norte, CentroOeste) | (CentroOeste, Norte) => 1500,
            (Norte, Sudeste) | (Sudeste, Norte) => 2500,
            (Norte, Sul) | (Sul, Norte) => 3200,
            (Nordeste, CentroOeste) | (CentroOeste, Nordeste) => 1400,
            (Nordeste, Sudeste) | (Sudeste, Nordeste) => 1600,
            (Nordeste, Sul) | (Sul, Nordeste) => 2600,
            (CentroOeste, Sudeste) | (Sudeste, CentroOeste) => 900,
            (CentroOeste, Sul) | (Sul, CentroOeste) => 1300,
            (Sudeste, Sul) | (Sul, Sudeste) => 700,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Zone::Norte => "Norte",
            Zone::Nordeste => "Nordeste",
            Zone::CentroOeste => "Centro-Oeste",
            Zone::Sudeste => "Sudeste",
            Zone::Sul => "Sul",
        };
        write!(f, "{}", label)
    }
}

/// One federative unit: capital, state name, two-letter code, macro-region
/// and a 0-10 desirability score used by the desirability heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateRow {
    pub capital: &'static str,
    pub state: &'static str,
    pub code: &'static str,
    pub zone: Zone,
    pub desirability: u32,
}

/// Lookup interface over the static map tables
pub struct Atlas {
    states: &'static [StateRow],
    borders: &'static [(&'static str, &'static [&'static str])],
    links: &'static [(&'static str, &'static str, u32)],
}

impl Atlas {
    /// The full Brazilian map: 26 states plus the Federal District
    pub fn brazil() -> Self {
        Atlas {
            states: tables::STATES,
            borders: tables::BORDERS,
            links: tables::LINKS,
        }
    }

    fn row(&self, code: &str) -> Result<&StateRow> {
        self.states
            .iter()
            .find(|row| row.code == code)
            .ok_or_else(|| RumoError::UnknownRegion {
                code: code.to_string(),
            })
    }

    /// Rows in table order
    pub fn states(&self) -> impl Iterator<Item = &StateRow> {
        self.states.iter()
    }

    /// Capital of the given region code
    pub fn capital_of(&self, code: &str) -> Result<&'static str> {
        Ok(self.row(code)?.capital)
    }

    /// Region code of the given capital
    pub fn region_of(&self, capital: &str) -> Result<&'static str> {
        self.states
            .iter()
            .find(|row| row.capital == capital)
            .map(|row| row.code)
            .ok_or_else(|| RumoError::UnknownCapital {
                name: capital.to_string(),
            })
    }

    /// Region codes bordering the given region, in table order
    pub fn borders_of(&self, code: &str) -> Result<&'static [&'static str]> {
        self.borders
            .iter()
            .find(|(region, _)| *region == code)
            .map(|(_, neighbours)| *neighbours)
            .ok_or_else(|| RumoError::UnknownRegion {
                code: code.to_string(),
            })
    }

    /// Desirability score (0-10) of the given region
    pub fn desirability_of(&self, code: &str) -> Result<u32> {
        Ok(self.row(code)?.desirability)
    }

    /// Estimated distance in kilometres between the macro-regions of two
    /// federative units
    pub fn region_distance(&self, a: &str, b: &str) -> Result<u32> {
        Ok(self.row(a)?.zone.distance(self.row(b)?.zone))
    }

    /// Travel cost recorded for a border pair, in either order
    pub fn border_cost(&self, a: &str, b: &str) -> Result<u32> {
        self.links
            .iter()
            .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
            .map(|(_, _, cost)| *cost)
            .ok_or_else(|| RumoError::MissingBorderCost {
                from: a.to_string(),
                to: b.to_string(),
            })
    }
}
