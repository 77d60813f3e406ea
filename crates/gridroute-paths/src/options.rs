use gridroute_core::MovementType;

use crate::heuristic::HeuristicType;

/// Knobs shared by every [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub heuristic: HeuristicType,
    pub movement: MovementType,
    /// Multiply each step's cost by the weight of the cell it enters.
    ///
    /// Off by default: node weight then only scales the heuristic estimate,
    /// which keeps existing routes unchanged.
    pub weighted_steps: bool,
}

impl SearchOptions {
    pub fn new(heuristic: HeuristicType, movement: MovementType) -> Self {
        Self {
            heuristic,
            movement,
            weighted_steps: false,
        }
    }

    /// Builder-style toggle for [`weighted_steps`](Self::weighted_steps).
    pub fn weighted_steps(mut self, on: bool) -> Self {
        self.weighted_steps = on;
        self
    }
}
