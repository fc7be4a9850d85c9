use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::types::Position;
use crate::error::PathfindingError;
use crate::utils::movement_costs::StepCosts;
use crate::utils::neighbors::MovementTopology;

/// The distance estimators available to the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Straight-line distance, scaled by the straight step cost.
    Euclidean,
    /// Sum of the axis distances, scaled by the straight step cost.
    ///
    /// Overestimates whenever a diagonal step is cheaper than two straight
    /// steps, so it should only be paired with
    /// [MovementTopology::FourConnected] when an optimal path is required.
    Manhattan,
    /// Octile distance: diagonal steps for the shared part of the offset,
    /// straight steps for the remainder.
    #[default]
    Diagonal,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Euclidean,
        HeuristicKind::Manhattan,
        HeuristicKind::Diagonal,
    ];

    /// Estimated cost of moving from `a` to `b`.
    ///
    /// Always non-negative for positive costs, zero when `a == b`, and
    /// symmetric in its arguments.
    ///
    /// # Example
    /// ```rust
    /// use grid_astar::{HeuristicKind, Position, StepCosts};
    ///
    /// let costs = StepCosts::new(1.0, 1.414);
    /// let a = Position::new(0, 0);
    /// let b = Position::new(2, 2);
    ///
    /// assert_eq!(HeuristicKind::Manhattan.estimate(a, b, &costs), 4.0);
    /// assert!((HeuristicKind::Diagonal.estimate(a, b, &costs) - 2.828).abs() < 1e-9);
    /// ```
    pub fn estimate(self, a: Position, b: Position, costs: &StepCosts) -> f64 {
        let (dx, dy) = a.abs_delta(b);
        let (dx, dy) = (dx as f64, dy as f64);
        let straight = costs.straight_cost;

        match self {
            HeuristicKind::Euclidean => straight * dx.hypot(dy),
            HeuristicKind::Manhattan => straight * (dx + dy),
            HeuristicKind::Diagonal => {
                straight * (dx + dy) + (costs.diagonal_cost - 2.0 * straight) * dx.min(dy)
            }
        }
    }

    /// Whether this estimator never overestimates the true remaining cost
    /// under `topology` with the given step costs.
    pub fn is_admissible_for(self, topology: MovementTopology, costs: &StepCosts) -> bool {
        let straight = costs.straight_cost;
        let diagonal = costs.diagonal_cost;

        match (self, topology) {
            (HeuristicKind::Euclidean, MovementTopology::FourConnected) => true,
            (HeuristicKind::Euclidean, MovementTopology::EightConnected) => {
                diagonal >= straight * std::f64::consts::SQRT_2
            }
            (HeuristicKind::Manhattan, MovementTopology::FourConnected) => true,
            (HeuristicKind::Manhattan, MovementTopology::EightConnected) => {
                diagonal >= 2.0 * straight
            }
            (HeuristicKind::Diagonal, MovementTopology::FourConnected) => {
                diagonal <= 2.0 * straight
            }
            (HeuristicKind::Diagonal, MovementTopology::EightConnected) => {
                straight <= diagonal && diagonal <= 2.0 * straight
            }
        }
    }

    /// The movement topology this estimator is normally paired with.
    pub fn preferred_topology(self) -> MovementTopology {
        match self {
            HeuristicKind::Manhattan => MovementTopology::FourConnected,
            HeuristicKind::Euclidean | HeuristicKind::Diagonal => MovementTopology::EightConnected,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = PathfindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PathfindingError::UnknownHeuristic(s.to_string()))
    }
}

/// A heuristic bundled with the step costs it is scaled by.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeuristicConfig {
    pub kind: HeuristicKind,
    pub costs: StepCosts,
}

impl HeuristicConfig {
    pub fn new(kind: HeuristicKind, costs: StepCosts) -> Self {
        Self { kind, costs }
    }

    pub fn estimate(&self, a: Position, b: Position) -> f64 {
        self.kind.estimate(a, b, &self.costs)
    }

    /// Helper function to create a heuristic cost closure for a single goal node.
    pub fn to_goal(self, goal: Position) -> impl Fn(Position) -> f64 {
        move |node: Position| self.estimate(node, goal)
    }
}
