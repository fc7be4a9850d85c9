//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::heuristics::{HeuristicConfig, HeuristicKind};
use crate::utils::movement_costs::StepCosts;
use crate::utils::neighbors::MovementTopology;

/// How the frontier is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Order by cost so far plus heuristic estimate.
    #[default]
    AStar,
    /// Order by heuristic estimate only. Usually expands fewer cells but
    /// the returned path is not guaranteed to be optimal.
    Greedy,
}

/// When the search stops after the goal has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationPolicy {
    /// Stop when the goal is extracted from the frontier. With an admissible,
    /// consistent heuristic in A* mode the path is optimal.
    #[default]
    OnExtraction,
    /// Stop as soon as the goal is generated as a neighbor of an expanded
    /// cell. Cheaper, but the first route found to the goal is kept even if
    /// a cheaper one exists.
    OnGeneration,
}

/// Full configuration of a [SearchEngine](crate::algorithms::astar::SearchEngine).
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// use grid_astar::{MovementTopology, SearchConfig, TerminationPolicy};
///
/// let config: SearchConfig =
///     serde_json::from_str(r#"{ "topology": "four_connected" }"#).unwrap();
///
/// assert_eq!(config.topology, MovementTopology::FourConnected);
/// assert_eq!(config.termination, TerminationPolicy::OnExtraction);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Distance estimator used for the h score
    #[serde(default)]
    pub heuristic: HeuristicKind,

    /// 4- or 8-connected movement
    #[serde(default)]
    pub topology: MovementTopology,

    /// A* or greedy best-first ordering
    #[serde(default)]
    pub mode: SearchMode,

    /// When to stop once the goal is found
    #[serde(default)]
    pub termination: TerminationPolicy,

    /// Straight and diagonal step costs
    #[serde(default)]
    pub costs: StepCosts,
}

impl SearchConfig {
    /// Configuration for `heuristic` using the topology it is normally
    /// paired with: 4-connected for Manhattan, 8-connected otherwise.
    pub fn for_heuristic(heuristic: HeuristicKind) -> Self {
        Self {
            heuristic,
            topology: heuristic.preferred_topology(),
            ..Default::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_topology(mut self, topology: MovementTopology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_termination(mut self, termination: TerminationPolicy) -> Self {
        self.termination = termination;
        self
    }

    pub fn with_costs(mut self, costs: StepCosts) -> Self {
        self.costs = costs;
        self
    }

    pub fn heuristic_config(&self) -> HeuristicConfig {
        HeuristicConfig::new(self.heuristic, self.costs)
    }

    /// Whether A* under this configuration is guaranteed to return an
    /// optimal path.
    pub fn guarantees_optimality(&self) -> bool {
        self.mode == SearchMode::AStar
            && self.termination == TerminationPolicy::OnExtraction
            && self.heuristic.is_admissible_for(self.topology, &self.costs)
    }

    pub fn validate(&self) -> Result<()> {
        self.costs.validate()
    }
}
