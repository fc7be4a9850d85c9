/// Heuristic distance estimators.
pub mod heuristics;

/// Straight and diagonal step costs.
pub mod movement_costs;

/// Movement topologies and neighbor generation.
pub mod neighbors;

/// Path reconstruction and path-following helpers.
pub mod pathing;

/// Node-expansion and timing counters.
pub mod metrics;

pub use pathing::{next_step_direction, path_cost, reconstruct_path};
