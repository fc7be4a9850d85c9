/// Provides common definitions used across the crate
pub mod common;

/// Provides the grid, frontier and per-search node storage
pub mod data_structures;

/// Provides individual algorithm implementations
pub mod algorithms;

/// Provides helper methods to simplify using algorithms
pub mod utils;

/// Search configuration
pub mod config;

/// Error types returned by searches and grid construction
pub mod error;

pub use algorithms::astar::{search, search_with_config, SearchEngine, SearchOutcome, SearchStatus};
pub use common::traits::GridView;
pub use common::types::{Direction, Position};
pub use config::{SearchConfig, SearchMode, TerminationPolicy};
pub use data_structures::grid::OccupancyGrid;
pub use error::{Endpoint, PathfindingError, Result};
pub use utils::heuristics::{HeuristicConfig, HeuristicKind};
pub use utils::metrics::SearchMetrics;
pub use utils::movement_costs::StepCosts;
pub use utils::neighbors::MovementTopology;
