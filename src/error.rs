//! Error types for grid searches

use std::fmt;

use thiserror::Error;

use crate::common::types::Position;

/// Which end of a search request an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors produced while building grids, validating configuration,
/// or extracting a path from a search outcome.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathfindingError {
    #[error("{endpoint} position {position} is outside the {rows}x{cols} grid")]
    InvalidPosition {
        endpoint: Endpoint,
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("{endpoint} position {position} is blocked")]
    BlockedEndpoint {
        endpoint: Endpoint,
        position: Position,
    },

    #[error("no path exists between start and goal")]
    NoPathExists,

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid expects {expected} cells, got {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("{name} must be finite and greater than zero, got {value}")]
    InvalidStepCost { name: &'static str, value: f64 },

    #[error("step costs straight={straight_cost} diagonal={diagonal_cost} overflow path cost arithmetic")]
    StepCostOverflow {
        straight_cost: f64,
        diagonal_cost: f64,
    },

    #[error("grid of {rows}x{cols} cells is too large")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("unknown heuristic `{0}`, expected euclidean, manhattan or diagonal")]
    UnknownHeuristic(String),
}

pub type Result<T> = std::result::Result<T, PathfindingError>;
