use crate::common::types::Position;
use crate::data_structures::grid::OccupancyGrid;

/// Start cell shared by the reference grids.
pub const REFERENCE_START: Position = Position::new(8, 0);

/// Goal cell shared by the reference grids.
pub const REFERENCE_GOAL: Position = Position::new(0, 9);

// 1 = open, 0 = blocked

/// A corridor maze whose shortest routes use no diagonal shortcuts.
pub const CORRIDOR_MAZE: [[u8; 10]; 9] = [
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// A map where diagonal moves shorten the route.
pub const DIAGONAL_MAZE: [[u8; 10]; 9] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 1, 0, 1, 1],
    [1, 1, 0, 1, 0, 1, 0, 0, 1, 1],
    [1, 0, 0, 1, 1, 0, 0, 0, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

pub fn corridor_maze() -> OccupancyGrid {
    OccupancyGrid::from_binary_rows(&CORRIDOR_MAZE).unwrap()
}

pub fn diagonal_maze() -> OccupancyGrid {
    OccupancyGrid::from_binary_rows(&DIAGONAL_MAZE).unwrap()
}

pub fn all_reference_grids() -> Vec<(&'static str, OccupancyGrid)> {
    vec![
        ("corridor_maze", corridor_maze()),
        ("diagonal_maze", diagonal_maze()),
    ]
}

/// Builds a grid from text rows, `.` for open cells and `#` for blocked ones.
pub fn grid_from_ascii(rows: &[&str]) -> OccupancyGrid {
    OccupancyGrid::from_rows(
        rows.iter()
            .map(|row| row.chars().map(|c| c != '#').collect())
            .collect(),
    )
    .unwrap()
}
