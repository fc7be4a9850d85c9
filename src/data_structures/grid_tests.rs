use super::grid::*;
use crate::common::traits::GridView;
use crate::common::types::Position;
use crate::error::PathfindingError;

// OccupancyGrid::new rejects zero-sized dimensions
#[test]
pub fn new_returns_err_for_empty_dimensions() {
    assert_eq!(OccupancyGrid::new(0, 5, true), Err(PathfindingError::EmptyGrid));
    assert_eq!(OccupancyGrid::new(5, 0, true), Err(PathfindingError::EmptyGrid));
    assert!(OccupancyGrid::new(1, 1, true).is_ok());
}

// OccupancyGrid::from_rows rejects rows of differing lengths
#[test]
pub fn from_rows_returns_err_for_ragged_rows() {
    let res = OccupancyGrid::from_rows(vec![vec![true, true], vec![true], vec![true, false]]);
    assert_eq!(
        res,
        Err(PathfindingError::RaggedGrid {
            row: 1,
            expected: 2,
            found: 1
        })
    );

    assert_eq!(OccupancyGrid::from_rows(vec![]), Err(PathfindingError::EmptyGrid));
    assert_eq!(
        OccupancyGrid::from_rows(vec![vec![], vec![]]),
        Err(PathfindingError::EmptyGrid)
    );
}

// OccupancyGrid::from_cells requires exactly rows * cols flags
#[test]
pub fn from_cells_checks_cell_count() {
    let res = OccupancyGrid::from_cells(2, 3, vec![true; 5]);
    assert_eq!(
        res,
        Err(PathfindingError::CellCountMismatch {
            expected: 6,
            found: 5
        })
    );

    let grid = OccupancyGrid::from_cells(2, 3, vec![true, false, true, true, true, false]).unwrap();
    assert!(!grid.is_traversable(Position::new(0, 1)));
    assert!(!grid.is_traversable(Position::new(1, 2)));
    assert!(grid.is_traversable(Position::new(1, 0)));
}

// in_bounds is true exactly for the rows x cols rectangle starting at (0, 0)
#[test]
pub fn in_bounds_matches_dimensions() {
    let grid = OccupancyGrid::new(3, 4, true).unwrap();
    for row in -2..6 {
        for col in -2..7 {
            let expected = (0..3).contains(&row) && (0..4).contains(&col);
            assert_eq!(
                grid.in_bounds(Position::new(row, col)),
                expected,
                "row: {row}, col: {col}"
            );
        }
    }
}

// is_traversable is false for out-of-bounds positions even on an all-open grid
#[test]
pub fn is_traversable_returns_false_out_of_bounds() {
    let grid = OccupancyGrid::new(2, 2, true).unwrap();
    assert!(grid.is_traversable(Position::new(1, 1)));
    assert!(!grid.is_traversable(Position::new(2, 0)));
    assert!(!grid.is_traversable(Position::new(0, -1)));
    assert!(!grid.is_traversable(Position::new(i32::MIN, i32::MAX)));
}

// from_binary_rows treats 1 as open and everything else as blocked
#[test]
pub fn from_binary_rows_reads_open_cells() {
    let grid = OccupancyGrid::from_binary_rows(&[[1u8, 0, 2], [0, 1, 1]]).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.open_count(), 3);
    assert!(!grid.is_traversable(Position::new(0, 2)));
}

// index_of and position_of are inverse row-major mappings
#[test]
pub fn index_of_is_row_major() {
    let grid = OccupancyGrid::new(3, 5, true).unwrap();
    assert_eq!(grid.index_of(Position::new(0, 0)), Some(0));
    assert_eq!(grid.index_of(Position::new(1, 0)), Some(5));
    assert_eq!(grid.index_of(Position::new(2, 4)), Some(14));
    assert_eq!(grid.index_of(Position::new(3, 0)), None);

    let positions: Vec<Position> = grid.positions().collect();
    assert_eq!(positions.len(), grid.cell_count());
    for (idx, pos) in positions.into_iter().enumerate() {
        assert_eq!(grid.index_of(pos), Some(idx));
    }
}

// set_traversable only touches in-bounds cells
#[test]
pub fn set_traversable_updates_cell() {
    let mut grid = OccupancyGrid::new(2, 2, true).unwrap();
    assert!(grid.set_traversable(Position::new(0, 1), false));
    assert!(!grid.is_traversable(Position::new(0, 1)));
    assert!(!grid.set_traversable(Position::new(5, 5), false));
    assert_eq!(grid.open_count(), 3);
}

// Dimensions that cannot be addressed are rejected instead of overflowing
#[test]
pub fn oversized_dimensions_return_err() {
    assert_eq!(
        OccupancyGrid::new(usize::MAX, 2, true),
        Err(PathfindingError::GridTooLarge {
            rows: usize::MAX,
            cols: 2
        })
    );
    assert_eq!(
        OccupancyGrid::from_cells(2, usize::MAX, Vec::new()),
        Err(PathfindingError::GridTooLarge {
            rows: 2,
            cols: usize::MAX
        })
    );
}

// position_of is None past the last cell and for grids without columns
#[test]
pub fn position_of_out_of_range_is_none() {
    let grid = OccupancyGrid::new(3, 5, true).unwrap();
    assert_eq!(grid.position_of(14), Some(Position::new(2, 4)));
    assert_eq!(grid.position_of(15), None);

    struct NoColumns;

    impl GridView for NoColumns {
        fn rows(&self) -> usize {
            4
        }

        fn cols(&self) -> usize {
            0
        }

        fn is_traversable(&self, _pos: Position) -> bool {
            false
        }
    }

    assert_eq!(NoColumns.cell_count(), 0);
    assert_eq!(NoColumns.position_of(0), None);
}
