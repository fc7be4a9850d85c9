use crate::common::traits::GridView;
use crate::common::types::Position;
use crate::error::{PathfindingError, Result};

/// A rectangular map of open and blocked cells, stored row-major.
///
/// Dimensions are fixed at construction. The grid can only be changed
/// through `&mut self`, so a grid borrowed by a running search is frozen
/// for the duration of that search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates a grid where every cell is `open` (or every cell blocked).
    ///
    /// Returns an error if either dimension is 0, or too large to address
    /// with `i32` coordinates.
    pub fn new(rows: usize, cols: usize, open: bool) -> Result<Self> {
        let count = checked_cell_count(rows, cols)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![open; count],
        })
    }

    /// Creates a grid from row-major traversability flags.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self> {
        let expected = checked_cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(PathfindingError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    /// Creates a grid from one `Vec<bool>` per row. All rows must have the
    /// same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(PathfindingError::EmptyGrid);
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(checked_cell_count(row_count, expected)?);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(PathfindingError::RaggedGrid {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols: expected,
            cells,
        })
    }

    /// Creates a grid from integer rows where `1` marks an open cell and any
    /// other value marks a blocked cell.
    ///
    /// # Example
    /// ```rust
    /// use grid_astar::{GridView, OccupancyGrid, Position};
    ///
    /// let grid = OccupancyGrid::from_binary_rows(&[
    ///     &[1u8, 1, 0],
    ///     &[0, 1, 1],
    /// ]).unwrap();
    ///
    /// assert_eq!(grid.rows(), 2);
    /// assert!(grid.is_traversable(Position::new(0, 1)));
    /// assert!(!grid.is_traversable(Position::new(0, 2)));
    /// ```
    pub fn from_binary_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|&v| v == 1).collect())
                .collect(),
        )
    }

    /// Marks a cell open or blocked. Returns `false` if `pos` is out of bounds.
    pub fn set_traversable(&mut self, pos: Position, open: bool) -> bool {
        match self.index_of(pos) {
            Some(idx) => {
                self.cells[idx] = open;
                true
            }
            None => false,
        }
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).filter_map(|idx| self.position_of(idx))
    }
}

/// Validates grid dimensions and returns the number of cells.
fn checked_cell_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(PathfindingError::EmptyGrid);
    }
    // Every row and column index must fit in a Position
    if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
        return Err(PathfindingError::GridTooLarge { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(PathfindingError::GridTooLarge { rows, cols })
}

impl GridView for OccupancyGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn is_traversable(&self, pos: Position) -> bool {
        self.index_of(pos).is_some_and(|idx| self.cells[idx])
    }
}
