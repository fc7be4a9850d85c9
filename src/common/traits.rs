use crate::common::types::Position;

/// Read-only view over a rectangular occupancy map.
///
/// The search engine only ever queries a grid through this trait, so
/// callers can search over their own map types without copying them into
/// an [OccupancyGrid](crate::data_structures::grid::OccupancyGrid).
pub trait GridView {
    /// Number of rows. Must stay fixed while a search holds the view.
    fn rows(&self) -> usize;

    /// Number of columns. Must stay fixed while a search holds the view.
    fn cols(&self) -> usize;

    /// Whether the cell at `pos` can be entered.
    ///
    /// Implementations must return `false` for out-of-bounds positions.
    fn is_traversable(&self, pos: Position) -> bool;

    /// Whether `pos` addresses a cell of this grid.
    fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows()
            && (pos.col as usize) < self.cols()
    }

    /// Row-major index of `pos`, or `None` if it is out of bounds.
    fn index_of(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.row as usize * self.cols() + pos.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [index_of](GridView::index_of). `None` for indices past
    /// the last cell or coordinates that do not fit a [Position].
    fn position_of(&self, index: usize) -> Option<Position> {
        let cols = self.cols();
        if cols == 0 || index >= self.cell_count() {
            return None;
        }
        let row = i32::try_from(index / cols).ok()?;
        let col = i32::try_from(index % cols).ok()?;
        Some(Position::new(row, col))
    }

    /// Total number of cells, saturating at `usize::MAX`.
    fn cell_count(&self) -> usize {
        self.rows().saturating_mul(self.cols())
    }
}

impl<G: GridView + ?Sized> GridView for &G {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn is_traversable(&self, pos: Position) -> bool {
        (**self).is_traversable(pos)
    }
}
