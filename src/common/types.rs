use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell address.
///
/// Coordinates are signed so that neighbor generation can step off the
/// edge of a grid; such positions are simply out of bounds. Ordering is
/// lexicographic on `row`, then `col`, which is the tie-break order used
/// by the frontier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position one step away in `direction`, or `None` if the
    /// coordinate arithmetic would overflow.
    pub fn checked_add_direction(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        Some(Self {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
        })
    }

    /// Absolute row and column differences to `other`.
    pub fn abs_delta(self, other: Self) -> (u32, u32) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Returns the direction of the first step from `self` towards `other`.
    ///
    /// The target does not need to be adjacent; each axis moves by the sign
    /// of its difference. Returns `None` when the positions are equal.
    pub fn get_direction_to(self, other: Self) -> Option<Direction> {
        let dr = (other.row as i64 - self.row as i64).signum() as i32;
        let dc = (other.col as i64 - self.col as i64).signum() as i32;
        Direction::from_offset(dr, dc)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the eight single-cell moves on a grid. `Top` decreases the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// `(row, col)` offset of a single step.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (1, 0),
            Direction::BottomLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::TopLeft => (-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::TopRight | Direction::BottomRight | Direction::BottomLeft | Direction::TopLeft
        )
    }

    pub fn from_offset(dr: i32, dc: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == (dr, dc))
    }
}
