use serde::{Deserialize, Serialize};

use crate::common::traits::GridView;
use crate::common::types::{Direction, Position};

const FOUR_CONNECTED: [Direction; 4] = [
    Direction::Top,
    Direction::Bottom,
    Direction::Right,
    Direction::Left,
];

const EIGHT_CONNECTED: [Direction; 8] = [
    Direction::Top,
    Direction::Bottom,
    Direction::Right,
    Direction::Left,
    Direction::TopRight,
    Direction::TopLeft,
    Direction::BottomRight,
    Direction::BottomLeft,
];

/// Which moves are allowed from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementTopology {
    /// Up, down, left and right.
    FourConnected,
    /// The four axis moves plus the four diagonals.
    #[default]
    EightConnected,
}

impl MovementTopology {
    /// Allowed step directions, in expansion order: the axis moves first,
    /// then the diagonals.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            MovementTopology::FourConnected => &FOUR_CONNECTED,
            MovementTopology::EightConnected => &EIGHT_CONNECTED,
        }
    }

    pub fn allows_diagonal(self) -> bool {
        self == MovementTopology::EightConnected
    }

    /// All positions one step from `node`, paired with the step direction.
    ///
    /// Positions are not bounds-checked.
    pub fn neighbors(self, node: Position) -> impl Iterator<Item = (Direction, Position)> {
        self.directions()
            .iter()
            .filter_map(move |&dir| node.checked_add_direction(dir).map(|pos| (dir, pos)))
    }

    /// Neighbors of `node` that `grid` reports as traversable.
    pub fn traversable_neighbors<'a, G: GridView + ?Sized>(
        self,
        grid: &'a G,
        node: Position,
    ) -> impl Iterator<Item = (Direction, Position)> + 'a {
        self.neighbors(node)
            .filter(move |&(_, pos)| grid.is_traversable(pos))
    }
}
