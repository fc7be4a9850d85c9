use crate::common::traits::GridView;
use crate::common::types::Position;

/// Lifecycle of a cell within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    /// Never reached.
    #[default]
    Unvisited,
    /// Reached and queued in the frontier; its cost may still improve.
    Open,
    /// Expanded; its cost is final.
    Closed,
}

/// Search bookkeeping for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    /// Lowest known cost from the start (the g score).
    pub best_cost: f64,
    /// Estimated remaining cost to the goal (the h score).
    pub heuristic_cost: f64,
    /// `best_cost + heuristic_cost` (the f score).
    pub total_cost: f64,
    /// Predecessor on the best known path. The start is its own parent.
    pub parent: Option<Position>,
    pub state: NodeState,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            best_cost: f64::INFINITY,
            heuristic_cost: f64::INFINITY,
            total_cost: f64::INFINITY,
            parent: None,
            state: NodeState::Unvisited,
        }
    }
}

impl SearchNode {
    pub fn is_closed(&self) -> bool {
        self.state == NodeState::Closed
    }
}

/// One [SearchNode] per grid cell, pre-allocated for a single search.
#[derive(Debug, Clone)]
pub struct NodeTable {
    rows: usize,
    cols: usize,
    nodes: Vec<SearchNode>,
}

impl NodeTable {
    /// Allocates a fresh table sized to `grid`.
    pub fn for_grid<G: GridView + ?Sized>(grid: &G) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            nodes: vec![SearchNode::default(); grid.cell_count()],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get(&self, pos: Position) -> Option<&SearchNode> {
        self.index(pos).map(|idx| &self.nodes[idx])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut SearchNode> {
        self.index(pos).map(|idx| &mut self.nodes[idx])
    }

    pub fn parent_of(&self, pos: Position) -> Option<Position> {
        self.get(pos).and_then(|node| node.parent)
    }

    /// Number of cells covered by the table.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the given state.
    pub fn count_in_state(&self, state: NodeState) -> usize {
        self.nodes.iter().filter(|n| n.state == state).count()
    }
}
