// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

use log::debug;

use crate::common::traits::GridView;
use crate::common::types::Position;
use crate::data_structures::frontier::{Frontier, FrontierEntry};
use crate::data_structures::node_table::{NodeState, NodeTable};
use crate::utils::movement_costs::StepCosts;
use crate::utils::neighbors::MovementTopology;
use crate::utils::pathing::reconstruct_path;

#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraSearchResults {
    ops_used: u64,
    cost: Option<f64>,
    path: Vec<Position>,
}

impl DijkstraSearchResults {
    /// The number of expand node operations used
    pub fn ops(&self) -> u64 {
        self.ops_used
    }

    /// The movement cost of the result path, `None` if the goal is unreachable
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Whether the goal could not be reached
    pub fn incomplete(&self) -> bool {
        self.cost.is_none()
    }

    /// A shortest path from the start node to the goal node
    pub fn path(&self) -> &[Position] {
        &self.path
    }
}

/// Calculates a shortest path from `start` to `goal` using Dijkstra's Algorithm.
///
/// This is an uninformed, exhaustive search over the same movement rules and
/// step costs as the A* engine, so its cost is the ground truth that A* with
/// an admissible heuristic must match. It performs no input validation:
/// out-of-bounds or blocked endpoints simply produce an incomplete result.
///
/// # Example
/// ```rust
/// use grid_astar::algorithms::dijkstra::shortest_path;
/// use grid_astar::{MovementTopology, OccupancyGrid, Position, StepCosts};
///
/// let grid = OccupancyGrid::new(4, 4, true).unwrap();
/// let search_results = shortest_path(
///     &grid,
///     Position::new(0, 0),
///     Position::new(3, 3),
///     MovementTopology::FourConnected,
///     &StepCosts::default(),
/// );
///
/// assert_eq!(search_results.cost(), Some(6.0));
/// assert_eq!(search_results.path().len(), 7);
/// ```
pub fn shortest_path<G: GridView + ?Sized>(
    grid: &G,
    start: Position,
    goal: Position,
    topology: MovementTopology,
    costs: &StepCosts,
) -> DijkstraSearchResults {
    let mut ops_used: u64 = 0;
    let mut nodes = NodeTable::for_grid(grid);
    let mut heap = Frontier::new();

    if !grid.is_traversable(start) || !grid.is_traversable(goal) {
        return DijkstraSearchResults {
            ops_used,
            cost: None,
            path: Vec::new(),
        };
    }

    // We're at `start`, with a zero cost
    if let Some(node) = nodes.get_mut(start) {
        node.best_cost = 0.0;
        node.parent = Some(start);
        node.state = NodeState::Open;
    }
    heap.insert(FrontierEntry::new(0.0, start));

    // Examine the frontier with lower cost nodes first (min-heap)
    while let Some(FrontierEntry { key: cost, position }) = heap.extract_min() {
        let Some(node) = nodes.get_mut(position) else {
            continue;
        };

        // Important as we may have already found a better way
        if node.is_closed() || cost > node.best_cost {
            continue;
        }
        node.state = NodeState::Closed;
        ops_used += 1;

        // We found the goal state, return the search results
        if position == goal {
            return goal_results(&nodes, goal, ops_used);
        }

        // For each node we can reach, see if we can find a way with
        // a lower cost going through this node
        for (direction, next) in topology.traversable_neighbors(grid, position) {
            let next_cost = cost + costs.step_cost(direction);
            let Some(next_node) = nodes.get_mut(next) else {
                continue;
            };

            if next_cost < next_node.best_cost {
                // Relaxation, we have now found a better way
                next_node.best_cost = next_cost;
                next_node.parent = Some(position);
                next_node.state = NodeState::Open;
                heap.insert(FrontierEntry::new(next_cost, next));
            }
        }
    }

    // Goal not reachable
    DijkstraSearchResults {
        ops_used,
        cost: None,
        path: Vec::new(),
    }
}

/// Builds the results once `goal` is closed. A parent chain that does not
/// lead back to the start yields an incomplete result, never a cost without
/// a path.
fn goal_results(nodes: &NodeTable, goal: Position, ops_used: u64) -> DijkstraSearchResults {
    match reconstruct_path(nodes, goal) {
        Ok(path) => DijkstraSearchResults {
            ops_used,
            cost: nodes.get(goal).map(|node| node.best_cost),
            path,
        },
        Err(err) => {
            debug!("[Dijkstra] FAILED: goal {} closed but {}", goal, err);
            DijkstraSearchResults {
                ops_used,
                cost: None,
                path: Vec::new(),
            }
        }
    }
}
