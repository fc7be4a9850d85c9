use crate::common::types::{Direction, Position};
use crate::data_structures::node_table::NodeTable;
use crate::error::{PathfindingError, Result};
use crate::utils::movement_costs::StepCosts;

/// Walks parent links back from `goal` to the start (the node that is its
/// own parent) and returns the path in start-to-goal order.
///
/// Returns [PathfindingError::NoPathExists] if the goal was never reached,
/// or if the parent chain is broken or longer than the table.
pub fn reconstruct_path(nodes: &NodeTable, goal: Position) -> Result<Vec<Position>> {
    let mut path = vec![goal];
    let mut current_pos = goal;

    loop {
        let parent = nodes
            .parent_of(current_pos)
            .ok_or(PathfindingError::NoPathExists)?;
        if parent == current_pos {
            break;
        }
        // A valid chain visits each cell at most once
        if path.len() > nodes.len() {
            return Err(PathfindingError::NoPathExists);
        }
        path.push(parent);
        current_pos = parent;
    }

    path.reverse();
    Ok(path)
}

/// Sum of the step costs along `path`.
///
/// Consecutive positions are expected to be adjacent; a pair that is not
/// is charged the cost of a single step in the direction between them.
pub fn path_cost(path: &[Position], costs: &StepCosts) -> f64 {
    path.windows(2)
        .filter_map(|pair| pair[0].get_direction_to(pair[1]))
        .map(|dir| costs.step_cost(dir))
        .sum()
}

/// Utility function for converting a position and a path
/// into a direction for the next movement on the path.
///
/// If the position is not on the path, it will return
/// a direction that moves towards the first
/// position of the path.
///
/// Returns None if the current position is the final
/// position in the path, or if the path is empty.
pub fn next_step_direction(current_pos: Position, path: &[Position]) -> Option<Direction> {
    match path.iter().position(|&p| p == current_pos) {
        Some(i) => path
            .get(i + 1)
            .and_then(|&next_pos| current_pos.get_direction_to(next_pos)),
        None => path
            .first()
            .and_then(|&start| current_pos.get_direction_to(start)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::grid::OccupancyGrid;

    fn table_with_chain(chain: &[(i32, i32)]) -> NodeTable {
        let grid = OccupancyGrid::new(4, 4, true).unwrap();
        let mut nodes = NodeTable::for_grid(&grid);
        let start = Position::from(chain[0]);
        nodes.get_mut(start).unwrap().parent = Some(start);
        for pair in chain.windows(2) {
            nodes.get_mut(Position::from(pair[1])).unwrap().parent = Some(Position::from(pair[0]));
        }
        nodes
    }

    #[test]
    fn reconstructs_start_to_goal_order() {
        let nodes = table_with_chain(&[(0, 0), (1, 1), (2, 1), (3, 2)]);
        let path = reconstruct_path(&nodes, Position::new(3, 2)).unwrap();
        assert_eq!(
            path,
            vec![
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 2),
            ]
        );
    }

    #[test]
    fn start_alone_is_a_single_element_path() {
        let nodes = table_with_chain(&[(2, 2)]);
        assert_eq!(
            reconstruct_path(&nodes, Position::new(2, 2)),
            Ok(vec![Position::new(2, 2)])
        );
    }

    #[test]
    fn unreached_goal_has_no_path() {
        let nodes = table_with_chain(&[(0, 0), (0, 1)]);
        assert_eq!(
            reconstruct_path(&nodes, Position::new(3, 3)),
            Err(PathfindingError::NoPathExists)
        );
    }

    #[test]
    fn parent_cycle_is_reported_instead_of_looping() {
        let grid = OccupancyGrid::new(2, 2, true).unwrap();
        let mut nodes = NodeTable::for_grid(&grid);
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        nodes.get_mut(a).unwrap().parent = Some(b);
        nodes.get_mut(b).unwrap().parent = Some(a);

        assert_eq!(reconstruct_path(&nodes, a), Err(PathfindingError::NoPathExists));
    }

    #[test]
    fn path_cost_charges_diagonals() {
        let costs = StepCosts::new(1.0, 1.5);
        let path = [
            Position::new(0, 0),
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 2),
        ];
        assert_eq!(path_cost(&path, &costs), 3.5);
        assert_eq!(path_cost(&path[..1], &costs), 0.0);
        assert_eq!(path_cost(&[], &costs), 0.0);
    }

    #[test]
    fn next_step_follows_the_path() {
        let path = [Position::new(0, 0), Position::new(1, 1), Position::new(1, 2)];

        assert_eq!(
            next_step_direction(Position::new(0, 0), &path),
            Some(Direction::BottomRight)
        );
        assert_eq!(
            next_step_direction(Position::new(1, 1), &path),
            Some(Direction::Right)
        );
        assert_eq!(next_step_direction(Position::new(1, 2), &path), None);
        assert_eq!(next_step_direction(Position::new(0, 0), &[]), None);
    }

    #[test]
    fn next_step_heads_to_path_start_when_off_path() {
        let path = [Position::new(2, 2), Position::new(2, 3)];
        assert_eq!(
            next_step_direction(Position::new(5, 0), &path),
            Some(Direction::TopRight)
        );
    }
}
