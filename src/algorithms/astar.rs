// https://en.wikipedia.org/wiki/A*_search_algorithm

use log::{debug, trace};

use crate::common::traits::GridView;
use crate::common::types::Position;
use crate::config::{SearchConfig, SearchMode, TerminationPolicy};
use crate::data_structures::frontier::{Frontier, FrontierEntry};
use crate::data_structures::node_table::{NodeState, NodeTable, SearchNode};
use crate::error::{Endpoint, PathfindingError, Result};
use crate::utils::heuristics::HeuristicKind;
use crate::utils::metrics::SearchMetrics;
use crate::utils::neighbors::MovementTopology;
use crate::utils::pathing::reconstruct_path;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// A path from start to goal was found.
    GoalReached,
    /// Every reachable cell was expanded without reaching the goal.
    Exhausted,
    /// Start and goal are the same cell; no search was run.
    AlreadyAtGoal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    status: SearchStatus,
    path: Option<Vec<Position>>,
    total_cost: Option<f64>,
    nodes_expanded: u64,
    mode: SearchMode,
    termination: TerminationPolicy,
}

impl SearchOutcome {
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether a path is available.
    pub fn found(&self) -> bool {
        self.status != SearchStatus::Exhausted
    }

    /// The path from start to goal, both inclusive. Present for
    /// [SearchStatus::GoalReached] and [SearchStatus::AlreadyAtGoal].
    pub fn path(&self) -> Option<&[Position]> {
        self.path.as_deref()
    }

    /// The movement cost of the result path
    pub fn total_cost(&self) -> Option<f64> {
        self.total_cost
    }

    /// The number of cells transitioned to closed
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The termination policy that produced this outcome.
    pub fn termination(&self) -> TerminationPolicy {
        self.termination
    }

    /// Consumes the outcome, returning the path or
    /// [PathfindingError::NoPathExists] if the search was exhausted.
    pub fn into_path(self) -> Result<Vec<Position>> {
        self.path.ok_or(PathfindingError::NoPathExists)
    }
}

/// Runs searches over a borrowed grid with a fixed configuration.
///
/// The engine owns no per-search state; each call to
/// [search](SearchEngine::search) allocates its own node table and frontier.
/// Only the [SearchMetrics] persist, and only until
/// [reset_metrics](SearchEngine::reset_metrics) is called.
///
/// # Example
/// ```rust
/// use grid_astar::{OccupancyGrid, Position, SearchConfig, SearchEngine, SearchStatus};
///
/// let grid = OccupancyGrid::from_binary_rows(&[
///     [1u8, 1, 1],
///     [0, 0, 1],
///     [1, 1, 1],
/// ]).unwrap();
///
/// let mut engine = SearchEngine::new(&grid, SearchConfig::default()).unwrap();
/// let outcome = engine.search(Position::new(0, 0), Position::new(2, 0)).unwrap();
///
/// assert_eq!(outcome.status(), SearchStatus::GoalReached);
/// assert_eq!(outcome.path().unwrap().first(), Some(&Position::new(0, 0)));
/// assert_eq!(engine.metrics().searches(), 1);
/// ```
#[derive(Debug)]
pub struct SearchEngine<'g, G: GridView + ?Sized> {
    grid: &'g G,
    config: SearchConfig,
    metrics: SearchMetrics,
}

impl<'g, G: GridView + ?Sized> SearchEngine<'g, G> {
    /// Creates an engine, rejecting invalid step costs.
    pub fn new(grid: &'g G, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid,
            config,
            metrics: SearchMetrics::default(),
        })
    }

    pub fn grid(&self) -> &'g G {
        self.grid
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The active termination policy.
    pub fn termination_policy(&self) -> TerminationPolicy {
        self.config.termination
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Adds a caller-measured duration to the metrics.
    pub fn record_elapsed(&mut self, elapsed: std::time::Duration) {
        self.metrics.record_elapsed(elapsed);
    }

    /// Searches for a path from `start` to `goal`.
    ///
    /// Input errors ([PathfindingError::InvalidPosition],
    /// [PathfindingError::BlockedEndpoint]) are returned before any search
    /// work is done and leave the metrics untouched. An unreachable goal is
    /// not an error: it yields [SearchStatus::Exhausted].
    pub fn search(&mut self, start: Position, goal: Position) -> Result<SearchOutcome> {
        let outcome = search_with_config(self.grid, start, goal, &self.config)?;
        self.metrics.record_search(outcome.nodes_expanded);
        Ok(outcome)
    }
}

/// One-shot search with the default step costs and termination policy.
///
/// # Example
/// ```rust
/// use grid_astar::{HeuristicKind, MovementTopology, OccupancyGrid, Position, SearchMode};
///
/// let grid = OccupancyGrid::new(3, 3, true).unwrap();
/// let outcome = grid_astar::search(
///     &grid,
///     Position::new(0, 0),
///     Position::new(2, 2),
///     HeuristicKind::Manhattan,
///     MovementTopology::FourConnected,
///     SearchMode::AStar,
/// ).unwrap();
///
/// assert_eq!(outcome.total_cost(), Some(4.0));
/// ```
pub fn search<G: GridView + ?Sized>(
    grid: &G,
    start: Position,
    goal: Position,
    heuristic: HeuristicKind,
    topology: MovementTopology,
    mode: SearchMode,
) -> Result<SearchOutcome> {
    let config = SearchConfig::default()
        .with_heuristic(heuristic)
        .with_topology(topology)
        .with_mode(mode);
    search_with_config(grid, start, goal, &config)
}

/// Searches for a path from `start` to `goal` under `config`.
pub fn search_with_config<G: GridView + ?Sized>(
    grid: &G,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    trace!(
        "[AStar] search: start={} goal={} heuristic={} topology={:?} mode={:?} termination={:?}",
        start,
        goal,
        config.heuristic,
        config.topology,
        config.mode,
        config.termination
    );

    config.validate()?;
    validate_endpoints(grid, start, goal)?;

    if start == goal {
        debug!("[AStar] start {} is already the goal", start);
        return Ok(SearchOutcome {
            status: SearchStatus::AlreadyAtGoal,
            path: Some(vec![start]),
            total_cost: Some(0.0),
            nodes_expanded: 0,
            mode: config.mode,
            termination: config.termination,
        });
    }

    let Exploration {
        reached,
        nodes,
        nodes_expanded,
        frontier_inserts,
    } = explore(grid, start, goal, config)?;

    if !reached {
        debug!(
            "[AStar] exhausted: goal {} unreachable from {} after {} expansions",
            goal, start, nodes_expanded
        );
        return Ok(SearchOutcome {
            status: SearchStatus::Exhausted,
            path: None,
            total_cost: None,
            nodes_expanded,
            mode: config.mode,
            termination: config.termination,
        });
    }

    let path = reconstruct_path(&nodes, goal)?;
    let total_cost = nodes.get(goal).map(|node| node.best_cost);
    debug!(
        "[AStar] goal reached: {} steps, cost {:?}, {} expansions, {} frontier inserts",
        path.len() - 1,
        total_cost,
        nodes_expanded,
        frontier_inserts
    );

    Ok(SearchOutcome {
        status: SearchStatus::GoalReached,
        path: Some(path),
        total_cost,
        nodes_expanded,
        mode: config.mode,
        termination: config.termination,
    })
}

/// Node table and counters left behind by one run of the expansion loop.
struct Exploration {
    reached: bool,
    nodes: NodeTable,
    nodes_expanded: u64,
    frontier_inserts: u64,
}

/// Expands cells from `start` until the goal is reached or the frontier
/// runs dry. Endpoints must already be validated.
fn explore<G: GridView + ?Sized>(
    grid: &G,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<Exploration> {
    let heuristic = config.heuristic_config();
    let costs = config.costs;
    let mode = config.mode;
    let termination = config.termination;

    let mut nodes = NodeTable::for_grid(grid);
    let mut frontier = Frontier::new();
    let mut nodes_expanded: u64 = 0;
    let mut frontier_inserts: u64 = 0;

    // The start is its own parent, which terminates path reconstruction
    let start_key = {
        let node = nodes
            .get_mut(start)
            .ok_or(PathfindingError::InvalidPosition {
                endpoint: Endpoint::Start,
                position: start,
                rows: grid.rows(),
                cols: grid.cols(),
            })?;
        let h_score = heuristic.estimate(start, goal);
        node.best_cost = 0.0;
        node.heuristic_cost = h_score;
        node.total_cost = h_score;
        node.parent = Some(start);
        node.state = NodeState::Open;
        frontier_key(mode, node)
    };
    frontier.insert(FrontierEntry::new(start_key, start));
    frontier_inserts += 1;

    // Examine the frontier with lower cost nodes first (min-heap)
    let reached = 'search: loop {
        let Some(entry) = frontier.extract_min() else {
            break 'search false;
        };
        let current = entry.position;

        let current_cost = {
            let Some(node) = nodes.get_mut(current) else {
                continue;
            };
            // Skip stale entries superseded by a cheaper route.
            if node.is_closed() || !entry.has_key(frontier_key(mode, node)) {
                continue;
            }
            node.state = NodeState::Closed;
            node.best_cost
        };
        nodes_expanded += 1;

        if termination == TerminationPolicy::OnExtraction && current == goal {
            break 'search true;
        }

        for (direction, next) in config.topology.traversable_neighbors(grid, current) {
            let Some(next_node) = nodes.get_mut(next) else {
                continue;
            };
            let tentative_cost = current_cost + costs.step_cost(direction);

            if termination == TerminationPolicy::OnGeneration && next == goal {
                next_node.best_cost = tentative_cost;
                next_node.heuristic_cost = 0.0;
                next_node.total_cost = tentative_cost;
                next_node.parent = Some(current);
                break 'search true;
            }

            if next_node.is_closed() {
                continue;
            }

            if next_node.state == NodeState::Unvisited || tentative_cost < next_node.best_cost {
                let h_score = heuristic.estimate(next, goal);
                next_node.best_cost = tentative_cost;
                next_node.heuristic_cost = h_score;
                next_node.total_cost = tentative_cost + h_score;
                next_node.parent = Some(current);
                next_node.state = NodeState::Open;
                frontier.insert(FrontierEntry::new(frontier_key(mode, next_node), next));
                frontier_inserts += 1;
            }
        }
    };

    Ok(Exploration {
        reached,
        nodes,
        nodes_expanded,
        frontier_inserts,
    })
}

/// Frontier ordering key for a node under `mode`.
fn frontier_key(mode: SearchMode, node: &SearchNode) -> f64 {
    match mode {
        SearchMode::AStar => node.total_cost,
        SearchMode::Greedy => node.heuristic_cost,
    }
}

fn validate_endpoints<G: GridView + ?Sized>(grid: &G, start: Position, goal: Position) -> Result<()> {
    for (endpoint, position) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.in_bounds(position) {
            debug!("[AStar] FAILED: {} {} is out of bounds", endpoint, position);
            return Err(PathfindingError::InvalidPosition {
                endpoint,
                position,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
    }

    for (endpoint, position) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.is_traversable(position) {
            debug!("[AStar] FAILED: {} {} is blocked", endpoint, position);
            return Err(PathfindingError::BlockedEndpoint { endpoint, position });
        }
    }

    Ok(())
}
