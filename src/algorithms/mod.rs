/// Provides methods for pathfinding using the A* algorithm, and its greedy
/// best-first variant.
///
/// You most likely want to start with one of the following:
/// - [search](crate::algorithms::astar::search)
/// - [SearchEngine](crate::algorithms::astar::SearchEngine)
pub mod astar;

/// Provides methods for pathfinding using Dijkstra's Shortest Paths algorithm
pub mod dijkstra;
