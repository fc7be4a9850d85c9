/// Occupancy grid implementation of [GridView](crate::common::traits::GridView).
pub mod grid;

#[cfg(test)]
mod grid_tests;

/// Priority queue of cells awaiting expansion.
pub mod frontier;

/// Per-search node bookkeeping.
pub mod node_table;
