/// Coordinate and direction types
pub mod types;

/// Traits shared by grids and algorithms
pub mod traits;

/// Reference grids used by tests
#[cfg(test)]
pub mod data;
