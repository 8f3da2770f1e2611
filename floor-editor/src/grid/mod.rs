//! Spatial grid model
//!
//! - [`GridStore`] - placed items keyed by `(floor, x, y)`
//! - [`kind`] - per-kind display and grouping policy
//! - [`adjacency`] - neighbor scanning, chair counts and table groups

pub mod adjacency;
pub mod kind;
pub mod store;

pub use adjacency::{chair_count_around, group_of, neighbors_of, table_next_to};
pub use kind::{KindPolicy, policy};
pub use store::GridStore;

use shared::models::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Visible grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` lies in `[0, width) x [0, height)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Whether both dimensions are within the accepted range
    pub fn is_valid(&self) -> bool {
        let range = MIN_GRID_SIZE..=MAX_GRID_SIZE;
        range.contains(&self.width) && range.contains(&self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let bounds = GridBounds::new(6, 6);
        assert!(bounds.contains(0, 0));
        assert!(bounds.contains(5, 5));
        assert!(!bounds.contains(6, 0));
        assert!(!bounds.contains(0, -1));
    }

    #[test]
    fn test_is_valid_range() {
        assert!(GridBounds::new(5, 100).is_valid());
        assert!(!GridBounds::new(4, 10).is_valid());
        assert!(!GridBounds::new(10, 101).is_valid());
    }
}
