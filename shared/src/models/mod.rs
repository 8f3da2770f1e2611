//! Data models
//!
//! Shared between the editor engine and the HTTP client.
//! Coordinates are grid cells with `(0, 0)` at the top-left of every floor.

pub mod availability;
pub mod floor_plan;

// Re-exports
pub use availability::*;
pub use floor_plan::*;
