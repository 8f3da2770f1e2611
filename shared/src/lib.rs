//! Shared types for the floor plan editor
//!
//! Wire and data model types used by both the HTTP client and the editor
//! engine: floor plans, placed items, the normalized save payload and the
//! availability feed.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use models::*;
