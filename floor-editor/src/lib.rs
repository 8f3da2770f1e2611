//! Floor Editor - seating layout engine for restaurant floor plans
//!
//! # Overview
//!
//! A floor plan is a grid of cells on one or more floors. Each cell holds at
//! most one item (table, chair or wall). The editor loads a plan from the
//! backend, lets the operator paint and rename in memory, and commits the
//! whole item set back in one request.
//!
//! # Module structure
//!
//! ```text
//! floor-editor/src/
//! ├── core/       # config, errors, editing session
//! ├── common/     # logging
//! ├── grid/       # cell store, kind policies, adjacency
//! ├── floors.rs   # floor registry
//! ├── tools.rs    # tool & paint controller
//! ├── resize.rs   # bounds changes
//! ├── protocol.rs # save/load normalization
//! └── overlay.rs  # availability join
//! ```

pub mod common;
pub mod core;
pub mod floors;
pub mod grid;
pub mod overlay;
pub mod protocol;
pub mod resize;
pub mod tools;

pub use crate::core::{EditorConfig, EditorError, EditorSession, Result};
pub use floors::FloorRegistry;
pub use grid::{GridBounds, GridStore};
pub use overlay::{SeatSource, TablePresentation};
pub use tools::{PointerButton, PointerEvent, Tool, ToolController, ToolOutcome};

pub use common::logger::{init_logger, init_logger_with_file};
