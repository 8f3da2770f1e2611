//! Core module - configuration, errors and the editing session
//!
//! - [`EditorConfig`] - environment-driven configuration
//! - [`EditorSession`] - one loaded floor plan being edited
//! - [`EditorError`] - editor errors

pub mod config;
pub mod error;
pub mod session;

pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use session::EditorSession;
