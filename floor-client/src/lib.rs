//! Floor Client - HTTP client for the floor plan backend
//!
//! Loads floor plans, commits item sets and grid sizes, and reads the
//! availability feed.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;

pub use backend::FloorPlanBackend;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
