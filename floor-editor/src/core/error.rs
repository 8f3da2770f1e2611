use floor_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Rejected locally, nothing changed and nothing was sent
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No table at ({x}, {y}) on floor {floor}")]
    TableNotFound { x: i32, y: i32, floor: u32 },

    /// Load or commit failed; local edits are untouched
    #[error("Backend error: {0}")]
    Transport(#[from] ClientError),
}

impl EditorError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::TableNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
