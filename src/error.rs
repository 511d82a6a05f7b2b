// ClipBoy Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboyError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clip not found: {0}")]
    ClipNotFound(String),

    #[error("Invalid proposal payload: {0}")]
    InvalidProposals(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for ClipboyError {
    fn from(err: anyhow::Error) -> Self {
        ClipboyError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClipboyError>;
