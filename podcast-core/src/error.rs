//! Error types for Podcast Core

use thiserror::Error;

/// Result type alias using PodcastError
pub type Result<T> = std::result::Result<T, PodcastError>;

/// Top-level error type for all podcast pipeline operations
#[derive(Debug, Error)]
pub enum PodcastError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Invalid public URL: {0}")]
    InvalidPublicUrl(String),
}
