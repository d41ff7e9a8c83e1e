//! Error types for the rasterizer

use thiserror::Error;

/// Rasterizer error types
#[derive(Debug, Error)]
pub enum QrError {
    /// Invalid surface/module configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for rasterizer operations
pub type QrResult<T> = Result<T, QrError>;
