//! API-level error types

use silbe_engine::EngineError;
use thiserror::Error;

/// Errors surfaced to API consumers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Error from the orchestration layer
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
