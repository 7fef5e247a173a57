//! Layered error types

use silbe_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core data-model error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A registered engine factory failed to produce a hyphenation engine
    #[error("failed to create hyphenation engine: {reason}")]
    EngineCreation {
        /// What went wrong inside the factory
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
