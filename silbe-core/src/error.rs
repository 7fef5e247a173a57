//! Core error types (deterministic only)

use core::fmt;

/// Core data-model errors (no I/O, no external failures)
///
/// Run ranges are *assumed* well formed by the transform; these errors are
/// only produced by the opt-in [`Run::check_bounds`](crate::Run::check_bounds)
/// validator and by debug assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Run range with `start > end`
    InvertedRange {
        /// Range start in bytes
        start: usize,
        /// Range end in bytes
        end: usize,
    },
    /// Run range extends past the end of the string
    OutOfBounds {
        /// Range end in bytes
        end: usize,
        /// String length in bytes
        len: usize,
    },
    /// Range boundary falls inside a multi-byte character
    NotCharBoundary {
        /// The offending byte index
        index: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvertedRange { start, end } => {
                write!(f, "inverted run range [{start}, {end})")
            }
            CoreError::OutOfBounds { end, len } => {
                write!(f, "run range ends at byte {end} but string is {len} bytes")
            }
            CoreError::NotCharBoundary { index } => {
                write!(f, "byte {index} is not a character boundary")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
