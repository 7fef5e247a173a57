//! Public API for silbe word-wrap preprocessing
//!
//! This crate provides a clean, stable interface over `silbe-engine` for
//! the word-segmentation and hyphenation stage of a text-layout pipeline.
//!
//! # Example
//!
//! ```rust
//! use silbe_api::WordWrapper;
//! use silbe_core::{AttributedString, Run};
//!
//! let wrapper = WordWrapper::new();
//! let input = AttributedString::new("hello, world!", vec![Run::new(0, 13, ())]);
//! let output = wrapper.wrap(&input).unwrap();
//!
//! assert_eq!(output.attributed.string, "hello, world!");
//! assert_eq!(output.syllables, vec!["hello", ",", " ", "world", "!"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

// Re-export key types
pub use config::{AlphabetChoice, Config, ConfigBuilder};
pub use dto::{Metadata, Output};
pub use error::{ApiError, Result};

// Re-export the data model for convenience
pub use silbe_core::{AttributedString, Fragment, Hyphenate, NoHyphenation, Run, Syllables};

use silbe_engine::{AsciiAlphabet, WordWrap};
use std::time::Instant;

/// Main entry point for word-wrap preprocessing
///
/// Holds read-only configuration; [`wrap`](WordWrapper::wrap) may be called
/// any number of times, including concurrently from multiple threads.
#[derive(Debug, Clone, Default)]
pub struct WordWrapper {
    config: Config,
}

impl WordWrapper {
    /// Create a wrapper with default configuration (no hyphenation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wrapper with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Wrap one attributed string
    pub fn wrap<A: Clone>(&self, attributed: &AttributedString<A>) -> Result<Output<A>> {
        let start = Instant::now();

        let transform = WordWrap::new(self.config.engines.clone(), self.config.wrap.clone());
        let wrapped = match self.config.alphabet {
            AlphabetChoice::Unicode => transform.apply(attributed)?,
            AlphabetChoice::Ascii => transform.with_alphabet(AsciiAlphabet).apply(attributed)?,
        };

        let metadata = Metadata {
            runs_processed: wrapped.attributed.runs.len(),
            syllables_emitted: wrapped.syllables.len(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        Ok(Output {
            attributed: wrapped.attributed,
            syllables: wrapped.syllables,
            metadata,
        })
    }
}

/// Wrap plain text as a single run with unit attributes
///
/// Convenience for callers without styled runs.
pub fn wrap_text(text: &str) -> Result<Output<()>> {
    let attributed = AttributedString::new(text, vec![Run::new(0, text.len(), ())]);
    WordWrapper::new().wrap(&attributed)
}
