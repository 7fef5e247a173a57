//! Orchestration for word-wrap preprocessing
//!
//! This crate wires the pieces from `silbe-core` into the transform the
//! layout pipeline calls: it resolves a hyphenation engine from the
//! configured sources, walks an attributed string run by run, segments each
//! run into words, hyphenates them, and reassembles the result together
//! with the flat syllable list the line breaker consumes.

#![warn(missing_docs)]

pub mod config;
pub mod engines;
pub mod error;
pub mod resolver;
pub mod wrap;

// Re-export key types
pub use config::WrapConfig;
pub use engines::{Engines, WordHyphenationFactory};
pub use error::{EngineError, Result};
pub use wrap::{WordWrap, WrappedString};

// Re-export from core for convenience
pub use silbe_core::{
    Alphabet, AsciiAlphabet, AttributedString, Fragment, Hyphenate, NoHyphenation, Run, Syllables,
    UnicodeAlphabet,
};
