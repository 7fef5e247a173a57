//! Engine registry
//!
//! Capability-based plugin slots for the layout pipeline. A registered
//! factory is invoked at most once per transform invocation, with the full
//! configuration, to produce the hyphenation engine for that invocation.

use crate::config::WrapConfig;
use crate::error::Result;
use silbe_core::Hyphenate;
use std::sync::Arc;

/// Factory for the word-hyphenation capability
///
/// Engines produced by the factory must satisfy the concatenation-preserving
/// contract of [`Hyphenate`]. Creation is fallible: real engines load
/// pattern dictionaries and similar resources.
pub trait WordHyphenationFactory: Send + Sync {
    /// Build a hyphenation engine from the invocation's configuration
    fn create(&self, config: &WrapConfig) -> Result<Arc<dyn Hyphenate>>;
}

impl<F> WordHyphenationFactory for F
where
    F: Fn(&WrapConfig) -> Result<Arc<dyn Hyphenate>> + Send + Sync,
{
    fn create(&self, config: &WrapConfig) -> Result<Arc<dyn Hyphenate>> {
        self(config)
    }
}

/// Registry of pluggable layout engines
///
/// Currently a single capability: word hyphenation. Lookup is by
/// capability slot, not by engine type.
#[derive(Clone, Default)]
pub struct Engines {
    word_hyphenation: Option<Arc<dyn WordHyphenationFactory>>,
}

impl Engines {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a word-hyphenation engine factory
    pub fn with_word_hyphenation(mut self, factory: impl WordHyphenationFactory + 'static) -> Self {
        self.word_hyphenation = Some(Arc::new(factory));
        self
    }

    /// The registered word-hyphenation factory, if any
    pub fn word_hyphenation(&self) -> Option<&Arc<dyn WordHyphenationFactory>> {
        self.word_hyphenation.as_ref()
    }
}

impl std::fmt::Debug for Engines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engines")
            .field(
                "word_hyphenation",
                &self.word_hyphenation.as_ref().map(|_| "..."),
            )
            .finish()
    }
}
