//! High-level configuration API

use silbe_core::Hyphenate;
use silbe_engine::{Engines, WordHyphenationFactory, WrapConfig};

/// Which alphabetic classifier the segmenter uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphabetChoice {
    /// Unicode `Alphabetic` property (default)
    #[default]
    Unicode,
    /// ASCII letters only
    Ascii,
}

/// High-level configuration for word wrapping
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) engines: Engines,
    pub(crate) wrap: WrapConfig,
    pub(crate) alphabet: AlphabetChoice,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the explicit hyphenation callback (outranks any registered engine)
    pub fn hyphenation_callback(mut self, callback: impl Hyphenate + 'static) -> Self {
        self.config.wrap = self.config.wrap.with_hyphenation_callback(callback);
        self
    }

    /// Register a word-hyphenation engine factory
    pub fn word_hyphenation_engine(
        mut self,
        factory: impl WordHyphenationFactory + 'static,
    ) -> Self {
        self.config.engines = self.config.engines.with_word_hyphenation(factory);
        self
    }

    /// Add an engine-specific option, forwarded verbatim to the factory
    pub fn engine_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.wrap = self.config.wrap.with_engine_option(key, value);
        self
    }

    /// Choose the alphabetic classifier
    pub fn alphabet(mut self, alphabet: AlphabetChoice) -> Self {
        self.config.alphabet = alphabet;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
