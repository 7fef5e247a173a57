//! Configuration for the word-wrap transform

use silbe_core::Hyphenate;
use std::collections::HashMap;
use std::sync::Arc;

/// Configuration consumed by one transform invocation
///
/// Read-only once the transform starts. The callback, when set, wins over
/// any registered engine factory. Everything in `engine_options` is opaque
/// to this crate and forwarded verbatim (inside the whole config) to the
/// factory if one is invoked.
#[derive(Clone, Default)]
pub struct WrapConfig {
    /// Explicit hyphenation override, highest priority
    pub hyphenation_callback: Option<Arc<dyn Hyphenate>>,
    /// Engine-specific options, uninterpreted here
    pub engine_options: HashMap<String, String>,
}

impl WrapConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit hyphenation callback
    pub fn with_hyphenation_callback(mut self, callback: impl Hyphenate + 'static) -> Self {
        self.hyphenation_callback = Some(Arc::new(callback));
        self
    }

    /// Add an engine-specific option, forwarded verbatim to the factory
    pub fn with_engine_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.engine_options.insert(key.into(), value.into());
        self
    }
}

impl std::fmt::Debug for WrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrapConfig")
            .field(
                "hyphenation_callback",
                &self.hyphenation_callback.as_ref().map(|_| "..."),
            )
            .field("engine_options", &self.engine_options)
            .finish()
    }
}
