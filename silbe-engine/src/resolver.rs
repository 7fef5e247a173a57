//! Hyphenation engine resolution
//!
//! Picks exactly one hyphenation engine per transform invocation from three
//! priority sources, first match wins:
//!
//! 1. the explicit callback in [`WrapConfig`], used verbatim,
//! 2. the registered word-hyphenation factory, invoked once with the
//!    configuration,
//! 3. the no-op default that leaves every word whole.
//!
//! Resolution happens once up front and the result is reused across all
//! runs and words of the invocation, so factory side effects fire at most
//! once.

use crate::config::WrapConfig;
use crate::engines::Engines;
use crate::error::Result;
use silbe_core::{Hyphenate, NoHyphenation};
use std::sync::Arc;

/// Resolve the hyphenation engine for one invocation
pub fn resolve(engines: &Engines, config: &WrapConfig) -> Result<Arc<dyn Hyphenate>> {
    if let Some(callback) = &config.hyphenation_callback {
        tracing::debug!("hyphenation: explicit callback");
        return Ok(Arc::clone(callback));
    }

    if let Some(factory) = engines.word_hyphenation() {
        tracing::debug!("hyphenation: registered engine factory");
        return factory.create(config);
    }

    tracing::debug!("hyphenation: none configured, words pass through whole");
    Ok(Arc::new(NoHyphenation))
}
