//! The word-wrap transform
//!
//! Walks an attributed string run by run, segments each run's substring
//! into words, pushes every word through the resolved hyphenation engine,
//! and reassembles the result. The flat syllable list is the break-candidate
//! sequence a downstream line breaker consumes.

use crate::config::WrapConfig;
use crate::engines::Engines;
use crate::error::Result;
use crate::resolver;
use silbe_core::{segment_words, Alphabet, AttributedString, Fragment, UnicodeAlphabet};

/// Transform output: the rebuilt attributed string plus break candidates
///
/// `syllables` is attached invocation state, not part of the canonical
/// attributed-string shape: the global ordered sequence of every syllable
/// across all runs, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedString<A> {
    /// Rebuilt attributed string with per-run text replaced
    pub attributed: AttributedString<A>,
    /// All syllables across all runs, in processing order
    pub syllables: Vec<String>,
}

/// Word-wrap preprocessing stage
///
/// Holds the engine registry, configuration, and alphabetic classifier.
/// [`apply`](WordWrap::apply) is pure: identical inputs and configuration
/// produce identical output, and the input is never mutated.
#[derive(Debug, Clone)]
pub struct WordWrap<C = UnicodeAlphabet> {
    engines: Engines,
    config: WrapConfig,
    alphabet: C,
}

impl WordWrap<UnicodeAlphabet> {
    /// Create a transform with the Unicode alphabetic classifier
    pub fn new(engines: Engines, config: WrapConfig) -> Self {
        Self {
            engines,
            config,
            alphabet: UnicodeAlphabet,
        }
    }
}

impl<C: Alphabet> WordWrap<C> {
    /// Replace the alphabetic classifier
    pub fn with_alphabet<D: Alphabet>(self, alphabet: D) -> WordWrap<D> {
        WordWrap {
            engines: self.engines,
            config: self.config,
            alphabet,
        }
    }

    /// Wrap one attributed string
    ///
    /// Resolves the hyphenation engine once, then processes runs in order.
    /// With a concatenation-preserving engine, every output run's text
    /// equals its input substring. Run ranges are a caller precondition and
    /// are not validated here.
    pub fn apply<A: Clone>(&self, attributed: &AttributedString<A>) -> Result<WrappedString<A>> {
        let hyphenate = resolver::resolve(&self.engines, &self.config)?;

        let mut syllables = Vec::new();
        let mut fragments = Vec::with_capacity(attributed.runs.len());

        for run in &attributed.runs {
            let substring = attributed.substring(run);
            let words = segment_words(substring, &self.alphabet);
            let mut string = String::with_capacity(substring.len());

            // The segmenter never emits empty words; the filter is a guard,
            // not a reachable path.
            for word in words.into_iter().filter(|word| !word.is_empty()) {
                for part in hyphenate.hyphenate(word) {
                    string.push_str(&part);
                    syllables.push(part);
                }
            }

            tracing::trace!(
                run_start = run.start,
                run_end = run.end,
                rebuilt_len = string.len(),
                "run wrapped"
            );

            fragments.push(Fragment {
                attributes: run.attributes.clone(),
                string,
            });
        }

        Ok(WrappedString {
            attributed: AttributedString::from_fragments(fragments),
            syllables,
        })
    }
}
