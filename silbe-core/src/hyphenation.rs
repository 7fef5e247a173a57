//! Hyphenation engine contract
//!
//! A hyphenation engine maps one word to its ordered syllable sequence.
//! Engine contract: concatenating the syllables must reproduce the word
//! exactly. This crate does not enforce the contract; a violating engine
//! silently corrupts the rebuilt run text downstream.

use smallvec::{smallvec, SmallVec};

/// Ordered syllable sequence for one word
///
/// Most words pass through unhyphenated, so a single part stays inline.
pub type Syllables = SmallVec<[String; 2]>;

/// A pluggable hyphenation engine
///
/// Implementations must be concatenation-preserving: joining the returned
/// parts reproduces `word` byte for byte. They may be expensive or perform
/// I/O (dictionary lookups); no timeout or retry is imposed here.
pub trait Hyphenate: Send + Sync {
    /// Split `word` into its ordered syllable sequence
    fn hyphenate(&self, word: &str) -> Syllables;
}

impl<F> Hyphenate for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn hyphenate(&self, word: &str) -> Syllables {
        SmallVec::from_vec(self(word))
    }
}

/// Default engine: performs no hyphenation at all
///
/// Returns the word unchanged as a single-element sequence. A stateless
/// strategy, selectable alongside real engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHyphenation;

impl Hyphenate for NoHyphenation {
    fn hyphenate(&self, word: &str) -> Syllables {
        smallvec![word.to_string()]
    }
}
