//! Alphabetic character classification
//!
//! The segmenter branches on a single predicate: is this character part of a
//! word? The predicate is a seam so callers can plug in script-specific
//! notions of "alphabetic" without touching the scan itself.

/// Per-character alphabetic classifier
///
/// The sole input to the segmenter's branching decision.
pub trait Alphabet {
    /// Whether `ch` belongs to a word (as opposed to punctuation,
    /// whitespace, digits, etc.)
    fn is_alphabetic(&self, ch: char) -> bool;
}

impl<F> Alphabet for F
where
    F: Fn(char) -> bool,
{
    fn is_alphabetic(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Classifier backed by the Unicode `Alphabetic` property
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeAlphabet;

impl Alphabet for UnicodeAlphabet {
    fn is_alphabetic(&self, ch: char) -> bool {
        ch.is_alphabetic()
    }
}

/// Classifier accepting ASCII letters only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiAlphabet;

impl Alphabet for AsciiAlphabet {
    fn is_alphabetic(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }
}
