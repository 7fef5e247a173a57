//! Attributed-string data model
//!
//! An [`AttributedString`] is an immutable character sequence plus an ordered
//! sequence of style [`Run`]s. Runs are non-overlapping, ascending byte
//! ranges assumed (not verified) to tile the string contiguously. The
//! attribute payload `A` is opaque to this crate and carried through
//! unchanged.

use crate::error::{CoreError, Result};

/// A half-open byte range `[start, end)` sharing one set of style attributes
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run<A> {
    /// Range start, in bytes, inclusive
    pub start: usize,
    /// Range end, in bytes, exclusive
    pub end: usize,
    /// Opaque style attributes, uninterpreted here
    pub attributes: A,
}

impl<A> Run<A> {
    /// Create a new run
    pub fn new(start: usize, end: usize, attributes: A) -> Self {
        Self {
            start,
            end,
            attributes,
        }
    }

    /// Length of the run's range in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the run covers zero bytes
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Validate this run's range against a backing string
    ///
    /// The transform does not call this on its hot path; malformed ranges
    /// are a documented caller precondition. Callers that want early
    /// detection can run it themselves.
    pub fn check_bounds(&self, text: &str) -> Result<()> {
        if self.start > self.end {
            return Err(CoreError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > text.len() {
            return Err(CoreError::OutOfBounds {
                end: self.end,
                len: text.len(),
            });
        }
        for index in [self.start, self.end] {
            if !text.is_char_boundary(index) {
                return Err(CoreError::NotCharBoundary { index });
            }
        }
        Ok(())
    }
}

/// A rebuilt run before offsets are recomputed
///
/// Produced per run by the word-wrap transform; consumed by
/// [`AttributedString::from_fragments`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment<A> {
    /// Style attributes carried over from the source run
    pub attributes: A,
    /// The run's rebuilt text
    pub string: String,
}

/// Character sequence plus ordered, non-overlapping style runs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributedString<A> {
    /// The full text
    pub string: String,
    /// Style runs in ascending range order
    pub runs: Vec<Run<A>>,
}

impl<A> AttributedString<A> {
    /// Create an attributed string from text and runs
    pub fn new(string: impl Into<String>, runs: Vec<Run<A>>) -> Self {
        Self {
            string: string.into(),
            runs,
        }
    }

    /// Assemble an attributed string from ordered fragments
    ///
    /// Concatenates the fragment strings and lays the runs end to end from
    /// offset 0, recomputing `[start, end)` for each. This is the canonical
    /// assembly step the word-wrap transform delegates to.
    pub fn from_fragments(fragments: Vec<Fragment<A>>) -> Self {
        let total: usize = fragments.iter().map(|f| f.string.len()).sum();
        let mut string = String::with_capacity(total);
        let mut runs = Vec::with_capacity(fragments.len());

        for fragment in fragments {
            let start = string.len();
            string.push_str(&fragment.string);
            runs.push(Run::new(start, string.len(), fragment.attributes));
        }

        Self { string, runs }
    }

    /// Extract a run's substring
    ///
    /// Precondition: the run's range lies inside the string on character
    /// boundaries with `start <= end`. Malformed ranges are not validated
    /// here (debug builds assert; release builds panic at the slice).
    pub fn substring(&self, run: &Run<A>) -> &str {
        debug_assert!(
            run.check_bounds(&self.string).is_ok(),
            "malformed run range [{}, {}) for string of {} bytes",
            run.start,
            run.end,
            self.string.len()
        );
        &self.string[run.start..run.end]
    }
}
