//! Data model and pure algorithms for word-wrap preprocessing
//!
//! This crate provides the building blocks consumed by the text-layout
//! pipeline's word-wrap stage:
//!
//! - An attributed-string data model: a character sequence plus ordered,
//!   non-overlapping style runs, and fragment assembly for rebuilding runs.
//! - A word segmenter that splits text into maximal alphabetic words and
//!   single non-alphabetic characters, preserving concatenation identity.
//! - The hyphenation-engine contract: any engine maps a word to an ordered
//!   syllable sequence whose concatenation reproduces the word.
//!
//! No I/O, no configuration, no orchestration. Those concerns live in
//! `silbe-engine`.
//!
//! # Example
//!
//! ```rust
//! use silbe_core::alphabet::UnicodeAlphabet;
//! use silbe_core::segment::segment_words;
//!
//! let words = segment_words("hello, world!", &UnicodeAlphabet);
//! assert_eq!(words, vec!["hello", ",", " ", "world", "!"]);
//! assert_eq!(words.concat(), "hello, world!");
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod attributed;
pub mod error;
pub mod hyphenation;
pub mod segment;

pub use alphabet::{Alphabet, AsciiAlphabet, UnicodeAlphabet};
pub use attributed::{AttributedString, Fragment, Run};
pub use error::{CoreError, Result};
pub use hyphenation::{Hyphenate, NoHyphenation, Syllables};
pub use segment::segment_words;
