//! Word segmentation
//!
//! Splits a string into the fine-grained units the word-wrap stage feeds to
//! a hyphenation engine: maximal runs of alphabetic characters, and single
//! non-alphabetic characters. Concatenating the output reproduces the input
//! exactly; downstream stages rely on that identity.

use crate::alphabet::Alphabet;

/// Segment `text` into words
///
/// Single left-to-right scan. At the cursor, if the current character is
/// alphabetic per `alphabet`, the word extends greedily over every following
/// alphabetic character; otherwise the character is emitted on its own.
/// O(n), one pass, no backtracking.
///
/// An empty string yields an empty sequence. No emitted word is ever empty.
pub fn segment_words<'a>(text: &'a str, alphabet: &impl Alphabet) -> Vec<&'a str> {
    let mut words = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some((start, ch)) = iter.next() {
        let mut end = start + ch.len_utf8();

        if alphabet.is_alphabetic(ch) {
            while let Some(&(_, next)) = iter.peek() {
                if !alphabet.is_alphabetic(next) {
                    break;
                }
                end += next.len_utf8();
                iter.next();
            }
        }

        words.push(&text[start..end]);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{AsciiAlphabet, UnicodeAlphabet};

    #[test]
    fn test_mixed_text() {
        let words = segment_words("hello, world!", &AsciiAlphabet);
        assert_eq!(words, vec!["hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_empty_string() {
        let words = segment_words("", &UnicodeAlphabet);
        assert!(words.is_empty());
    }

    #[test]
    fn test_all_alphabetic() {
        let words = segment_words("wonderful", &UnicodeAlphabet);
        assert_eq!(words, vec!["wonderful"]);
    }

    #[test]
    fn test_all_non_alphabetic() {
        let words = segment_words("., !", &UnicodeAlphabet);
        assert_eq!(words, vec![".", ",", " ", "!"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let words = segment_words("fähig 語", &UnicodeAlphabet);
        assert_eq!(words, vec!["fähig", " ", "語"]);
        assert_eq!(words.concat(), "fähig 語");
    }

    #[test]
    fn test_classifier_controls_word_boundaries() {
        // Under an ASCII-only classifier, 'ß' splits the word
        let words = segment_words("straße", &AsciiAlphabet);
        assert_eq!(words, vec!["stra", "ß", "e"]);
    }

    #[test]
    fn test_digits_are_single_characters() {
        let words = segment_words("a1b22", &UnicodeAlphabet);
        assert_eq!(words, vec!["a", "1", "b", "2", "2"]);
    }

    #[test]
    fn test_concat_identity() {
        for text in ["", "a", "  ", "hello, world!", "a-b c_d", "日本語 text"] {
            let words = segment_words(text, &UnicodeAlphabet);
            assert_eq!(words.concat(), text, "identity broken for {text:?}");
            assert!(words.iter().all(|w| !w.is_empty()));
        }
    }
}
