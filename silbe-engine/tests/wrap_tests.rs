//! End-to-end tests for the word-wrap transform

use silbe_engine::{
    AsciiAlphabet, AttributedString, Engines, Hyphenate, Run, WordWrap, WrapConfig,
};
use std::sync::Arc;

fn single_run(text: &str) -> AttributedString<&'static str> {
    AttributedString::new(text, vec![Run::new(0, text.len(), "style-a")])
}

#[test]
fn test_default_engine_passes_text_through() {
    let attributed = single_run("hello, world!");
    let wrap = WordWrap::new(Engines::new(), WrapConfig::default()).with_alphabet(AsciiAlphabet);

    let result = wrap.apply(&attributed).unwrap();

    assert_eq!(result.attributed.string, "hello, world!");
    assert_eq!(result.syllables, vec!["hello", ",", " ", "world", "!"]);
    assert_eq!(result.attributed.runs.len(), 1);
    assert_eq!(result.attributed.runs[0].start, 0);
    assert_eq!(result.attributed.runs[0].end, 13);
    assert_eq!(result.attributed.runs[0].attributes, "style-a");
}

#[test]
fn test_custom_engine_preserves_run_text() {
    let engines = Engines::new().with_word_hyphenation(|_: &WrapConfig| {
        let syllabify = |word: &str| {
            if word == "wonderful" {
                vec!["won".to_string(), "der".to_string(), "ful".to_string()]
            } else {
                vec![word.to_string()]
            }
        };
        Ok(Arc::new(syllabify) as Arc<dyn Hyphenate>)
    });

    let attributed = single_run("a wonderful day");
    let wrap = WordWrap::new(engines, WrapConfig::default());
    let result = wrap.apply(&attributed).unwrap();

    // Concatenation preserved even though the word was split
    assert_eq!(result.attributed.string, "a wonderful day");
    assert_eq!(
        result.syllables,
        vec!["a", " ", "won", "der", "ful", " ", "day"]
    );
}

#[test]
fn test_callback_outranks_registered_engine() {
    let engines = Engines::new().with_word_hyphenation(|_: &WrapConfig| {
        panic!("factory must not be invoked when a callback is configured");
    });
    let config = WrapConfig::new()
        .with_hyphenation_callback(|word: &str| vec![word.to_string()]);

    let result = WordWrap::new(engines, config)
        .apply(&single_run("still works"))
        .unwrap();

    assert_eq!(result.attributed.string, "still works");
}

#[test]
fn test_multiple_runs_share_one_syllable_list() {
    let attributed = AttributedString::new(
        "hello world",
        vec![Run::new(0, 6, "bold"), Run::new(6, 11, "plain")],
    );

    let wrap = WordWrap::new(Engines::new(), WrapConfig::default());
    let result = wrap.apply(&attributed).unwrap();

    assert_eq!(result.attributed.string, "hello world");
    assert_eq!(result.syllables, vec!["hello", " ", "world"]);
    assert_eq!(result.attributed.runs.len(), 2);
    assert_eq!(
        (result.attributed.runs[0].start, result.attributed.runs[0].end),
        (0, 6)
    );
    assert_eq!(
        (result.attributed.runs[1].start, result.attributed.runs[1].end),
        (6, 11)
    );
    assert_eq!(result.attributed.runs[0].attributes, "bold");
    assert_eq!(result.attributed.runs[1].attributes, "plain");
}

#[test]
fn test_idempotent_with_default_engine() {
    let attributed = single_run("some plain text, punctuated!");
    let wrap = WordWrap::new(Engines::new(), WrapConfig::default());

    let once = wrap.apply(&attributed).unwrap();
    let twice = wrap.apply(&once.attributed).unwrap();

    assert_eq!(twice.attributed, once.attributed);
    assert_eq!(twice.syllables, once.syllables);
}

#[test]
fn test_syllables_follow_processing_order() {
    let engines = Engines::new().with_word_hyphenation(|_: &WrapConfig| {
        let pairs = |word: &str| {
            word.as_bytes()
                .chunks(2)
                .map(|chunk| String::from_utf8(chunk.to_vec()).unwrap())
                .collect::<Vec<_>>()
        };
        Ok(Arc::new(pairs) as Arc<dyn Hyphenate>)
    });

    let attributed = AttributedString::new(
        "abcd efgh",
        vec![Run::new(0, 4, ()), Run::new(4, 9, ())],
    );

    let result = WordWrap::new(engines, WrapConfig::default())
        .apply(&attributed)
        .unwrap();

    assert_eq!(result.attributed.string, "abcd efgh");
    assert_eq!(result.syllables, vec!["ab", "cd", " ", "ef", "gh"]);
}
