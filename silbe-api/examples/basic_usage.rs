//! Basic usage of the silbe word-wrap API
//!
//! Run with: cargo run --example basic_usage

use silbe_api::{AttributedString, Config, Hyphenate, Run, WordWrapper};
use silbe_engine::WrapConfig;
use std::sync::Arc;

fn main() {
    // Default configuration: no hyphenation, words pass through whole.
    let wrapper = WordWrapper::new();
    let input = AttributedString::new("hello, wonderful world!", vec![Run::new(0, 23, "body")]);
    let output = wrapper.wrap(&input).unwrap();

    println!("rebuilt text: {:?}", output.attributed.string);
    println!("syllables:    {:?}", output.syllables);

    // Register a toy hyphenation engine through the capability slot.
    let config = Config::builder()
        .word_hyphenation_engine(|_: &WrapConfig| {
            let syllabify = |word: &str| {
                if word == "wonderful" {
                    vec!["won".to_string(), "der".to_string(), "ful".to_string()]
                } else {
                    vec![word.to_string()]
                }
            };
            Ok(Arc::new(syllabify) as Arc<dyn Hyphenate>)
        })
        .build();

    let output = WordWrapper::with_config(config).wrap(&input).unwrap();
    println!("with engine:  {:?}", output.syllables);
    println!("text intact:  {:?}", output.attributed.string);
}
