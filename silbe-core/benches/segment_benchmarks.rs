//! Performance benchmarks for the word segmenter
//!
//! Run with: cargo bench --bench segment_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use silbe_core::alphabet::{AsciiAlphabet, UnicodeAlphabet};
use silbe_core::segment::segment_words;
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "The quick brown fox jumps over the lazy dog, again and again. ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_text_sizes");

    for size in [256, 4_096, 65_536] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("unicode", size), &text, |b, text| {
            b.iter(|| segment_words(black_box(text), &UnicodeAlphabet));
        });
        group.bench_with_input(BenchmarkId::new("ascii", size), &text, |b, text| {
            b.iter(|| segment_words(black_box(text), &AsciiAlphabet));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes);
criterion_main!(benches);
