//! Performance benchmarks for markdown2html
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"# Heading

This is a paragraph with **strong** text.

- Item 1
- Item 2
- Item 3
"#;

    pub const MEDIUM: &str = r#"# Project README

This is a sample README file that demonstrates the supported features.

## Features

- Line-oriented parsing
- **Bold** spans
- Ordered and unordered lists

### Steps

1. Read the input
2. Translate it
3. Write the output

## Performance

The converter does a **single pass** over the input
and keeps only the current paragraph in memory.

## Conclusion

Thank you for reading!
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains **strong** text spread
over a few lines to exercise **paragraph** joining.

- First bullet point with **bold** text
- Second bullet point
- Third point

1. One
2. Two

Another paragraph to add some content. This helps test the parser's ability
to handle longer documents efficiently.

"#;
        section.repeat(50)
    }

    /// Many delimiters on one line, half of them unmatched
    pub fn pathological_strong() -> String {
        "**a ".repeat(2000)
    }

    /// List kind switching on every line
    pub fn pathological_lists() -> String {
        "- a\n1. b\n".repeat(1000)
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| markdown2html::to_html(black_box(samples::TINY)))
    });

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| markdown2html::to_html(black_box(samples::SMALL)))
    });

    group.throughput(Throughput::Bytes(samples::MEDIUM.len() as u64));
    group.bench_function("medium", |b| {
        b.iter(|| markdown2html::to_html(black_box(samples::MEDIUM)))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| markdown2html::to_html(black_box(&large)))
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let strong = samples::pathological_strong();
    group.throughput(Throughput::Bytes(strong.len() as u64));
    group.bench_function("strong_delimiters", |b| {
        b.iter(|| markdown2html::to_html(black_box(&strong)))
    });

    let lists = samples::pathological_lists();
    group.throughput(Throughput::Bytes(lists.len() as u64));
    group.bench_function("list_switching", |b| {
        b.iter(|| markdown2html::to_html(black_box(&lists)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::MEDIUM;
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| markdown2html::to_html(black_box(input)))
    });

    group.bench_function("with_reuse", |b| {
        let mut buffer = String::with_capacity(input.len() * 2);
        b.iter(|| {
            markdown2html::to_html_into(black_box(input), &mut buffer);
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_pathological, bench_buffer_reuse);
criterion_main!(benches);
