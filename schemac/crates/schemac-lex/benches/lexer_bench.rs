//! Lexer Benchmarks
//!
//! Measures lexer throughput on schema sources.
//! Run with: `cargo bench --package schemac-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use schemac_lex::{Lexer, SourceBuffer};

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(SourceBuffer::from(source)).count()
}

fn bench_lexer_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "<magic:u32>\n<version:u8>\n<len:uleb128>\n<body:vec(len:u8)>\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("single_field", |b| {
        b.iter(|| lexer_token_count(black_box("<len:u16>")))
    });

    group.bench_function("header", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_constants(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_constants");

    let source = "18446744073709551615 0b1010101010101010 0xDEADBEEFCAFEF00D 42 ".repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_radix", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_large_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let mut source = String::new();
    for i in 1..=1000 {
        source.push_str(&format!(
            "; record {i}\n<field{i}:type(a:i32, b:optional(1:u64, default:skip), c:vec({i}:ileb128))>\n"
        ));
    }
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("thousand_records", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_fields,
    bench_lexer_constants,
    bench_lexer_large_schema
);
criterion_main!(benches);
