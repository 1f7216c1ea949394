//! Lexer Benchmarks
//!
//! Measures scanning throughput of the expression lexer.
//! Run with: `cargo bench --package goval-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use goval_lex::{tokenize, LexSettings, Lexer};
use goval_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source).with_emitter(&mut handler);
    // Lexer implements Iterator, so we can use it directly
    lexer.count()
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "(requests_made * requests_succeeded / 100) >= 90";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("comparison", |b| {
        b.iter(|| lexer_token_count(black_box("a > 1")))
    });

    group.bench_function("arithmetic", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        ([response time] >= 0x1F && user.Name =~ '^adm') ||
        (http_status IN (200, 201, 204) ? strlen(body) > 0 : retries ?? 3) &&
        !(mask & 0xff << 2 != 0) && 'tag' in tags && ratio ** 2 < .5
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_expression", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let settings = LexSettings::default().with_function("strlen");
    group.bench_function("tokenize_with_settings", |b| {
        b.iter(|| tokenize(black_box(source), &settings).tokens.len())
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("s == 'hello'")))
    });

    group.bench_function("long_string", |b| {
        let source = "s == 'This is a longer string that contains some text for benchmarking purposes.'";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("bracket_parameter", |b| {
        b.iter(|| lexer_token_count(black_box("[total response time in ms] > 250")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("accessor", |b| {
        b.iter(|| lexer_token_count(black_box("request.Header.ContentLength > 0")))
    });

    group.bench_function("unexported_accessor", |b| {
        b.iter(|| lexer_token_count(black_box("request.header.contentLength > 0")))
    });

    group.bench_function("unicode_identifier", |b| {
        b.iter(|| lexer_token_count(black_box("größe + ширина * 高さ")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_identifiers
);
criterion_main!(benches);
