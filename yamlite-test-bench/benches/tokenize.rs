extern crate yamlite_core;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use yamlite_core::{TokenKind, Tokenizer};
use yamlite_test_bench::assert_eq_tokens;
use yamlite_test_bench::consts::{SESSIONS_FLAT_TOKENS, SESSIONS_INPUT};

fn bench_flat_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-yamlite");
    group.throughput(Throughput::Bytes(SESSIONS_INPUT.as_bytes().len() as u64));
    group.bench_function("bench_flat_scan", |b| {
        b.iter(|| assert_eq_tokens(black_box(SESSIONS_INPUT), black_box(SESSIONS_FLAT_TOKENS)));
    });
    group.finish();
}

fn bench_count_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-yamlite");
    group.throughput(Throughput::Bytes(SESSIONS_INPUT.as_bytes().len() as u64));
    group.bench_function("bench_count_tokens", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::from(black_box(SESSIONS_INPUT));
            let mut count = 0usize;
            while !tokenizer.next_token().is(TokenKind::EndOfStream) {
                count += 1;
            }
            count
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().significance_level(0.01).sample_size(500).warm_up_time(Duration::from_millis(10));
    targets = bench_flat_scan, bench_count_tokens
}
criterion_main!(benches);
