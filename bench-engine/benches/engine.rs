//! Criterion benchmarks for the analysis probes and the evaluation
//! pipeline.
//!
//! These measure the engine's own overhead — the probes and the
//! normalization pass — not any cipher; the cipher double is a fixed-cost
//! keystream XOR.

#![allow(clippy::unwrap_used)]

use bench_core::{BenchConfig, MetricRecord, ScoreWeights};
use bench_engine::{analysis, BenchmarkRunner, Evaluator, Ranking};
use bench_test_utils::{random_corpus, XorStreamCipher};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for size in &[1_024usize, 65_536, 1_048_576] {
        let a = random_corpus(*size);
        let b = random_corpus(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("hamming_distance", size), size, |bench, _| {
            bench.iter(|| analysis::hamming_distance(black_box(&a), black_box(&b)));
        });
        group.bench_with_input(BenchmarkId::new("shannon_entropy", size), size, |bench, _| {
            bench.iter(|| analysis::shannon_entropy(black_box(&a)));
        });
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for count in &[2usize, 8, 64] {
        let records: Vec<MetricRecord> = (0..*count)
            .map(|i| MetricRecord {
                name: format!("algo-{i}"),
                encryption_time_ms: 10.0 + i as f64,
                throughput_mbps: 100.0 - i as f64,
                avalanche_distance: 256 + i as u64,
                entropy_bits: 7.0 + (i as f64 / 100.0),
                key_length_bits: 128 + i as u32,
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |bench, _| {
            let evaluator = Evaluator::new(ScoreWeights::default());
            bench.iter(|| {
                let scored = evaluator.evaluate(black_box(records.clone()));
                let ranking = Ranking::new(scored);
                black_box(ranking.best_overall().map(|r| r.total_score()))
            });
        });
    }

    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let corpus = random_corpus(65_536);
    let runner = BenchmarkRunner::new(BenchConfig::new());
    let cipher = XorStreamCipher::new("xor-128", 128);

    c.bench_function("measure_xor_64k", |bench| {
        bench.iter(|| runner.measure(black_box(&cipher), black_box(&corpus)).unwrap());
    });
}

criterion_group!(benches, bench_analysis, bench_evaluation, bench_measure);
criterion_main!(benches);
