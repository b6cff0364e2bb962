//! End-to-end scenarios over the full measure → normalize → score → rank
//! pipeline, using the deterministic doubles from `bench-test-utils`.

#![allow(clippy::unwrap_used)]

use anyhow::Result;
use bench_test_utils::{random_corpus, ConstantCipher, FailingCipher, XorStreamCipher};
use cipherbench::{
    progress_channel, run_benchmark, run_benchmark_with, BenchConfig, BenchError,
    CancelToken, CipherCapability, Evaluator, MetricRecord, Ranking, ScoreWeights, UsageProfile,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Spec scenario: two algorithms with known raw metrics; A dominates B on
/// every metric and must win overall and in every category.
#[test]
fn dominant_algorithm_wins_every_category() {
    init_tracing();
    let records = vec![
        MetricRecord {
            name: "AlgorithmA".to_string(),
            encryption_time_ms: 10.0,
            throughput_mbps: 100.0,
            avalanche_distance: 512,
            entropy_bits: 7.999,
            key_length_bits: 256,
        },
        MetricRecord {
            name: "AlgorithmB".to_string(),
            encryption_time_ms: 50.0,
            throughput_mbps: 20.0,
            avalanche_distance: 256,
            entropy_bits: 7.5,
            key_length_bits: 128,
        },
    ];
    let ranking = Ranking::new(Evaluator::new(ScoreWeights::default()).evaluate(records));

    for profile in UsageProfile::ALL {
        assert_eq!(
            ranking.winner(profile).unwrap().name(),
            "AlgorithmA",
            "profile {profile}"
        );
    }
    let sorted = ranking.sorted_by_total();
    assert_eq!(sorted.first().unwrap().name(), "AlgorithmA");
    assert!(sorted.first().unwrap().total_score() > sorted.last().unwrap().total_score());
}

/// Spec scenario: three algorithms submitted, one fails during encryption.
/// The ranking holds exactly two records and the failure is reported once.
#[test]
fn failed_algorithm_is_excluded_but_batch_continues() -> Result<()> {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> = vec![
        Box::new(XorStreamCipher::new("xor-128", 128)),
        Box::new(FailingCipher::new("broken")),
        Box::new(XorStreamCipher::new("xor-256", 256)),
    ];
    let corpus = random_corpus(100_000);
    let report = run_benchmark(&ciphers, &corpus, &BenchConfig::new())?;

    assert_eq!(report.ranking.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].algorithm, "broken");
    assert!(report.ranking.records().iter().all(|r| r.name() != "broken"));
    assert_eq!(report.summary.measured, 2);
    assert_eq!(report.summary.failed, 1);
    Ok(())
}

#[test]
fn single_participant_scores_the_midpoint() -> Result<()> {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> =
        vec![Box::new(XorStreamCipher::new("only", 128))];
    let report = run_benchmark(&ciphers, &random_corpus(10_000), &BenchConfig::new())?;

    let record = report.ranking.best_overall().unwrap();
    let scores = record.scores();
    for score in [scores.time, scores.throughput, scores.avalanche, scores.entropy, scores.key_length]
    {
        assert!((score - 5.0).abs() < f64::EPSILON, "got {score}");
    }
    Ok(())
}

#[test]
fn empty_corpus_is_rejected_before_measurement() {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> =
        vec![Box::new(XorStreamCipher::new("xor", 128))];
    let err = run_benchmark(&ciphers, &[], &BenchConfig::new()).unwrap_err();
    assert!(matches!(err, BenchError::EmptyCorpus));
}

#[test]
fn all_failures_yield_nothing_to_rank() -> Result<()> {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> =
        vec![Box::new(FailingCipher::new("a")), Box::new(FailingCipher::new("b"))];
    let report = run_benchmark(&ciphers, &random_corpus(1_000), &BenchConfig::new())?;

    assert!(report.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert!(report.ranking.best_overall().is_none());
    Ok(())
}

/// The keystream double diffuses nothing while the constant double has no
/// randomness at all; the security ranking prefers whichever concentrates
/// the diffusion/entropy scores — here the XOR double on entropy, the tie
/// policy everywhere both collapse.
#[test]
fn security_ranking_tracks_entropy_and_diffusion() -> Result<()> {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> = vec![
        Box::new(ConstantCipher::new("constant", 512)),
        Box::new(XorStreamCipher::new("xor", 128)),
    ];
    let report = run_benchmark(&ciphers, &random_corpus(65_536), &BenchConfig::new())?;

    let constant = report.ranking.records().iter().find(|r| r.name() == "constant").unwrap();
    let xor = report.ranking.records().iter().find(|r| r.name() == "xor").unwrap();

    // Random corpus through a keystream XOR stays near 8 bits/byte; the
    // constant ciphertext has exactly zero.
    assert!(xor.metrics().entropy_bits > 7.9);
    assert_eq!(constant.metrics().entropy_bits, 0.0);
    assert_eq!(xor.scores().entropy, 10.0);
    assert_eq!(constant.scores().entropy, 0.0);
    assert_eq!(constant.scores().key_length, 10.0);
    Ok(())
}

#[test]
fn progress_events_cover_every_submitted_algorithm() -> Result<()> {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> = vec![
        Box::new(XorStreamCipher::new("one", 128)),
        Box::new(FailingCipher::new("two")),
        Box::new(XorStreamCipher::new("three", 256)),
    ];
    let (tx, rx) = progress_channel();
    let report =
        run_benchmark_with(&ciphers, &random_corpus(10_000), &BenchConfig::new(), Some(&tx), None)?;
    drop(tx);

    let events: Vec<_> = rx.iter().collect();
    assert_eq!(events.len(), 3);
    assert_eq!(events.last().unwrap().completed, 3);
    assert!((events.last().unwrap().percent() - 100.0).abs() < f64::EPSILON);
    // Failures still count as completed work.
    assert_eq!(events[1].algorithm, "two");
    assert!(!report.cancelled);
    Ok(())
}

#[test]
fn pre_cancelled_run_collects_nothing_but_succeeds() -> Result<()> {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> =
        vec![Box::new(XorStreamCipher::new("xor", 128))];
    let cancel = CancelToken::new();
    cancel.cancel();
    let report =
        run_benchmark_with(&ciphers, &random_corpus(1_000), &BenchConfig::new(), None, Some(&cancel))?;
    assert!(report.cancelled);
    assert!(report.is_empty());
    assert!(report.failures.is_empty());
    Ok(())
}

#[test]
fn invalid_weights_are_rejected_up_front() {
    init_tracing();
    let config =
        BenchConfig::new().with_weights(ScoreWeights { speed: -1.0, security: 0.5, resource: 0.2 });
    let ciphers: Vec<Box<dyn CipherCapability>> =
        vec![Box::new(XorStreamCipher::new("xor", 128))];
    let err = run_benchmark(&ciphers, &random_corpus(100), &config).unwrap_err();
    assert!(matches!(err, BenchError::ConfigurationError(_)));
}

#[test]
fn json_export_reflects_the_ranking() -> Result<()> {
    init_tracing();
    let ciphers: Vec<Box<dyn CipherCapability>> = vec![
        Box::new(XorStreamCipher::new("xor-a", 128)),
        Box::new(XorStreamCipher::new("xor-b", 256)),
    ];
    let report = run_benchmark(&ciphers, &random_corpus(10_000), &BenchConfig::new())?;
    let json = cipherbench::report::ranking_to_json(&report.ranking)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value["records"].as_array().unwrap().len(), 2);
    for winner in ["overall", "speed", "security", "small_files", "large_files"] {
        assert!(value["winners"][winner].is_string());
    }
    Ok(())
}
