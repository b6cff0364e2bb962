//! Rendering of benchmark results.
//!
//! Every helper writes through an explicit [`ReportSink`] collaborator, so
//! any presentation layer — console, file, test buffer — consumes the same
//! rendered output and the engine holds no global writer state.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::io::Write;

use bench_core::{BenchError, ReportSink, Result, ScoredRecord, UsageProfile};
use serde::Serialize;

use crate::rank::Ranking;
use crate::runner::MeasurementFailure;

/// Number of corpus/ciphertext bytes shown by [`write_preview`].
pub const PREVIEW_BYTES: usize = 50;

/// Sink writing each line to an [`io::Write`](std::io::Write) destination.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwraps the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.inner, "{line}")
    }
}

/// Sink collecting lines in memory; used by tests and embedding code that
/// post-processes the rendered output.
#[derive(Debug, Default)]
pub struct VecSink {
    lines: Vec<String>,
}

impl VecSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected lines, in emission order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl ReportSink for VecSink {
    fn emit(&mut self, line: &str) -> std::io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Writes the raw-metric comparison table.
///
/// # Errors
/// Propagates sink I/O errors.
pub fn write_comparison(sink: &mut dyn ReportSink, ranking: &Ranking) -> Result<()> {
    sink.emit("===================================================")?;
    sink.emit("           ALGORITHM COMPARISON RESULTS           ")?;
    sink.emit("===================================================")?;
    sink.emit(&format!(
        "{:<15} {:>14} {:>14} {:>12} {:>10} {:>12}",
        "Algorithm", "Time (ms)", "MB/s", "Avalanche", "Entropy", "Key (bits)"
    ))?;
    for record in ranking.sorted_by_total() {
        let m = record.metrics();
        sink.emit(&format!(
            "{:<15} {:>14.2} {:>14.2} {:>12} {:>10.4} {:>12}",
            m.name,
            m.encryption_time_ms,
            m.throughput_mbps,
            m.avalanche_distance,
            m.entropy_bits,
            m.key_length_bits
        ))?;
    }
    Ok(())
}

/// Writes the normalized-score table (0-10 per metric plus the weighted
/// total), sorted descending by total score.
///
/// # Errors
/// Propagates sink I/O errors.
pub fn write_scores(sink: &mut dyn ReportSink, ranking: &Ranking) -> Result<()> {
    sink.emit("===================================================")?;
    sink.emit("              ALGORITHM SCORES (0-10)             ")?;
    sink.emit("===================================================")?;
    sink.emit(&format!(
        "{:<15} {:>8} {:>10} {:>10} {:>8} {:>8} {:>8}",
        "Algorithm", "Time", "Thruput", "Avalanche", "Entropy", "Key", "Total"
    ))?;
    for record in ranking.sorted_by_total() {
        let s = record.scores();
        sink.emit(&format!(
            "{:<15} {:>8.2} {:>10.2} {:>10.2} {:>8.2} {:>8.2} {:>8.2}",
            record.name(),
            s.time,
            s.throughput,
            s.avalanche,
            s.entropy,
            s.key_length,
            record.total_score()
        ))?;
    }
    Ok(())
}

/// Writes the per-profile recommendations.
///
/// # Errors
/// Propagates sink I/O errors.
pub fn write_recommendations(sink: &mut dyn ReportSink, ranking: &Ranking) -> Result<()> {
    sink.emit("===================================================")?;
    sink.emit("               RECOMMENDATIONS                    ")?;
    sink.emit("===================================================")?;
    if ranking.is_empty() {
        sink.emit("Nothing to rank: no algorithm survived measurement.")?;
        return Ok(());
    }
    for profile in UsageProfile::ALL {
        if let Some(winner) = ranking.winner(profile) {
            let line = match profile {
                UsageProfile::Overall => format!(
                    "Best {}: {} (score: {:.2})",
                    profile,
                    winner.name(),
                    winner.total_score()
                ),
                _ => format!("Best for {}: {}", profile, winner.name()),
            };
            sink.emit(&line)?;
        }
    }
    Ok(())
}

/// Writes the failures recorded during the run, one line each.
///
/// # Errors
/// Propagates sink I/O errors.
pub fn write_failures(sink: &mut dyn ReportSink, failures: &[MeasurementFailure]) -> Result<()> {
    for failure in failures {
        sink.emit(&format!("EXCLUDED {}: {}", failure.algorithm, failure.error))?;
    }
    Ok(())
}

/// Writes a hex/ASCII preview of plaintext vs ciphertext.
///
/// Shows up to [`PREVIEW_BYTES`] of each buffer, grouped every 8 bytes,
/// with `.` standing in for non-printable characters.
///
/// # Errors
/// Propagates sink I/O errors.
pub fn write_preview(
    sink: &mut dyn ReportSink,
    algorithm: &str,
    original: &[u8],
    encrypted: &[u8],
) -> Result<()> {
    sink.emit(&format!("=== Data samples for {algorithm} ==="))?;
    sink.emit(&format!("Original data (first {} bytes):", original.len().min(PREVIEW_BYTES)))?;
    emit_hex_and_text(sink, original)?;
    sink.emit(&format!("Encrypted data (first {} bytes):", encrypted.len().min(PREVIEW_BYTES)))?;
    emit_hex_and_text(sink, encrypted)?;
    Ok(())
}

fn emit_hex_and_text(sink: &mut dyn ReportSink, data: &[u8]) -> Result<()> {
    let mut hex_view = String::new();
    let mut text_view = String::new();

    for (index, &byte) in data.iter().take(PREVIEW_BYTES).enumerate() {
        hex_view.push_str(&format!("{byte:02X} "));
        if (32..127).contains(&byte) {
            text_view.push(char::from(byte));
        } else {
            text_view.push('.');
        }
        if (index + 1) % 8 == 0 {
            hex_view.push(' ');
            text_view.push(' ');
        }
    }

    sink.emit(&format!("HEX: {hex_view}"))?;
    sink.emit(&format!("TXT: {text_view}"))?;
    Ok(())
}

#[derive(Serialize)]
struct JsonWinners<'a> {
    overall: Option<&'a str>,
    speed: Option<&'a str>,
    security: Option<&'a str>,
    small_files: Option<&'a str>,
    large_files: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    records: Vec<&'a ScoredRecord>,
    winners: JsonWinners<'a>,
}

/// Serializes the ranking (records sorted by total score plus the winner
/// names) to pretty-printed JSON for downstream tooling.
///
/// # Errors
/// Returns [`BenchError::SerializationError`] when encoding fails.
pub fn ranking_to_json(ranking: &Ranking) -> Result<String> {
    let report = JsonReport {
        records: ranking.sorted_by_total(),
        winners: JsonWinners {
            overall: ranking.best_overall().map(ScoredRecord::name),
            speed: ranking.best_for_speed().map(ScoredRecord::name),
            security: ranking.best_for_security().map(ScoredRecord::name),
            small_files: ranking.best_for_small_files().map(ScoredRecord::name),
            large_files: ranking.best_for_large_files().map(ScoredRecord::name),
        },
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| BenchError::SerializationError(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use bench_core::{MetricRecord, NormalizedScores};

    fn ranking() -> Ranking {
        let make = |name: &str, total: f64| {
            ScoredRecord::new(
                MetricRecord {
                    name: name.to_string(),
                    encryption_time_ms: 10.0,
                    throughput_mbps: 100.0,
                    avalanche_distance: 512,
                    entropy_bits: 7.99,
                    key_length_bits: 256,
                },
                NormalizedScores {
                    time: total,
                    throughput: total,
                    avalanche: total,
                    entropy: total,
                    key_length: total,
                    resource_usage: None,
                },
                total,
            )
        };
        Ranking::new(vec![make("AES", 8.0), make("DES", 2.0)])
    }

    #[test]
    fn comparison_table_lists_every_record() {
        let mut sink = VecSink::new();
        write_comparison(&mut sink, &ranking()).unwrap();
        let body = sink.lines().join("\n");
        assert!(body.contains("AES"));
        assert!(body.contains("DES"));
        assert!(body.contains("Avalanche"));
    }

    #[test]
    fn scores_table_sorts_best_first() {
        let mut sink = VecSink::new();
        write_scores(&mut sink, &ranking()).unwrap();
        let aes = sink.lines().iter().position(|l| l.contains("AES")).unwrap();
        let des = sink.lines().iter().position(|l| l.contains("DES")).unwrap();
        assert!(aes < des);
    }

    #[test]
    fn recommendations_name_all_five_profiles() {
        let mut sink = VecSink::new();
        write_recommendations(&mut sink, &ranking()).unwrap();
        let body = sink.lines().join("\n");
        assert!(body.contains("Best Overall: AES"));
        assert!(body.contains("Best for Speed: AES"));
        assert!(body.contains("Best for Security: AES"));
        assert!(body.contains("Best for Small Files: AES"));
        assert!(body.contains("Best for Large Files: AES"));
    }

    #[test]
    fn empty_ranking_renders_nothing_to_rank() {
        let mut sink = VecSink::new();
        write_recommendations(&mut sink, &Ranking::new(Vec::new())).unwrap();
        assert!(sink.lines().join("\n").contains("Nothing to rank"));
    }

    #[test]
    fn preview_renders_hex_and_placeholder_text() {
        let mut sink = VecSink::new();
        write_preview(&mut sink, "AES", b"Hello\x00World", &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        let body = sink.lines().join("\n");
        assert!(body.contains("48 65 6C 6C 6F"), "hex of 'Hello': {body}");
        assert!(body.contains("Hello.World"));
        assert!(body.contains("DE AD BE EF"));
    }

    #[test]
    fn preview_truncates_to_fifty_bytes() {
        let mut sink = VecSink::new();
        let long = vec![b'A'; 200];
        write_preview(&mut sink, "X", &long, &long).unwrap();
        let hex_line = sink.lines().iter().find(|l| l.starts_with("HEX:")).unwrap();
        assert_eq!(hex_line.matches("41").count(), PREVIEW_BYTES);
    }

    #[test]
    fn json_export_includes_winners() {
        let json = ranking_to_json(&ranking()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["winners"]["overall"], "AES");
        assert_eq!(value["records"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn writer_sink_appends_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit("one").unwrap();
        sink.emit("two").unwrap();
        let bytes = sink.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), "one\ntwo\n");
    }
}
