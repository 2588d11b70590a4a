//! JSON serialization for attack reports.
//!
//! The demo binary prints only human-readable text; these functions are for
//! library callers that want to archive or post-process a run.

use serde::Serialize;

use crate::comparator::TimingProfile;
use crate::preflight::ResolutionWarning;
use crate::result::{AttackReport, BenchmarkResult, PositionOutcome};

/// Report without the raw per-trial durations.
#[derive(Serialize)]
struct ReportSummary<'a> {
    comparator: &'a str,
    profile: &'a TimingProfile,
    inferred: &'a str,
    positions: &'a [PositionOutcome],
    oracle_calls: u64,
    trials: usize,
    total_samples: usize,
    timer_resolution_ns: f64,
    runtime_secs: f64,
    preflight: &'a [ResolutionWarning],
}

impl<'a> From<&'a AttackReport> for ReportSummary<'a> {
    fn from(report: &'a AttackReport) -> Self {
        Self {
            comparator: &report.comparator,
            profile: &report.profile,
            inferred: &report.inferred,
            positions: &report.positions,
            oracle_calls: report.oracle_calls,
            trials: report.trials,
            total_samples: report.table.total_samples(),
            timer_resolution_ns: report.timer_resolution_ns,
            runtime_secs: report.runtime_secs,
            preflight: &report.preflight,
        }
    }
}

/// Serialize an AttackReport to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for AttackReport).
pub fn to_json(report: &AttackReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize an AttackReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for AttackReport).
pub fn to_json_pretty(report: &AttackReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Serialize an AttackReport without its timing table.
///
/// A full report for the demo secret carries hundreds of thousands of
/// durations; the summary keeps the per-position decisions and a sample count.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_summary(report: &AttackReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ReportSummary::from(report))
}

/// Serialize benchmark results as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn benchmarks_to_json(results: &[BenchmarkResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string(results)
}
