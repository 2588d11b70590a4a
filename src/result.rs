//! Attack and benchmark result types.

use serde::{Deserialize, Serialize};

use crate::comparator::TimingProfile;
use crate::preflight::ResolutionWarning;
use crate::table::TimingTable;

/// Decision made at one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionOutcome {
    /// Zero-based position in the secret.
    pub position: usize,
    /// Candidate committed for this position.
    pub chosen: char,
    /// Mean query duration of the committed candidate in nanoseconds.
    pub mean_ns: f64,
    /// Second-slowest candidate and its mean, if the charset has more than one.
    pub runner_up: Option<(char, f64)>,
}

impl PositionOutcome {
    /// Gap between the committed candidate and the runner-up in nanoseconds.
    pub fn margin_ns(&self) -> Option<f64> {
        self.runner_up.map(|(_, mean)| self.mean_ns - mean)
    }
}

/// Complete result of one attack run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackReport {
    /// Name of the comparator that was attacked.
    pub comparator: String,

    /// Timing profile the comparator declared.
    pub profile: TimingProfile,

    /// Recovered string, one committed candidate per position.
    pub inferred: String,

    /// Per-position decisions, in position order.
    pub positions: Vec<PositionOutcome>,

    /// Every measured duration, keyed by (position, candidate).
    pub table: TimingTable,

    /// Oracle queries issued during the run.
    pub oracle_calls: u64,

    /// Timed queries per candidate.
    pub trials: usize,

    /// Estimated clock resolution in nanoseconds.
    pub timer_resolution_ns: f64,

    /// Wall-clock duration of the run in seconds.
    pub runtime_secs: f64,

    /// Warnings raised before the run started.
    pub preflight: Vec<ResolutionWarning>,
}

impl AttackReport {
    /// Compare the recovered string against the real secret.
    ///
    /// This is diagnostic only; the attack never consults the secret.
    pub fn verdict(&self, secret: &[u8]) -> Verdict {
        if self.inferred.as_bytes() == secret {
            Verdict::Recovered
        } else {
            Verdict::Incorrect
        }
    }

    /// Number of leading positions that match `secret`.
    pub fn correct_prefix_len(&self, secret: &[u8]) -> usize {
        self.inferred
            .bytes()
            .zip(secret)
            .take_while(|(a, b)| a == *b)
            .count()
    }
}

/// Whether an attack recovered the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The recovered string equals the secret.
    Recovered,
    /// The recovered string differs from the secret.
    Incorrect,
}

impl Verdict {
    /// Whether the secret was recovered.
    pub fn is_recovered(&self) -> bool {
        matches!(self, Verdict::Recovered)
    }
}

/// Average latency of one fixed guess against one comparator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the comparator that was timed.
    pub comparator: String,
    /// The guess that was submitted.
    pub guess: String,
    /// Number of timed queries.
    pub trials: usize,
    /// Mean query duration in nanoseconds (0.0 when `trials` is zero).
    pub mean_ns: f64,
}
