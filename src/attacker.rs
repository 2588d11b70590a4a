//! The timing-attack driver.
//!
//! The attacker recovers a secret one position at a time. At position `p`
//! every candidate `c` is placed after the committed prefix, the rest of the
//! probe is filled with the placeholder, and the probe is queried `trials`
//! times. Against an early-exit comparator the correct `c` keeps the scan
//! going one character further (or, at the last position, triggers the
//! full-match delay), so it shows the largest mean latency. That candidate is
//! committed and never revisited.
//!
//! Against a constant-time comparator the means are indistinguishable and
//! the committed characters are arbitrary. That is a valid outcome, not an
//! error; compare [`AttackReport::inferred`] with the secret to judge it.

use std::time::Instant;

use crate::comparator::Comparator;
use crate::config::Config;
use crate::error::Result;
use crate::measurement::{Collector, Timer};
use crate::oracle::Oracle;
use crate::preflight::run_all_checks;
use crate::result::{AttackReport, PositionOutcome};
use crate::table::TimingTable;

/// Progress events emitted while an attack runs.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Candidates are about to be probed at `position`.
    PositionStarted {
        /// Zero-based position.
        position: usize,
        /// Length of the secret.
        total: usize,
    },
    /// A candidate has been committed.
    PositionCommitted(&'a PositionOutcome),
}

/// Timing-attack driver.
///
/// # Example
///
/// ```ignore
/// use timing_attack::{Attacker, LeakyComparator, Oracle};
///
/// let oracle = Oracle::new(LeakyComparator::default(), "s3cr3t");
/// let report = Attacker::new().trials(200).run(&oracle);
/// println!("recovered: {}", report.inferred);
/// ```
#[derive(Debug, Clone)]
pub struct Attacker {
    config: Config,
    timer: Option<Timer>,
}

impl Default for Attacker {
    fn default() -> Self {
        Self::new()
    }
}

impl Attacker {
    /// Create with default configuration (500 trials, alphanumeric charset).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            timer: None,
        }
    }

    /// Create with fast configuration for testing (20 trials).
    pub fn quick() -> Self {
        Self {
            config: Config::quick(),
            timer: None,
        }
    }

    /// Create from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has zero trials or a placeholder
    /// that is also a charset candidate.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            timer: None,
        })
    }

    /// Set timed queries per candidate (clamped to at least 1).
    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials.max(1);
        self
    }

    /// Use a pre-calibrated timer instead of calibrating one per run.
    pub fn timer(mut self, timer: Timer) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the attack silently.
    pub fn run<C: Comparator>(&self, oracle: &Oracle<C>) -> AttackReport {
        self.run_with_progress(oracle, |_| {})
    }

    /// Run the attack, reporting each position to `progress`.
    pub fn run_with_progress<C, P>(&self, oracle: &Oracle<C>, mut progress: P) -> AttackReport
    where
        C: Comparator,
        P: FnMut(Progress<'_>),
    {
        let start_time = Instant::now();
        let timer = self.timer.clone().unwrap_or_default();
        let timer_resolution_ns = timer.resolution_ns();
        let profile = oracle.profile();
        let preflight = run_all_checks(&profile, &timer);
        let collector = Collector::with_timer(timer);

        let trials = self.config.trials;
        let candidates = self.config.charset.candidates();
        let secret_len = oracle.secret_len();
        let calls_before = oracle.calls();

        tracing::info!(
            comparator = oracle.name(),
            secret_len,
            candidates = candidates.len(),
            trials,
            total_queries = self.config.total_queries(secret_len),
            "starting timing attack"
        );

        let mut guess = vec![self.config.placeholder; secret_len];
        let mut table = TimingTable::new();
        let mut positions = Vec::with_capacity(secret_len);

        for position in 0..secret_len {
            progress(Progress::PositionStarted {
                position,
                total: secret_len,
            });

            for &candidate in candidates {
                guess[position] = candidate;
                let durations = collector.collect(trials, || oracle.query(&guess));
                table.record(position, candidate, &durations);

                tracing::debug!(
                    position,
                    candidate = %char::from(candidate),
                    mean_ns = table.mean_ns(position, char::from(candidate)),
                    "probed candidate"
                );
            }

            let (best, runner_up) = table.ranked(position);
            // Charset::new rejects empty candidate sets.
            let (chosen, mean_ns) = best.expect("validated charset is non-empty");
            guess[position] = chosen as u8;

            let outcome = PositionOutcome {
                position,
                chosen,
                mean_ns,
                runner_up,
            };
            tracing::info!(
                position,
                chosen = %chosen,
                mean_ns,
                margin_ns = outcome.margin_ns(),
                "committed position"
            );
            progress(Progress::PositionCommitted(&outcome));
            positions.push(outcome);
        }

        let inferred: String = guess.iter().map(|&b| char::from(b)).collect();
        let oracle_calls = oracle.calls() - calls_before;
        let runtime_secs = start_time.elapsed().as_secs_f64();

        tracing::info!(
            comparator = oracle.name(),
            inferred = %inferred,
            oracle_calls,
            runtime_secs,
            "timing attack finished"
        );

        AttackReport {
            comparator: oracle.name().to_string(),
            profile,
            inferred,
            positions,
            table,
            oracle_calls,
            trials,
            timer_resolution_ns,
            runtime_secs,
            preflight,
        }
    }
}
