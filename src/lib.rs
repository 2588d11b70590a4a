//! # timing-attack
//!
//! Recover a secret through the response latency of a naive string
//! comparison, and watch the same attack fail against a constant-time one.
//!
//! The crate is a teaching tool, not a side-channel measurement framework:
//! the leaky comparator injects an artificial sleep per matched character
//! so the signal rises far above scheduler noise, and averaging over many
//! trials is the only noise mitigation.
//!
//! - [`Comparator`] is the comparison capability under attack, with two
//!   implementations: [`LeakyComparator`] and [`ConstantTimeComparator`].
//! - [`Oracle`] binds a comparator to a secret and exposes only `query`.
//! - [`Attacker`] times every candidate at every position and commits the
//!   slowest one, producing an [`AttackReport`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use timing_attack::{attack, LeakyComparator};
//!
//! let report = attack(LeakyComparator::default(), b"s3cr3t");
//! println!("recovered {}", report.inferred);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod attacker;
mod charset;
mod comparator;
mod config;
mod constants;
mod error;
mod oracle;
mod result;
mod table;

// Functional modules
pub mod benchmark;
pub mod measurement;
pub mod output;
pub mod preflight;

// Re-exports for public API
pub use attacker::{Attacker, Progress};
pub use charset::Charset;
pub use comparator::{Comparator, ConstantTimeComparator, LeakyComparator, TimingProfile};
pub use config::Config;
pub use constants::{
    DEFAULT_BENCHMARK_TRIALS, DEFAULT_FULL_MATCH_DELAY, DEFAULT_PER_CHAR_DELAY,
    DEFAULT_PLACEHOLDER, DEFAULT_TRIALS, DEMO_NEAR_GUESS, DEMO_SECRET,
};
pub use error::{Error, Result};
pub use measurement::{measure_duration, Timer};
pub use oracle::Oracle;
pub use result::{AttackReport, BenchmarkResult, PositionOutcome, Verdict};
pub use table::{CandidateTimings, PositionTimings, TimingTable};

/// Attack `secret` through `comparator` with the default configuration.
///
/// Runs 500 timed queries per candidate over ASCII letters and digits.
/// The secret is handed to an [`Oracle`]; the attacker only sees its length
/// and the latency of each query.
pub fn attack<C: Comparator>(comparator: C, secret: &[u8]) -> AttackReport {
    let oracle = Oracle::new(comparator, secret);
    Attacker::new().run(&oracle)
}
