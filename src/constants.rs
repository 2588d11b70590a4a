//! Default constants for the attack and the demonstration.

use std::time::Duration;

/// Delay injected by the leaky comparator for every matched character (100 µs).
///
/// Real per-byte comparison differences are sub-nanosecond and disappear in
/// scheduler noise; the injected delay amplifies the signal well above it.
pub const DEFAULT_PER_CHAR_DELAY: Duration = Duration::from_micros(100);

/// Extra delay applied once by the leaky comparator on an exact full match (1 ms).
pub const DEFAULT_FULL_MATCH_DELAY: Duration = Duration::from_millis(1);

/// Timed oracle queries per (position, candidate) pair.
pub const DEFAULT_TRIALS: usize = 500;

/// Timed oracle queries per comparator in the benchmark phase.
pub const DEFAULT_BENCHMARK_TRIALS: usize = 1_000;

/// Sentinel byte used for positions that have not been determined yet.
pub const DEFAULT_PLACEHOLDER: u8 = b'_';

/// Secret attacked by the demonstration binary.
pub const DEMO_SECRET: &str = "s3cr3tnavneet";

/// Near-correct guess (one character off near the end) used by the benchmark phase.
pub const DEMO_NEAR_GUESS: &str = "s3cr3tnavneat";

/// A leaky delay below this multiple of the timer resolution triggers a preflight warning.
pub const MIN_DELAY_TO_RESOLUTION_RATIO: f64 = 10.0;
