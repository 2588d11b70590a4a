//! Average latency of one fixed guess.
//!
//! Used to show the raw gap between comparators on a near-correct guess:
//! the leaky comparator sleeps for every matched character before the
//! mismatch, the constant-time one returns in nanoseconds.

use crate::comparator::Comparator;
use crate::measurement::{Collector, Sample};
use crate::oracle::Oracle;
use crate::result::BenchmarkResult;

/// Time `trials` queries of `guess` against `oracle` and report the mean.
pub fn benchmark_guess<C: Comparator>(
    oracle: &Oracle<C>,
    collector: &Collector,
    guess: &[u8],
    trials: usize,
) -> BenchmarkResult {
    let mean_ns = collector
        .collect_mean(trials, || oracle.query(guess))
        .map_or(0.0, |s: Sample| s.mean_ns);

    tracing::info!(
        comparator = oracle.name(),
        trials,
        mean_ns,
        "benchmarked guess"
    );

    BenchmarkResult {
        comparator: oracle.name().to_string(),
        guess: String::from_utf8_lossy(guess).into_owned(),
        trials,
        mean_ns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{ConstantTimeComparator, LeakyComparator};
    use crate::measurement::Timer;
    use std::time::Duration;

    #[test]
    fn test_leaky_near_guess_is_slower() {
        let collector = Collector::with_timer(Timer::with_resolution_ns(1.0));
        let leaky = Oracle::new(
            LeakyComparator::new(Duration::from_micros(200), Duration::from_millis(1)),
            "abcd",
        );
        let ct = Oracle::new(ConstantTimeComparator::new(), "abcd");

        let slow = benchmark_guess(&leaky, &collector, b"abcx", 10);
        let fast = benchmark_guess(&ct, &collector, b"abcx", 10);

        assert_eq!(slow.trials, 10);
        assert_eq!(slow.guess, "abcx");
        assert_eq!(leaky.calls(), 10);
        // Three matched characters at 200 µs each.
        assert!(slow.mean_ns >= 600_000.0, "leaky mean = {}", slow.mean_ns);
        assert!(fast.mean_ns < slow.mean_ns);
    }

    #[test]
    fn test_zero_trials() {
        let collector = Collector::with_timer(Timer::with_resolution_ns(1.0));
        let ct = Oracle::new(ConstantTimeComparator::new(), "k");
        let result = benchmark_guess(&ct, &collector, b"k", 0);
        assert_eq!(result.mean_ns, 0.0);
        assert_eq!(ct.calls(), 0);
    }
}
