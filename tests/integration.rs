//! Boundary behavior and public API wiring.

use std::cell::Cell;
use std::time::{Duration, Instant};

use timing_attack::output::{format_report, to_json, to_json_summary};
use timing_attack::{
    attack, measure_duration, Attacker, Comparator, Config, ConstantTimeComparator, Error,
    LeakyComparator, Oracle, TimingProfile, Verdict,
};

/// Counts every comparison it is asked to make.
struct CountingComparator {
    calls: Cell<u64>,
}

impl Comparator for CountingComparator {
    fn compare(&self, input: &[u8], secret: &[u8]) -> bool {
        self.calls.set(self.calls.get() + 1);
        input == secret
    }

    fn profile(&self) -> TimingProfile {
        TimingProfile::ConstantTime
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[test]
fn empty_secret_yields_empty_guess_without_queries() {
    let comparator = CountingComparator {
        calls: Cell::new(0),
    };
    let report = attack(&comparator, b"");

    assert_eq!(report.inferred, "");
    assert_eq!(report.verdict(b""), Verdict::Recovered);
    assert_eq!(report.oracle_calls, 0);
    assert_eq!(comparator.calls.get(), 0);
}

#[test]
fn guess_length_always_matches_secret() {
    let oracle = Oracle::new(ConstantTimeComparator::new(), "longer-secret!");
    let report = Attacker::quick().trials(1).run(&oracle);
    assert_eq!(report.inferred.len(), oracle.secret_len());
    assert_eq!(report.oracle_calls, 14 * 62);
}

#[test]
fn leaky_length_mismatch_returns_without_delay() {
    let oracle = Oracle::new(
        LeakyComparator::new(Duration::from_millis(100), Duration::from_millis(100)),
        "abc",
    );
    let start = Instant::now();
    assert!(!oracle.query(b"ab"));
    assert!(!oracle.query(b"abcd"));
    assert!(start.elapsed() < Duration::from_millis(50));
}

#[test]
fn measure_duration_times_one_query() {
    let oracle = Oracle::new(
        LeakyComparator::new(Duration::from_millis(3), Duration::ZERO),
        "ab",
    );
    let elapsed = measure_duration(|| oracle.query(b"ax"));
    assert!(elapsed >= Duration::from_millis(3), "elapsed = {:?}", elapsed);
    assert_eq!(oracle.calls(), 1);
}

#[test]
fn zero_delay_leaky_comparator_is_flagged() {
    let oracle = Oracle::new(LeakyComparator::new(Duration::ZERO, Duration::ZERO), "a");
    let report = Attacker::quick().trials(1).run(&oracle);
    assert_eq!(report.preflight.len(), 1);
    assert!(report.preflight[0].is_critical());
}

#[test]
fn invalid_config_is_rejected_before_any_query() {
    let config = Config {
        trials: 0,
        ..Config::default()
    };
    assert_eq!(Attacker::with_config(config).unwrap_err(), Error::ZeroTrials);
}

#[test]
fn report_renders_and_serializes() {
    let oracle = Oracle::new(ConstantTimeComparator::new(), "k");
    let report = Attacker::quick().trials(2).run(&oracle);

    let text = format_report(&report, b"k");
    assert!(text.contains("Final inferred secret"));

    let json = to_json(&report).unwrap();
    assert!(json.contains("\"comparator\":\"constant-time\""));
    assert!(json.contains("\"oracle_calls\":124"));

    let summary = to_json_summary(&report).unwrap();
    assert!(summary.len() < json.len());
    assert!(summary.contains("\"total_samples\":124"));
    assert!(!summary.contains("durations_ns"));
}
