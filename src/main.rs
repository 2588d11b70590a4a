//! Three-phase timing attack demonstration.
//!
//! 1. Attack a leaky comparator and recover the secret.
//! 2. Run the same attack against a constant-time comparator (it fails).
//! 3. Benchmark one near-correct guess against both comparators.
//!
//! Takes no arguments and always exits successfully; whether the attack
//! recovered the secret is printed, not signaled.

use timing_attack::measurement::Collector;
use timing_attack::output::{
    format_benchmark, format_phase_header, format_position_committed, format_position_started,
    format_report, format_secure_notice,
};
use timing_attack::{
    benchmark::benchmark_guess, Attacker, Comparator, ConstantTimeComparator, LeakyComparator,
    Oracle, Progress, Timer, DEFAULT_BENCHMARK_TRIALS, DEMO_NEAR_GUESS, DEMO_SECRET,
};

fn main() {
    // Diagnostics go to stderr; results go to stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let timer = Timer::new();
    let attacker = Attacker::new().timer(timer.clone());
    let secret = DEMO_SECRET.as_bytes();

    println!("{}", format_phase_header("Phase 1: Timing Attack on Weak Comparison"));
    run_phase(&attacker, LeakyComparator::default(), secret);

    println!("{}", format_phase_header("Phase 2: Secure Comparison Demonstration"));
    println!("[*] Running same attack using the constant-time comparison (should fail to extract secret)...");
    print!("{}", format_secure_notice());
    run_phase(&attacker, ConstantTimeComparator::new(), secret);

    println!("{}", format_phase_header("Benchmark: Timing Difference Demo"));
    let collector = Collector::with_timer(timer);
    let guess = DEMO_NEAR_GUESS.as_bytes();
    let results = [
        benchmark_guess(
            &Oracle::new(LeakyComparator::default(), secret),
            &collector,
            guess,
            DEFAULT_BENCHMARK_TRIALS,
        ),
        benchmark_guess(
            &Oracle::new(ConstantTimeComparator::new(), secret),
            &collector,
            guess,
            DEFAULT_BENCHMARK_TRIALS,
        ),
    ];
    print!("{}", format_benchmark(&results));
}

fn run_phase<C: Comparator>(attacker: &Attacker, comparator: C, secret: &[u8]) {
    let oracle = Oracle::new(comparator, secret);
    let report = attacker.run_with_progress(&oracle, |event| match event {
        Progress::PositionStarted { position, .. } => {
            println!("{}", format_position_started(position));
        }
        Progress::PositionCommitted(outcome) => {
            println!("{}", format_position_committed(outcome));
        }
    });
    print!("{}", format_report(&report, secret));
}
