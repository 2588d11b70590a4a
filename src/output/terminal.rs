//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{AttackReport, BenchmarkResult, PositionOutcome, Verdict};

/// Banner announcing a demonstration phase.
pub fn format_phase_header(title: &str) -> String {
    format!("\n--- {} ---", title.bold())
}

/// Notice printed before attacking a constant-time comparator.
pub fn format_secure_notice() -> String {
    format!(
        "\n{} Secure comparison enabled. Timing attack should fail.\n",
        "[!]".yellow().bold()
    )
}

/// Line printed when probing starts at `position`.
pub fn format_position_started(position: usize) -> String {
    format!("\n{} Guessing character at position {}", "[+]".cyan(), position)
}

/// Line printed when a candidate is committed.
pub fn format_position_committed(outcome: &PositionOutcome) -> String {
    let mut line = format!(
        "{} Best guess at position {}: '{}' with avg time {:.2} ns",
        "[\u{2713}]".green(),
        outcome.position,
        outcome.chosen,
        outcome.mean_ns
    );
    if let Some((runner_up, mean)) = outcome.runner_up {
        line.push_str(&format!(
            " (runner-up '{}' at {:.2} ns)",
            runner_up, mean
        ));
    }
    line
}

/// Summary of a finished attack, including the diagnostic verdict.
pub fn format_report(report: &AttackReport, secret: &[u8]) -> String {
    let mut output = String::new();

    for warning in &report.preflight {
        let text = warning.description();
        if warning.is_critical() {
            output.push_str(&format!("{}\n", text.red()));
        } else {
            output.push_str(&format!("{}\n", text.yellow()));
        }
    }

    output.push_str(&format!(
        "\n{} Final inferred secret: {}\n",
        "[*]".cyan(),
        report.inferred.bold()
    ));

    match report.verdict(secret) {
        Verdict::Recovered => {
            output.push_str(&format!("{}\n", "[\u{2713}] Correct!".green().bold()));
        }
        Verdict::Incorrect => {
            output.push_str(&format!("{}\n", "[\u{2717}] Incorrect".red().bold()));
        }
    }

    output.push_str(&format!(
        "    {} of {} positions correct, {} oracle queries ({} per candidate), {:.1}s\n",
        report.correct_prefix_len(secret),
        secret.len(),
        report.oracle_calls,
        report.trials,
        report.runtime_secs
    ));

    output
}

/// Side-by-side average latencies from the benchmark phase.
pub fn format_benchmark(results: &[BenchmarkResult]) -> String {
    let width = results
        .iter()
        .map(|r| r.comparator.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for result in results {
        output.push_str(&format!(
            "{} Avg time ({}):{:pad$} {:.2} ns\n",
            "[*]".cyan(),
            result.comparator,
            "",
            result.mean_ns,
            pad = width - result.comparator.len() + 2
        ));
    }
    output
}
