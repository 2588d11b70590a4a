//! Rendering of attack and benchmark results.

pub mod json;
pub mod terminal;

pub use json::{benchmarks_to_json, to_json, to_json_pretty, to_json_summary};
pub use terminal::{
    format_benchmark, format_phase_header, format_position_committed, format_position_started,
    format_report, format_secure_notice,
};
