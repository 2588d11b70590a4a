//! Preflight checks run before an attack issues its first query.
//!
//! These checks never stop an attack; they only explain ahead of time why
//! its output may be meaningless.

mod resolution;

pub use resolution::{resolution_check, ResolutionWarning};

use crate::comparator::TimingProfile;
use crate::measurement::Timer;

/// Run every preflight check for `profile` measured with `timer`.
///
/// Each warning is also emitted as a `tracing` warning event.
pub fn run_all_checks(profile: &TimingProfile, timer: &Timer) -> Vec<ResolutionWarning> {
    let mut warnings = Vec::new();

    if let Some(warning) = resolution_check(profile, timer.resolution_ns()) {
        tracing::warn!(critical = warning.is_critical(), "{}", warning.description());
        warnings.push(warning);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_run_all_checks() {
        let timer = Timer::with_resolution_ns(30.0);
        let quiet = TimingProfile::Leaky {
            per_char_delay: Duration::from_micros(100),
            full_match_delay: Duration::from_millis(1),
        };
        assert!(run_all_checks(&quiet, &timer).is_empty());

        let silent = TimingProfile::Leaky {
            per_char_delay: Duration::ZERO,
            full_match_delay: Duration::ZERO,
        };
        assert_eq!(run_all_checks(&silent, &timer).len(), 1);
    }
}
