//! Injected delay vs. timer resolution check.
//!
//! The leaky comparator's per-character delay is the whole signal the attack
//! reads. When that delay is not well above the clock's resolution, the
//! per-candidate means are dominated by quantization and the argmax is noise.

use serde::{Deserialize, Serialize};

use crate::comparator::TimingProfile;
use crate::constants::MIN_DELAY_TO_RESOLUTION_RATIO;

/// Warning from the resolution check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResolutionWarning {
    /// The leaky comparator injects no per-character delay at all.
    ///
    /// This is a critical warning: the only remaining signal is the
    /// sub-nanosecond cost of the comparison itself.
    NoInjectedDelay {
        /// Estimated timer resolution in nanoseconds.
        timer_resolution_ns: f64,
    },

    /// The per-character delay is within a small multiple of the timer resolution.
    DelayNearResolution {
        /// Injected delay per matched character in nanoseconds.
        per_char_delay_ns: f64,
        /// Estimated timer resolution in nanoseconds.
        timer_resolution_ns: f64,
    },
}

impl ResolutionWarning {
    /// Check if this warning indicates a critical issue.
    pub fn is_critical(&self) -> bool {
        matches!(self, ResolutionWarning::NoInjectedDelay { .. })
    }

    /// Get a human-readable description of the warning.
    pub fn description(&self) -> String {
        match self {
            ResolutionWarning::NoInjectedDelay {
                timer_resolution_ns,
            } => format!(
                "CRITICAL: the leaky comparator injects no per-character delay. \
                 With a ~{:.0}ns clock the timing gradient is unobservable and \
                 the recovered characters will be arbitrary.",
                timer_resolution_ns
            ),
            ResolutionWarning::DelayNearResolution {
                per_char_delay_ns,
                timer_resolution_ns,
            } => format!(
                "Warning: per-character delay ({:.0}ns) is less than {:.0}x the timer \
                 resolution (~{:.0}ns). Increase the delay or the trial count.",
                per_char_delay_ns, MIN_DELAY_TO_RESOLUTION_RATIO, timer_resolution_ns
            ),
        }
    }
}

/// Check that a comparator's declared delay is measurable with this timer.
///
/// Constant-time comparators declare no delay and never warn.
///
/// # Returns
///
/// A warning if the delay is missing or too close to the resolution, None otherwise.
pub fn resolution_check(
    profile: &TimingProfile,
    timer_resolution_ns: f64,
) -> Option<ResolutionWarning> {
    let TimingProfile::Leaky { per_char_delay, .. } = profile else {
        return None;
    };

    let per_char_delay_ns = per_char_delay.as_nanos() as f64;
    if per_char_delay_ns == 0.0 {
        return Some(ResolutionWarning::NoInjectedDelay {
            timer_resolution_ns,
        });
    }

    if per_char_delay_ns < timer_resolution_ns * MIN_DELAY_TO_RESOLUTION_RATIO {
        return Some(ResolutionWarning::DelayNearResolution {
            per_char_delay_ns,
            timer_resolution_ns,
        });
    }

    None
}
