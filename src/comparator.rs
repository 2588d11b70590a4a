//! Comparison primitives with declared timing profiles.
//!
//! Both comparators return the same answer for every input; they differ only
//! in how long they take to give it:
//!
//! - [`LeakyComparator`] exits on the first mismatch and sleeps for every
//!   matched character, plus once more on an exact full match. Latency grows
//!   with the length of the correct prefix.
//! - [`ConstantTimeComparator`] folds every byte into the result with
//!   `subtle::ConstantTimeEq`, so latency does not depend on where or whether
//!   the inputs differ.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::constants::{DEFAULT_FULL_MATCH_DELAY, DEFAULT_PER_CHAR_DELAY};

/// Declared timing behavior of a comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingProfile {
    /// Latency grows with the number of matched leading characters.
    Leaky {
        /// Delay per matched character during the scan.
        per_char_delay: Duration,
        /// Extra delay applied once on an exact full match.
        full_match_delay: Duration,
    },
    /// Latency is independent of input content.
    ConstantTime,
}

impl TimingProfile {
    /// Whether this profile is expected to leak the matched prefix length.
    pub fn is_leaky(&self) -> bool {
        matches!(self, TimingProfile::Leaky { .. })
    }
}

/// A comparison capability the attacker can time.
///
/// `compare` must return `input == secret` for every pair, including pairs of
/// different length (which compare unequal). It must never panic.
pub trait Comparator {
    /// Compare `input` against `secret`.
    fn compare(&self, input: &[u8], secret: &[u8]) -> bool;

    /// The timing behavior this comparator declares.
    fn profile(&self) -> TimingProfile;

    /// Short human-readable name.
    fn name(&self) -> &'static str;
}

impl<C: Comparator + ?Sized> Comparator for &C {
    fn compare(&self, input: &[u8], secret: &[u8]) -> bool {
        (**self).compare(input, secret)
    }

    fn profile(&self) -> TimingProfile {
        (**self).profile()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<C: Comparator + ?Sized> Comparator for Box<C> {
    fn compare(&self, input: &[u8], secret: &[u8]) -> bool {
        (**self).compare(input, secret)
    }

    fn profile(&self) -> TimingProfile {
        (**self).profile()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Early-exit comparison with an injected two-tier delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeakyComparator {
    per_char_delay: Duration,
    full_match_delay: Duration,
}

impl LeakyComparator {
    /// Create a leaky comparator with explicit delays.
    ///
    /// `per_char_delay` is slept once per matched character during the scan;
    /// `full_match_delay` is slept once more when every character matched.
    pub fn new(per_char_delay: Duration, full_match_delay: Duration) -> Self {
        Self {
            per_char_delay,
            full_match_delay,
        }
    }

    /// Delay slept per matched character.
    pub fn per_char_delay(&self) -> Duration {
        self.per_char_delay
    }

    /// Delay slept once on an exact full match.
    pub fn full_match_delay(&self) -> Duration {
        self.full_match_delay
    }
}

impl Default for LeakyComparator {
    fn default() -> Self {
        Self::new(DEFAULT_PER_CHAR_DELAY, DEFAULT_FULL_MATCH_DELAY)
    }
}

impl Comparator for LeakyComparator {
    fn compare(&self, input: &[u8], secret: &[u8]) -> bool {
        if input.len() != secret.len() {
            return false;
        }
        for (a, b) in input.iter().zip(secret) {
            if a != b {
                return false;
            }
            std::thread::sleep(self.per_char_delay);
        }
        std::thread::sleep(self.full_match_delay);
        true
    }

    fn profile(&self) -> TimingProfile {
        TimingProfile::Leaky {
            per_char_delay: self.per_char_delay,
            full_match_delay: self.full_match_delay,
        }
    }

    fn name(&self) -> &'static str {
        "leaky"
    }
}

/// Constant-time comparison backed by `subtle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantTimeComparator;

impl ConstantTimeComparator {
    /// Create a constant-time comparator.
    pub fn new() -> Self {
        Self
    }
}

impl Comparator for ConstantTimeComparator {
    fn compare(&self, input: &[u8], secret: &[u8]) -> bool {
        // Unequal lengths yield a false Choice without inspecting contents.
        input.ct_eq(secret).into()
    }

    fn profile(&self) -> TimingProfile {
        TimingProfile::ConstantTime
    }

    fn name(&self) -> &'static str {
        "constant-time"
    }
}
