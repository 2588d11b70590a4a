//! Configuration for the timing attack.

use crate::charset::Charset;
use crate::constants::{DEFAULT_PLACEHOLDER, DEFAULT_TRIALS};
use crate::error::{Error, Result};

/// Configuration options for `Attacker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timed queries per (position, candidate) (default: 500).
    ///
    /// Averaging over trials is the only noise mitigation, so this directly
    /// controls how far the leaky signal rises above scheduler jitter.
    pub trials: usize,

    /// Candidates tried at every position (default: ASCII letters and digits).
    pub charset: Charset,

    /// Filler byte for positions not yet determined (default: `_`).
    ///
    /// Must not be a charset candidate.
    pub placeholder: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            charset: Charset::alphanumeric(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl Config {
    /// Fast configuration for tests: 20 trials per candidate.
    pub fn quick() -> Self {
        Self {
            trials: 20,
            ..Self::default()
        }
    }

    /// Check the invariants the attack relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroTrials`] or [`Error::PlaceholderInCharset`].
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::ZeroTrials);
        }
        self.charset.check_placeholder(self.placeholder)
    }

    /// Total oracle queries an attack on a secret of `secret_len` bytes performs.
    pub fn total_queries(&self, secret_len: usize) -> u64 {
        secret_len as u64 * self.charset.len() as u64 * self.trials as u64
    }
}
