//! The oracle under attack: a comparator bound to a secret.

use std::cell::Cell;

use crate::comparator::{Comparator, TimingProfile};

/// A comparator holding a secret it never reveals.
///
/// The attacker sees only the secret's length and the answer (and latency)
/// of [`query`](Oracle::query). Every query is counted.
#[derive(Debug)]
pub struct Oracle<C> {
    comparator: C,
    secret: Vec<u8>,
    calls: Cell<u64>,
}

impl<C: Comparator> Oracle<C> {
    /// Bind `comparator` to `secret`.
    pub fn new(comparator: C, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            comparator,
            secret: secret.into(),
            calls: Cell::new(0),
        }
    }

    /// Ask whether `input` equals the secret.
    #[inline]
    pub fn query(&self, input: &[u8]) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.comparator.compare(input, &self.secret)
    }

    /// Length of the secret in bytes.
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// Number of queries answered so far.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    /// The underlying comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Timing profile declared by the comparator.
    pub fn profile(&self) -> TimingProfile {
        self.comparator.profile()
    }

    /// Name of the comparator.
    pub fn name(&self) -> &'static str {
        self.comparator.name()
    }
}
