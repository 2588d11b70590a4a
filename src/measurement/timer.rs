//! Monotonic high-resolution timing.
//!
//! All measurements use `std::time::Instant`, which is monotonic and is not
//! affected by wall-clock adjustments. Resolution is estimated empirically
//! at construction so callers can check that the signal they want to observe
//! sits well above the clock's granularity.

use std::hint::black_box as std_black_box;
use std::time::{Duration, Instant};

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Use this to wrap function calls being measured to prevent the compiler
/// from optimizing away the computation or reordering it relative to timing calls.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Time a single call of `f`.
///
/// The elapsed time is captured after `f` returns; `f` cannot fail, so every
/// call yields a duration.
#[inline]
pub fn measure_duration<F, T>(f: F) -> Duration
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    black_box(f());
    start.elapsed()
}

/// Empirically measure clock resolution by finding the minimum non-zero difference.
fn measure_timer_resolution() -> f64 {
    let mut min_diff = u128::MAX;

    // Take multiple measurements to find the minimum tick
    for _ in 0..1000 {
        let t1 = Instant::now();
        let mut t2 = Instant::now();
        // Spin until the clock advances so a zero reading is never recorded.
        let mut spins = 0;
        while t2 == t1 && spins < 10_000 {
            t2 = Instant::now();
            spins += 1;
        }
        let diff = t2.duration_since(t1).as_nanos();
        if diff > 0 && diff < min_diff {
            min_diff = diff;
        }
    }

    if min_diff == u128::MAX {
        1.0 // Fallback
    } else {
        min_diff as f64
    }
}

/// High-level timer for measuring oracle queries.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Estimated timer resolution in nanoseconds.
    resolution_ns: f64,
}

impl Timer {
    /// Create a new timer, estimating clock resolution.
    pub fn new() -> Self {
        Self {
            resolution_ns: measure_timer_resolution(),
        }
    }

    /// Create a timer with a known resolution.
    ///
    /// Useful for testing or when calibration has already been done.
    pub fn with_resolution_ns(resolution_ns: f64) -> Self {
        Self { resolution_ns }
    }

    /// Get the estimated timer resolution in nanoseconds.
    ///
    /// Typically tens of nanoseconds or less on Linux and macOS.
    pub fn resolution_ns(&self) -> f64 {
        self.resolution_ns
    }

    /// Measure the execution time of a function.
    #[inline]
    pub fn measure<F, T>(&self, f: F) -> Duration
    where
        F: FnOnce() -> T,
    {
        measure_duration(f)
    }

    /// Measure the execution time of a function in nanoseconds.
    #[inline]
    pub fn measure_ns<F, T>(&self, f: F) -> u64
    where
        F: FnOnce() -> T,
    {
        let elapsed = self.measure(f).as_nanos();
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
