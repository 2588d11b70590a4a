//! Repeated timing of a single oracle probe.

use super::timer::Timer;

/// Summary of one batch of timed trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Number of trials timed.
    pub trials: usize,
    /// Arithmetic mean of the trial durations in nanoseconds.
    pub mean_ns: f64,
}

impl Sample {
    /// Summarize a batch of nanosecond durations.
    ///
    /// Returns `None` for an empty batch.
    pub fn from_durations(durations: &[u64]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }
        let total: u128 = durations.iter().map(|&d| d as u128).sum();
        Some(Self {
            trials: durations.len(),
            mean_ns: total as f64 / durations.len() as f64,
        })
    }
}

/// Collector for gathering repeated timing measurements of one probe.
///
/// Trials run back to back in call order; the only noise mitigation is the
/// averaging done by the caller.
#[derive(Debug, Clone)]
pub struct Collector {
    /// The timer used for measurements.
    timer: Timer,
}

impl Collector {
    /// Create a new collector with a freshly calibrated timer.
    pub fn new() -> Self {
        Self::with_timer(Timer::new())
    }

    /// Create a collector with a pre-calibrated timer.
    pub fn with_timer(timer: Timer) -> Self {
        Self { timer }
    }

    /// Get a reference to the internal timer.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Time `trials` calls of `f`, one measurement per call.
    ///
    /// # Returns
    ///
    /// The duration of every call in nanoseconds, in call order.
    pub fn collect<F, T>(&self, trials: usize, mut f: F) -> Vec<u64>
    where
        F: FnMut() -> T,
    {
        let mut durations = Vec::with_capacity(trials);
        for _ in 0..trials {
            durations.push(self.timer.measure_ns(&mut f));
        }
        durations
    }

    /// Time `trials` calls of `f` and return only their mean.
    pub fn collect_mean<F, T>(&self, trials: usize, f: F) -> Option<Sample>
    where
        F: FnMut() -> T,
    {
        Sample::from_durations(&self.collect(trials, f))
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_mean() {
        let sample = Sample::from_durations(&[100, 200, 300]).unwrap();
        assert_eq!(sample.trials, 3);
        assert!((sample.mean_ns - 200.0).abs() < 1e-9);
        assert!(Sample::from_durations(&[]).is_none());
    }

    #[test]
    fn test_collector_basic() {
        let collector = Collector::with_timer(Timer::with_resolution_ns(1.0));

        let counter = std::sync::atomic::AtomicU64::new(0);
        let durations =
            collector.collect(100, || counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed));

        assert_eq!(durations.len(), 100);
        assert_eq!(counter.load(std::sync::atomic::Ordering::Relaxed), 100);
    }

    #[test]
    fn test_collect_zero_trials() {
        let collector = Collector::with_timer(Timer::with_resolution_ns(1.0));
        assert!(collector.collect(0, || ()).is_empty());
        assert!(collector.collect_mean(0, || ()).is_none());
    }
}
