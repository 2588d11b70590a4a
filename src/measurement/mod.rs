//! Measurement infrastructure for the attack.
//!
//! This module provides:
//! - A monotonic nanosecond timer and the scoped `measure_duration` helper
//! - A collector that times repeated queries of one probe
//!
//! The clock is `std::time::Instant`. Its resolution is far finer than the
//! delays the leaky comparator injects; [`crate::preflight`] warns when that
//! stops being true.

mod collector;
mod timer;

pub use collector::{Collector, Sample};
pub use timer::{black_box, measure_duration, Timer};
