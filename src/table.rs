//! Per-(position, candidate) timing storage.

use serde::{Deserialize, Serialize};

use crate::measurement::Sample;

/// Durations collected for one candidate at one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTimings {
    /// The candidate character.
    pub candidate: char,
    /// Every measured query duration in nanoseconds, in measurement order.
    pub durations_ns: Vec<u64>,
}

impl CandidateTimings {
    /// Mean duration in nanoseconds, or `None` if nothing was recorded.
    pub fn mean_ns(&self) -> Option<f64> {
        Sample::from_durations(&self.durations_ns).map(|s| s.mean_ns)
    }
}

/// All candidates probed at one position, in probe order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionTimings {
    /// Zero-based position in the secret.
    pub position: usize,
    /// Candidates in the order they were first recorded.
    pub candidates: Vec<CandidateTimings>,
}

/// Measured durations keyed by (position, candidate).
///
/// Recording order is preserved, which makes the argmax tie-break
/// deterministic: among equal means, the candidate recorded first wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingTable {
    positions: Vec<PositionTimings>,
}

impl TimingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `durations_ns` under (position, candidate).
    pub fn record(&mut self, position: usize, candidate: u8, durations_ns: &[u64]) {
        let candidate = char::from(candidate);
        let index = match self.positions.iter().position(|p| p.position == position) {
            Some(index) => index,
            None => {
                self.positions.push(PositionTimings {
                    position,
                    candidates: Vec::new(),
                });
                self.positions.len() - 1
            }
        };
        let slot = &mut self.positions[index];
        match slot.candidates.iter_mut().find(|c| c.candidate == candidate) {
            Some(entry) => entry.durations_ns.extend_from_slice(durations_ns),
            None => slot.candidates.push(CandidateTimings {
                candidate,
                durations_ns: durations_ns.to_vec(),
            }),
        }
    }

    /// Timings for `position`, if anything was recorded there.
    pub fn position(&self, position: usize) -> Option<&PositionTimings> {
        self.positions.iter().find(|p| p.position == position)
    }

    /// All recorded positions in recording order.
    pub fn positions(&self) -> &[PositionTimings] {
        &self.positions
    }

    /// Raw durations for (position, candidate).
    pub fn durations(&self, position: usize, candidate: char) -> Option<&[u64]> {
        self.position(position)?
            .candidates
            .iter()
            .find(|c| c.candidate == candidate)
            .map(|c| c.durations_ns.as_slice())
    }

    /// Mean duration for (position, candidate).
    pub fn mean_ns(&self, position: usize, candidate: char) -> Option<f64> {
        Sample::from_durations(self.durations(position, candidate)?).map(|s| s.mean_ns)
    }

    /// Mean duration of every candidate at `position`, in probe order.
    pub fn means(&self, position: usize) -> Vec<(char, f64)> {
        self.position(position)
            .map(|p| {
                p.candidates
                    .iter()
                    .filter_map(|c| c.mean_ns().map(|m| (c.candidate, m)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Candidate with the largest mean at `position`; first-seen wins ties.
    pub fn best(&self, position: usize) -> Option<(char, f64)> {
        Self::argmax(self.means(position))
    }

    /// Best and second-best candidates at `position`.
    pub fn ranked(&self, position: usize) -> (Option<(char, f64)>, Option<(char, f64)>) {
        let means = self.means(position);
        let best = Self::argmax(means.iter().copied());
        let runner_up = best.and_then(|(winner, _)| {
            Self::argmax(means.iter().copied().filter(|(c, _)| *c != winner))
        });
        (best, runner_up)
    }

    fn argmax(means: impl IntoIterator<Item = (char, f64)>) -> Option<(char, f64)> {
        let mut best: Option<(char, f64)> = None;
        for (candidate, mean) in means {
            // Strictly greater keeps the earliest candidate on ties.
            if best.map_or(true, |(_, top)| mean > top) {
                best = Some((candidate, mean));
            }
        }
        best
    }

    /// Total number of durations recorded across all keys.
    pub fn total_samples(&self) -> usize {
        self.positions
            .iter()
            .flat_map(|p| p.candidates.iter())
            .map(|c| c.durations_ns.len())
            .sum()
    }
}
