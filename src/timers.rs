//! Phase timing for match requests.
//!
//! A [`PhaseTimer`] adds its elapsed time to a `Duration` slot when dropped,
//! so early returns through `?` are still accounted for.

use std::time::{Duration, Instant};

/// RAII timer that accumulates elapsed time into a slot on drop.
pub struct PhaseTimer<'a> {
    start: Instant,
    slot: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn new(slot: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            slot,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        *self.slot += self.start.elapsed();
    }
}

/// Wall-clock time spent in each phase of a match request.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MatchPhases {
    pub parse: Duration,
    pub index: Duration,
    pub evaluate: Duration,
}

impl MatchPhases {
    pub fn total(&self) -> Duration {
        self.parse + self.index + self.evaluate
    }
}
