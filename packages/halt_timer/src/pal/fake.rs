//! Fake time source for deterministic tests.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::TimeSource;

const ERR_POISONED_LOCK: &str = "FakeTimeSource state lock should not be poisoned";

/// A time source whose clock only moves when a test tells it to.
///
/// Clones share the same underlying instant, so a test can keep one clone to drive time forward
/// (or backward, to simulate clock anomalies) while a timer holds another.
#[derive(Clone, Debug)]
pub(crate) struct FakeTimeSource {
    now: Arc<Mutex<Instant>>,
}

impl FakeTimeSource {
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `duration`, affecting all clones.
    pub(crate) fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().expect(ERR_POISONED_LOCK);
        *now = now
            .checked_add(duration)
            .expect("fake clock advanced beyond the range of Instant");
    }

    /// Moves the clock backward by `duration`, affecting all clones.
    pub(crate) fn rewind(&self, duration: Duration) {
        let mut now = self.now.lock().expect(ERR_POISONED_LOCK);
        *now = now
            .checked_sub(duration)
            .expect("fake clock rewound beyond the range of Instant");
    }
}

impl TimeSource for FakeTimeSource {
    fn now(&self) -> Instant {
        *self.now.lock().expect(ERR_POISONED_LOCK)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn time_stands_still_until_advanced() {
        let source = FakeTimeSource::new();

        assert_eq!(source.now(), source.now());
    }

    #[test]
    fn advance_and_rewind_are_shared_between_clones() {
        let source = FakeTimeSource::new();
        let other = source.clone();
        let origin = source.now();

        source.advance(Duration::from_millis(10));
        assert_eq!(
            other.now().saturating_duration_since(origin),
            Duration::from_millis(10)
        );

        other.rewind(Duration::from_millis(4));
        assert_eq!(
            source.now().saturating_duration_since(origin),
            Duration::from_millis(6)
        );
    }
}
