use std::time::Instant;

use crate::pal::TimeSource;

/// Reads the operating system monotonic clock via the Rust standard library.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
