use std::fmt::Debug;
use std::time::Instant;

/// A source of monotonic timestamps.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TimeSource: Debug + Send + 'static {
    fn now(&self) -> Instant;
}
