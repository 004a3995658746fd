//! Platform abstraction layer for reading the monotonic clock.
//!
//! Timers never call [`std::time::Instant::now()`] directly. They read the time through
//! [`TimeSourceFacade`], which in production always dispatches to the real clock and in tests
//! may dispatch to a fake (manually advanced) or mock (expectation-checked) time source.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
#[cfg(test)]
pub(crate) use fake::*;
pub(crate) use real::*;
