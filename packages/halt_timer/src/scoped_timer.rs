use std::fmt;
use std::mem;

use tracing::trace;

use crate::pal::TimeSourceFacade;
use crate::{HaltGuard, StartMode, Timer};

/// Measures the lifetime of a scope and hands the result to a callback when the scope exits.
///
/// The owned timer is started when the `ScopedTimer` is created. When it is dropped, whichever
/// way the enclosing scope is left, the timer is ended and passed by value to the callback.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::time::Duration;
///
/// use halt_timer::ScopedTimer;
///
/// let elapsed = Cell::new(None);
///
/// {
///     let _scope = ScopedTimer::new(|timer| elapsed.set(Some(timer.runtime())));
///     let _sum: u64 = (0..10_000).sum();
/// }
///
/// assert!(elapsed.get().is_some());
/// ```
///
/// Parts of the scope can be excluded from the measurement:
///
/// ```
/// use std::thread;
/// use std::time::Duration;
///
/// use halt_timer::ScopedTimer;
///
/// let mut scope = ScopedTimer::new(|timer| {
///     assert!(timer.halt_time() >= Duration::from_millis(2));
/// });
///
/// {
///     let _halted = scope.halt_scope();
///     thread::sleep(Duration::from_millis(2));
/// }
/// ```
#[must_use = "the scope is measured until the scoped timer is dropped"]
pub struct ScopedTimer<F>
where
    F: FnOnce(Timer),
{
    timer: Timer,

    // Only `None` after the callback has been consumed in `drop()`.
    callback: Option<F>,
}

impl<F> ScopedTimer<F>
where
    F: FnOnce(Timer),
{
    /// Starts a new timer that is delivered to `callback` when the returned value is dropped.
    pub fn new(callback: F) -> Self {
        Self::with_clock(TimeSourceFacade::real(), callback)
    }

    pub(crate) fn with_clock(clock: TimeSourceFacade, callback: F) -> Self {
        Self {
            timer: Timer::with_clock(clock, StartMode::Automatic),
            callback: Some(callback),
        }
    }

    /// The running timer, for inspection before the scope ends.
    #[must_use]
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Halts the timer until the returned guard is dropped.
    ///
    /// See [`HaltGuard`] for details.
    pub fn halt_scope(&mut self) -> HaltGuard<'_> {
        self.timer.halt_scope()
    }
}

impl<F> Drop for ScopedTimer<F>
where
    F: FnOnce(Timer),
{
    fn drop(&mut self) {
        let mut timer = mem::take(&mut self.timer);

        if let Err(error) = timer.end() {
            trace!(%error, "scoped timer could not be ended");
        }

        trace!(
            runtime = ?timer.runtime(),
            halt_time = ?timer.halt_time(),
            "scoped timer completed"
        );

        if let Some(callback) = self.callback.take() {
            callback(timer);
        }
    }
}

impl<F> fmt::Debug for ScopedTimer<F>
where
    F: FnOnce(Timer),
{
    #[cfg_attr(test, mutants::skip)] // Debug output format is not part of the API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedTimer")
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
