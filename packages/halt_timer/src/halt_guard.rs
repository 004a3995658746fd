use tracing::trace;

use crate::Timer;

/// Keeps a [`Timer`] halted for as long as the guard is alive.
///
/// The timer is halted when the guard is created and resumed when it is dropped, whichever way
/// the enclosing scope is left (normal exit, early return, `?` or panic). Use this to exclude a
/// region of code from a measurement.
///
/// The guard is meant for running timers. If the timer cannot be halted (because it is idle,
/// already halted or ended) the guard is still created and dropping it still attempts to resume
/// the timer, exactly as if [`Timer::halt()`] and [`Timer::resume()`] had been called directly.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use std::time::Duration;
///
/// use halt_timer::Timer;
///
/// let mut timer = Timer::started();
///
/// {
///     let _halted = timer.halt_scope();
///     // Not measured.
///     thread::sleep(Duration::from_millis(5));
/// }
///
/// assert!(timer.is_running());
/// assert!(timer.halt_time() >= Duration::from_millis(5));
/// ```
#[derive(Debug)]
#[must_use = "the timer is resumed as soon as the guard is dropped"]
pub struct HaltGuard<'a> {
    timer: &'a mut Timer,
}

impl<'a> HaltGuard<'a> {
    /// Halts `timer` until the returned guard is dropped.
    pub fn new(timer: &'a mut Timer) -> Self {
        if let Err(error) = timer.halt() {
            trace!(%error, "halt guard created without halting the timer");
        }

        Self { timer }
    }

    /// The guarded timer, for inspection while it is halted.
    #[must_use]
    pub fn timer(&self) -> &Timer {
        self.timer
    }
}

impl Drop for HaltGuard<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.timer.resume() {
            trace!(%error, "halt guard dropped without resuming the timer");
        }
    }
}
