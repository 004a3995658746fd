use crate::Timer;

/// The value produced by a closure executed via [`Timer::run()`], together with the ended
/// timer that measured it.
#[derive(Clone, Debug)]
#[must_use = "the measured value and its timer are only available through this type"]
pub struct Measured<R> {
    value: R,
    timer: Timer,
}

impl<R> Measured<R> {
    pub(crate) const fn new(value: R, timer: Timer) -> Self {
        Self { value, timer }
    }

    /// The value returned by the measured closure.
    #[must_use]
    pub const fn value(&self) -> &R {
        &self.value
    }

    /// The ended timer that measured the closure.
    #[must_use]
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Discards the timer, returning the value produced by the closure.
    #[must_use]
    pub fn into_value(self) -> R {
        self.value
    }

    /// Discards the value produced by the closure, returning the timer.
    #[must_use]
    pub fn into_timer(self) -> Timer {
        self.timer
    }

    /// Splits into the value produced by the closure and the timer that measured it.
    #[must_use]
    pub fn into_parts(self) -> (R, Timer) {
        (self.value, self.timer)
    }
}
