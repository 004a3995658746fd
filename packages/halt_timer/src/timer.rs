use std::time::{Duration, Instant};

use tracing::trace;

use crate::pal::{TimeSource, TimeSourceFacade};
use crate::{
    HaltGuard, Measured, Microseconds, Milliseconds, StartMode, State, TimeUnit, Transition,
    TransitionError,
};

/// Where the timer is in its lifecycle, together with the timestamps that are meaningful there.
#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle,
    Running { started: Instant },
    Halted { started: Instant, halted: Instant },
    Ended { started: Instant, ended: Instant },
}

/// Measures elapsed wall-clock time, optionally excluding periods during which it is halted.
///
/// A timer is a small state machine over the states described by [`State`]:
///
/// * [`start()`][Self::start] moves an idle timer to running.
/// * [`halt()`][Self::halt] moves a running timer to halted.
/// * [`resume()`][Self::resume] moves a halted timer back to running, adding the time spent
///   halted to [`halt_time()`][Self::halt_time].
/// * [`end()`][Self::end] moves a running or halted timer to ended, after which its runtime no
///   longer changes.
/// * [`reset()`][Self::reset] returns a timer in any state to idle (or straight to running).
///
/// Transitions that are not legal in the current state are rejected with a [`TransitionError`]
/// and leave the timer untouched.
///
/// Time is read from the operating system monotonic clock.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use std::time::Duration;
///
/// use halt_timer::{StartMode, Timer};
///
/// let mut timer = Timer::new(StartMode::Automatic);
/// thread::sleep(Duration::from_millis(5));
///
/// // Time spent halted does not count toward the runtime.
/// timer.halt().unwrap();
/// thread::sleep(Duration::from_millis(5));
/// timer.resume().unwrap();
///
/// timer.end().unwrap();
///
/// assert!(timer.has_ended());
/// assert!(timer.runtime() >= Duration::from_millis(5));
/// assert!(timer.halt_time() >= Duration::from_millis(5));
/// ```
#[derive(Clone, Debug)]
pub struct Timer {
    phase: Phase,

    // Sum of all closed halt intervals. An open interval is only folded in on resume.
    halt_time: Duration,

    clock: TimeSourceFacade,
}

impl Timer {
    /// Creates a new timer, starting it immediately if `mode` is [`StartMode::Automatic`].
    #[must_use]
    pub fn new(mode: StartMode) -> Self {
        Self::with_clock(TimeSourceFacade::real(), mode)
    }

    /// Creates a new timer that is already running.
    ///
    /// Shorthand for `Timer::new(StartMode::Automatic)`.
    #[must_use]
    pub fn started() -> Self {
        Self::new(StartMode::Automatic)
    }

    #[must_use]
    pub(crate) fn with_clock(clock: TimeSourceFacade, mode: StartMode) -> Self {
        let mut timer = Self {
            phase: Phase::Idle,
            halt_time: Duration::ZERO,
            clock,
        };

        if mode == StartMode::Automatic {
            timer.begin();
        }

        timer
    }

    /// Starts measuring.
    ///
    /// # Errors
    ///
    /// Fails if the timer has already been started. Use [`reset()`][Self::reset] to reuse a
    /// timer.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        match self.phase {
            Phase::Idle => {
                self.begin();
                Ok(())
            }
            Phase::Running { .. } | Phase::Halted { .. } | Phase::Ended { .. } => {
                Err(self.reject(Transition::Start))
            }
        }
    }

    /// Halts the timer, excluding the time until the next [`resume()`][Self::resume] from the
    /// runtime.
    ///
    /// # Errors
    ///
    /// Fails if the timer is not running. In particular, halting an already halted timer is
    /// rejected: halt periods do not nest.
    pub fn halt(&mut self) -> Result<(), TransitionError> {
        match self.phase {
            Phase::Running { started } => {
                self.phase = Phase::Halted {
                    started,
                    halted: self.clock.now(),
                };
                Ok(())
            }
            Phase::Idle | Phase::Halted { .. } | Phase::Ended { .. } => {
                Err(self.reject(Transition::Halt))
            }
        }
    }

    /// Resumes a halted timer, adding the time spent halted to [`halt_time()`][Self::halt_time].
    ///
    /// # Errors
    ///
    /// Fails if the timer is not halted.
    pub fn resume(&mut self) -> Result<(), TransitionError> {
        match self.phase {
            Phase::Halted { started, halted } => {
                let halted_for = self.clock.now().saturating_duration_since(halted);
                self.halt_time = self.halt_time.saturating_add(halted_for);
                self.phase = Phase::Running { started };
                Ok(())
            }
            Phase::Idle | Phase::Running { .. } | Phase::Ended { .. } => {
                Err(self.reject(Transition::Resume))
            }
        }
    }

    /// Ends the timer, freezing its runtime.
    ///
    /// A halted timer is resumed first, so the final halt period is included in
    /// [`halt_time()`][Self::halt_time].
    ///
    /// # Errors
    ///
    /// Fails if the timer has not been started or has already ended.
    pub fn end(&mut self) -> Result<(), TransitionError> {
        if self.is_halted() {
            self.resume()?;
        }

        match self.phase {
            Phase::Running { started } => {
                self.phase = Phase::Ended {
                    started,
                    ended: self.clock.now(),
                };
                Ok(())
            }
            Phase::Idle | Phase::Halted { .. } | Phase::Ended { .. } => {
                Err(self.reject(Transition::End))
            }
        }
    }

    /// Returns the timer to the state of a newly created one, discarding all measurements.
    ///
    /// The timer is started again immediately if `mode` is [`StartMode::Automatic`].
    pub fn reset(&mut self, mode: StartMode) {
        self.phase = Phase::Idle;
        self.halt_time = Duration::ZERO;

        if mode == StartMode::Automatic {
            self.begin();
        }
    }

    /// Halts the timer until the returned guard is dropped.
    ///
    /// See [`HaltGuard`] for details.
    pub fn halt_scope(&mut self) -> HaltGuard<'_> {
        HaltGuard::new(self)
    }

    /// The time the timer has spent running, excluding any time spent halted.
    ///
    /// For a running timer this is measured up to now. For a halted timer it is frozen at the
    /// moment it was halted and for an ended timer at the moment it ended. An idle timer has a
    /// runtime of zero.
    #[must_use]
    pub fn runtime(&self) -> Duration {
        let elapsed = match self.phase {
            Phase::Idle => return Duration::ZERO,
            Phase::Running { started } => self.clock.now().saturating_duration_since(started),
            Phase::Halted { started, halted } => halted.saturating_duration_since(started),
            Phase::Ended { started, ended } => ended.saturating_duration_since(started),
        };

        // A clock that went backwards must not produce a negative (wrapped) runtime.
        elapsed.saturating_sub(self.halt_time)
    }

    /// The [`runtime()`][Self::runtime] as a whole number of `U` ticks.
    ///
    /// # Examples
    ///
    /// ```
    /// use halt_timer::{Seconds, Timer};
    ///
    /// let timer = Timer::default();
    /// assert_eq!(timer.runtime_in::<Seconds>(), 0);
    /// ```
    #[must_use]
    pub fn runtime_in<U: TimeUnit>(&self) -> u128 {
        U::ticks(self.runtime())
    }

    /// The [`runtime()`][Self::runtime] in whole microseconds.
    #[must_use]
    pub fn runtime_us(&self) -> u128 {
        self.runtime_in::<Microseconds>()
    }

    /// The [`runtime()`][Self::runtime] in whole milliseconds.
    #[must_use]
    pub fn runtime_ms(&self) -> u128 {
        self.runtime_in::<Milliseconds>()
    }

    /// The total time the timer has spent halted.
    ///
    /// While the timer is halted this includes the current halt period up to now.
    #[must_use]
    pub fn halt_time(&self) -> Duration {
        match self.phase {
            Phase::Halted { halted, .. } => self
                .halt_time
                .saturating_add(self.clock.now().saturating_duration_since(halted)),
            Phase::Idle | Phase::Running { .. } | Phase::Ended { .. } => self.halt_time,
        }
    }

    /// The [`halt_time()`][Self::halt_time] as a whole number of `U` ticks.
    #[must_use]
    pub fn halt_time_in<U: TimeUnit>(&self) -> u128 {
        U::ticks(self.halt_time())
    }

    /// The [`halt_time()`][Self::halt_time] in whole microseconds.
    #[must_use]
    pub fn halt_time_us(&self) -> u128 {
        self.halt_time_in::<Microseconds>()
    }

    /// The [`halt_time()`][Self::halt_time] in whole milliseconds.
    #[must_use]
    pub fn halt_time_ms(&self) -> u128 {
        self.halt_time_in::<Milliseconds>()
    }

    /// When the timer was started, if it has been.
    #[must_use]
    pub fn start_timestamp(&self) -> Option<Instant> {
        match self.phase {
            Phase::Idle => None,
            Phase::Running { started }
            | Phase::Halted { started, .. }
            | Phase::Ended { started, .. } => Some(started),
        }
    }

    /// When the timer ended, if it has.
    #[must_use]
    pub fn end_timestamp(&self) -> Option<Instant> {
        match self.phase {
            Phase::Ended { ended, .. } => Some(ended),
            Phase::Idle | Phase::Running { .. } | Phase::Halted { .. } => None,
        }
    }

    /// When the current halt period began, if the timer is halted.
    #[must_use]
    pub fn halt_start_timestamp(&self) -> Option<Instant> {
        match self.phase {
            Phase::Halted { halted, .. } => Some(halted),
            Phase::Idle | Phase::Running { .. } | Phase::Ended { .. } => None,
        }
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        match self.phase {
            Phase::Idle => State::Idle,
            Phase::Running { .. } => State::Running,
            Phase::Halted { .. } => State::Halted,
            Phase::Ended { .. } => State::Ended,
        }
    }

    /// Whether the timer is currently halted.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.state() == State::Halted
    }

    /// Whether the timer is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == State::Running
    }

    /// Whether the timer has been started, i.e. is no longer idle.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.state() != State::Idle
    }

    /// Whether the timer has ended.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.state() == State::Ended
    }

    /// Executes `f` and measures how long it takes.
    ///
    /// Returns the value produced by `f` together with the ended timer. For closures that do not
    /// produce a value, [`measure()`][Self::measure] returns just the timer.
    ///
    /// # Examples
    ///
    /// ```
    /// use halt_timer::Timer;
    ///
    /// let measured = Timer::run(|| (1..=10_u64).product::<u64>());
    ///
    /// assert_eq!(*measured.value(), 3_628_800);
    /// assert!(measured.timer().has_ended());
    /// println!("Took {:?}", measured.timer().runtime());
    /// ```
    #[must_use]
    pub fn run<R>(f: impl FnOnce() -> R) -> Measured<R> {
        Self::run_with_clock(TimeSourceFacade::real(), f)
    }

    /// Executes `f` and returns the ended timer that measured it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::thread;
    /// use std::time::Duration;
    ///
    /// use halt_timer::Timer;
    ///
    /// let timer = Timer::measure(|| thread::sleep(Duration::from_millis(2)));
    ///
    /// assert!(timer.runtime_ms() >= 2);
    /// ```
    #[must_use]
    pub fn measure(f: impl FnOnce()) -> Self {
        Self::run(f).into_timer()
    }

    pub(crate) fn run_with_clock<R>(clock: TimeSourceFacade, f: impl FnOnce() -> R) -> Measured<R> {
        let mut timer = Self::with_clock(clock, StartMode::Automatic);

        let value = f();

        timer
            .end()
            .expect("timer is running because nothing but this function can reach it");

        Measured::new(value, timer)
    }

    fn begin(&mut self) {
        self.phase = Phase::Running {
            started: self.clock.now(),
        };
    }

    fn reject(&self, transition: Transition) -> TransitionError {
        let state = self.state();
        trace!(%transition, %state, "rejected timer transition");

        TransitionError::new(transition, state)
    }
}

impl Default for Timer {
    /// Creates an idle timer, equivalent to `Timer::new(StartMode::Manual)`.
    fn default() -> Self {
        Self::new(StartMode::Manual)
    }
}
