use std::fmt;

/// The lifecycle state of a [`Timer`][crate::Timer].
///
/// A timer starts out [`Idle`][State::Idle], moves between [`Running`][State::Running] and
/// [`Halted`][State::Halted] while it is measuring and finishes in [`Ended`][State::Ended]. Only
/// [`Timer::reset()`][crate::Timer::reset] leaves the ended state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the timer lifecycle is a closed set of states"
)]
pub enum State {
    /// The timer has not been started yet.
    Idle,

    /// The timer is measuring elapsed time.
    Running,

    /// The timer has been halted and is excluding elapsed time from its runtime.
    Halted,

    /// The timer has been ended and its runtime is final.
    Ended,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Halted => "halted",
            Self::Ended => "ended",
        })
    }
}

/// Whether a [`Timer`][crate::Timer] starts measuring as soon as it is created.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a timer is either started on creation or it is not"
)]
pub enum StartMode {
    /// The timer is created idle and must be started with [`Timer::start()`][crate::Timer::start].
    #[default]
    Manual,

    /// The timer is started as part of its creation.
    Automatic,
}

/// A state transition that can be requested from a [`Timer`][crate::Timer].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "mirrors the transition methods of the timer"
)]
pub enum Transition {
    /// [`Timer::start()`][crate::Timer::start].
    Start,

    /// [`Timer::halt()`][crate::Timer::halt].
    Halt,

    /// [`Timer::resume()`][crate::Timer::resume].
    Resume,

    /// [`Timer::end()`][crate::Timer::end].
    End,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Halt => "halt",
            Self::Resume => "resume",
            Self::End => "end",
        })
    }
}
