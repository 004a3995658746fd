use thiserror::Error;

use crate::{State, Transition};

/// A [`Timer`][crate::Timer] was asked for a transition that is not legal in its current state.
///
/// The timer is left exactly as it was before the request.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("cannot {transition} a timer that is {state}")]
pub struct TransitionError {
    transition: Transition,
    state: State,
}

impl TransitionError {
    pub(crate) const fn new(transition: Transition, state: State) -> Self {
        Self { transition, state }
    }

    /// The transition that was rejected.
    #[must_use]
    pub const fn transition(self) -> Transition {
        self.transition
    }

    /// The state the timer was in when the transition was rejected.
    #[must_use]
    pub const fn state(self) -> State {
        self.state
    }
}
