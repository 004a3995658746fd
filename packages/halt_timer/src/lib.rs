#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Wall-clock timing of a unit of work, with support for halting the timer so that time spent
//! outside the region of interest is excluded from the measurement.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! The core functionality includes:
//! - [`Timer`] - A start/halt/resume/end state machine over the monotonic clock
//! - [`HaltGuard`] - Halts a timer for the duration of a scope
//! - [`ScopedTimer`] - Measures a scope and delivers the ended timer to a callback
//! - [`Timer::run()`] - Measures a closure, returning its value together with the timer
//!
//! This package is meant for ad-hoc measurements during development and in diagnostics. It does
//! not aggregate or report measurements; that is left to the caller.
//!
//! # Measuring a closure
//!
//! ```
//! use halt_timer::Timer;
//!
//! let (sum, timer) = Timer::run(|| (0..10_000_u64).sum::<u64>()).into_parts();
//!
//! println!("Summed to {sum} in {} us", timer.runtime_us());
//! ```
//!
//! # Excluding part of the work
//!
//! ```
//! use std::thread;
//! use std::time::Duration;
//!
//! use halt_timer::{StartMode, Timer};
//!
//! let mut timer = Timer::new(StartMode::Automatic);
//!
//! for _ in 0..3 {
//!     // Measured.
//!     let _sum: u64 = (0..1000).sum();
//!
//!     let _halted = timer.halt_scope();
//!     // Not measured, e.g. waiting for the next batch of input.
//!     thread::sleep(Duration::from_millis(1));
//! }
//!
//! timer.end().unwrap();
//!
//! assert!(timer.halt_time() >= Duration::from_millis(3));
//! println!("Active for {:?}, halted for {:?}", timer.runtime(), timer.halt_time());
//! ```
//!
//! # Measuring a scope
//!
//! ```
//! use halt_timer::ScopedTimer;
//!
//! fn load_configuration() {
//!     let _scope = ScopedTimer::new(|timer| {
//!         println!("Loading configuration took {} ms", timer.runtime_ms());
//!     });
//!
//!     // Early returns, `?` and panics all still report the measurement.
//! }
//! # load_configuration();
//! ```
//!
//! # Units
//!
//! Durations are available at full resolution as [`std::time::Duration`], in whole
//! microseconds or milliseconds via the `_us` and `_ms` accessors, or in any [`TimeUnit`] via
//! [`Timer::runtime_in()`] and [`Timer::halt_time_in()`].
//!
//! # Transitions
//!
//! Transitions that are not legal in the current state, such as halting a timer that was never
//! started, return a [`TransitionError`] and leave the timer unchanged. They never panic.
//!
//! # Threading
//!
//! A [`Timer`] is a plain value. It can be sent to and shared with other threads but may only be
//! mutated through an exclusive reference, so no internal synchronization takes place.

mod error;
mod halt_guard;
mod measured;
mod pal;
mod scoped_timer;
mod state;
mod timer;
mod unit;

pub use error::*;
pub use halt_guard::*;
pub use measured::*;
pub use scoped_timer::*;
pub use state::*;
pub use timer::*;
pub use unit::*;
