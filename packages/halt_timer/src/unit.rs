//! Units of time in which timer durations can be reported.

use std::time::Duration;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// A unit of time, described as a fixed fraction of a second.
///
/// One tick of the unit lasts `PERIOD_NUMERATOR / PERIOD_DENOMINATOR` seconds. Durations are
/// converted to a whole number of ticks, truncating toward zero.
///
/// The package provides [`Nanoseconds`], [`Microseconds`], [`Milliseconds`] and [`Seconds`]. You
/// can define your own unit by implementing this trait for a marker type:
///
/// ```
/// use std::time::Duration;
///
/// use halt_timer::TimeUnit;
///
/// /// One frame of a 60 Hz display.
/// struct Frames;
///
/// impl TimeUnit for Frames {
///     const PERIOD_NUMERATOR: u128 = 1;
///     const PERIOD_DENOMINATOR: u128 = 60;
/// }
///
/// assert_eq!(Frames::ticks(Duration::from_secs(2)), 120);
/// assert_eq!(Frames::ticks(Duration::from_millis(20)), 1);
/// ```
pub trait TimeUnit {
    /// Numerator of the length of one tick, in seconds.
    const PERIOD_NUMERATOR: u128;

    /// Denominator of the length of one tick, in seconds.
    const PERIOD_DENOMINATOR: u128;

    /// Converts a duration to a whole number of ticks of this unit.
    ///
    /// # Panics
    ///
    /// Panics if the unit's period numerator or denominator is zero.
    #[must_use]
    fn ticks(duration: Duration) -> u128 {
        assert!(
            Self::PERIOD_NUMERATOR != 0 && Self::PERIOD_DENOMINATOR != 0,
            "time unit period cannot be zero"
        );

        let nanos_per_tick = Self::PERIOD_NUMERATOR.saturating_mul(NANOS_PER_SECOND);

        duration
            .as_nanos()
            .saturating_mul(Self::PERIOD_DENOMINATOR)
            .checked_div(nanos_per_tick)
            .expect("guarded by assertion above")
    }
}

/// Nanosecond resolution, the native resolution of [`Duration`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "marker type with no data")]
pub struct Nanoseconds;

impl TimeUnit for Nanoseconds {
    const PERIOD_NUMERATOR: u128 = 1;
    const PERIOD_DENOMINATOR: u128 = 1_000_000_000;
}

/// Microsecond resolution.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "marker type with no data")]
pub struct Microseconds;

impl TimeUnit for Microseconds {
    const PERIOD_NUMERATOR: u128 = 1;
    const PERIOD_DENOMINATOR: u128 = 1_000_000;
}

/// Millisecond resolution.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "marker type with no data")]
pub struct Milliseconds;

impl TimeUnit for Milliseconds {
    const PERIOD_NUMERATOR: u128 = 1;
    const PERIOD_DENOMINATOR: u128 = 1_000;
}

/// Second resolution.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "marker type with no data")]
pub struct Seconds;

impl TimeUnit for Seconds {
    const PERIOD_NUMERATOR: u128 = 1;
    const PERIOD_DENOMINATOR: u128 = 1;
}
