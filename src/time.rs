//! Time abstraction traits for platform-agnostic timing.
//!
//! The clock only ever asks "have at least N milliseconds passed since X",
//! so the traits are reduced to instants that can measure a duration and
//! durations that report milliseconds.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to zero if `earlier` is in the future.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Returns true once at least `millis` milliseconds separate `earlier` and `self`.
    #[inline]
    fn elapsed_at_least(&self, earlier: Self, millis: u64) -> bool {
        self.duration_since(earlier).as_millis() >= millis
    }
}
