//! Command-based control for the clock.
//!
//! Button handlers and other input sources live outside this crate; they
//! translate their events into [`ClockAction`]s and hand them to
//! [`Clock::handle_action`](crate::Clock::handle_action).

/// Actions that can be requested of a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockAction {
    /// Color button pressed.
    ColorButton,
    /// Select and persist the next animation.
    NextAnimation,
    /// Show a number for one second.
    DisplayValue(u32),
    /// Rebuild the digits after the digit-type setting changed.
    ChangeDigitType,
    /// Start setting the time.
    EnterSetTime,
    /// Finish setting the time.
    ExitSetTime,
}
