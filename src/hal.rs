//! Hardware collaborators the clock drives.
//!
//! Implement these for your LED driver and RTC chip. The clock only writes
//! pixels and reads time; neither trait can fail, so drivers should handle
//! bus errors internally.

use crate::color::Color;

/// Trait for abstracting an addressable LED strip.
pub trait LedStrip {
    /// Stages `color` for the LED at `index`. Out-of-range indices should be ignored.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Pushes all staged pixels to the LEDs.
    fn show(&mut self);
}

/// Trait for abstracting a real-time clock.
pub trait Rtc {
    /// Re-reads the time from the hardware. Called once per loop in normal mode.
    fn update(&mut self);

    /// Hour, 0-23.
    fn hour(&self) -> u8;

    /// Minute, 0-59.
    fn minute(&self) -> u8;

    /// Second, 0-59.
    fn second(&self) -> u8;

    /// Hour on a 12-hour dial, 1-12.
    fn hour_12(&self) -> u8 {
        match self.hour() % 12 {
            0 => 12,
            hour => hour,
        }
    }
}
