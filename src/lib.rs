#![cfg_attr(not(feature = "std"), no_std)]

//! A no_std render core for six-digit LED numeral clocks.
//!
//! # Core Concepts
//!
//! - **`Clock`**: Top-level state machine; polls the RTC and decides when to redraw
//! - **`ClockState`**: Normal, set-time or value display; owned by your control loop
//! - **`Animator`**: Holds the six digit values and the active `Animation`
//! - **`AnimationType`**: Persisted tag selecting an animation variant
//! - **`DigitManager`**: Owns the six `Digit`s at their fixed LED ranges
//! - **`Digit`**: One numeral, drawn edge-lit or full-segment from a per-value color table
//! - **`Color`**: Packed `0xRRGGBB` color with the hue wheel
//! - **`LedStrip`**, **`Rtc`**, **`Settings`**, **`TimeSource`**: Traits to implement for your hardware
//! - **`ClockAction`**: Commands a button handler can send to the clock
//!
//! A digit "shows" a numeral when that numeral is the only entry in its color
//! table that is not off. Animations express everything through
//! [`DigitManager::set_exclusive_digit_value_color`].
//!
//! Enable the `defmt` feature to log structured [`ClockEvent`]s and derive
//! `defmt::Format` on the public types.

mod fmt;

pub mod animator;
pub mod clock;
pub mod color;
pub mod command;
pub mod digit;
pub mod digit_manager;
pub mod hal;
pub mod settings;
pub mod time;
pub mod types;

pub use animator::{Animation, Animator, FlowLeft, Glow, HueSweep};
pub use clock::{Clock, ClockEvent, HourFormat, LED_COUNT, clock_digits, value_digits};
pub use color::Color;
pub use command::ClockAction;
pub use digit::{Digit, LEDS_PER_DIGIT};
pub use digit_manager::{DIGIT_OFFSETS, DigitManager};
pub use hal::{LedStrip, Rtc};
pub use settings::{MemorySettings, Setting, Settings};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    AnimationType, ClockError, ClockState, DIGIT_COUNT, DigitIndex, DigitStyle, DigitValue,
    INVALID,
};
