//! The six digits of the display and their fixed LED ranges.

use crate::color::Color;
use crate::digit::{Digit, LEDS_PER_DIGIT};
use crate::hal::LedStrip;
use crate::types::{DIGIT_COUNT, DigitIndex, DigitStyle, DigitValue, VALUES_PER_DIGIT};

/// First LED of each digit, left to right.
///
/// LED 0 is the PCB's D1 marking.
pub const DIGIT_OFFSETS: [usize; DIGIT_COUNT] = [0, 20, 40, 60, 80, 100];

/// Owns the six digits of the display.
///
/// The digit array is always fully populated; changing the rendering
/// strategy replaces all six at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitManager {
    digits: [Digit; DIGIT_COUNT],
    style: DigitStyle,
}

impl DigitManager {
    /// Creates six blank digits drawn with `style`.
    pub fn new(style: DigitStyle) -> Self {
        Self {
            digits: Self::build(style),
            style,
        }
    }

    fn build(style: DigitStyle) -> [Digit; DIGIT_COUNT] {
        core::array::from_fn(|i| Digit::new(style, DIGIT_OFFSETS[i]))
    }

    /// Replaces all six digits with blank ones drawn with `style`.
    ///
    /// Color tables are reset; the next animation tick repopulates them.
    pub fn create_digit_display(&mut self, style: DigitStyle) {
        self.digits = Self::build(style);
        self.style = style;
    }

    /// Rendering strategy of the current digits.
    pub fn style(&self) -> DigitStyle {
        self.style
    }

    /// Sets the color `digit` draws `value` in.
    pub fn set_digit_value_color(&mut self, digit: DigitIndex, value: DigitValue, color: Color) {
        trace!("digit {} value {} color {:x}", digit.get(), value, color.packed());
        self.digits[digit.get()].set_value(value, color);
    }

    /// Makes `digit` show `value` in `color` by turning every other numeral off.
    ///
    /// A `value` outside 0-9 turns the whole digit off.
    pub fn set_exclusive_digit_value_color(
        &mut self,
        digit: DigitIndex,
        value: DigitValue,
        color: Color,
    ) {
        for numeral in 0..VALUES_PER_DIGIT as DigitValue {
            let numeral_color = if numeral == value { color } else { Color::OFF };
            self.set_digit_value_color(digit, numeral, numeral_color);
        }
    }

    /// Draws all six digits, left to right.
    pub fn draw<L: LedStrip>(&self, leds: &mut L) {
        for digit in &self.digits {
            digit.draw(leds);
        }
    }

    pub fn digit(&self, index: DigitIndex) -> &Digit {
        &self.digits[index.get()]
    }

    pub fn digits(&self) -> &[Digit; DIGIT_COUNT] {
        &self.digits
    }

    /// Number of LEDs covered by the digits.
    pub const fn led_count() -> usize {
        DIGIT_COUNT * LEDS_PER_DIGIT
    }
}
