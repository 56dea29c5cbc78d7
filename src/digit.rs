//! A single LED numeral and its two rendering strategies.
//!
//! Each digit owns a 20-LED segment of the strip and a color table with one
//! entry per numeral. Which numeral is "showing" is never stored: callers
//! zero every entry except the active one (see
//! [`DigitManager::set_exclusive_digit_value_color`](crate::DigitManager::set_exclusive_digit_value_color)).

use crate::color::Color;
use crate::hal::LedStrip;
use crate::types::{DigitStyle, DigitValue, VALUES_PER_DIGIT};

/// LEDs in one digit segment.
pub const LEDS_PER_DIGIT: usize = 20;

/// Segment pattern for each numeral on full-segment digits.
///
/// The 20 LEDs are wired as ten rows of two, top to bottom.
#[rustfmt::skip]
const SEGMENT_GLYPHS: [[u8; LEDS_PER_DIGIT]; VALUES_PER_DIGIT] = [
    // 0
    [1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    // 1
    [1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
    // 2
    [1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    // 3
    [1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    // 4
    [0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    // 5
    [0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    // 6
    [1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    // 7
    [1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    // 8
    [1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    // 9
    [1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0],
];

/// One numeral on the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Digit {
    /// Two LEDs light each engraved numeral; the whole table is drawn every frame.
    EdgeLit(DigitSegment),
    /// The segment draws the active numeral's glyph.
    FullSegment(DigitSegment),
}

/// LED range and color table shared by both strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSegment {
    first_led: usize,
    colors: [Color; VALUES_PER_DIGIT],
}

impl DigitSegment {
    fn new(first_led: usize) -> Self {
        Self {
            first_led,
            colors: [Color::OFF; VALUES_PER_DIGIT],
        }
    }

    fn all_off<L: LedStrip>(&self, leds: &mut L) {
        for i in 0..LEDS_PER_DIGIT {
            leds.set_pixel(self.first_led + i, Color::OFF);
        }
    }

    fn draw_edge_lit<L: LedStrip>(&self, leds: &mut L) {
        self.all_off(leds);
        // Numeral 0 sits on the bottom row, 9 on the top.
        for (value, &color) in self.colors.iter().enumerate() {
            let row = VALUES_PER_DIGIT - value;
            leds.set_pixel(self.first_led + row * 2 - 2, color);
            leds.set_pixel(self.first_led + row * 2 - 1, color);
        }
    }

    fn draw_full_segment<L: LedStrip>(&self, leds: &mut L) {
        let Some(value) = self.active_value() else {
            self.all_off(leds);
            return;
        };

        let color = self.colors[value as usize];
        let glyph = &SEGMENT_GLYPHS[value as usize];
        for (i, &lit) in glyph.iter().enumerate() {
            let pixel = if lit == 0 { Color::OFF } else { color };
            leds.set_pixel(self.first_led + i, pixel);
        }
    }

    /// Lowest numeral with a non-zero color.
    fn active_value(&self) -> Option<DigitValue> {
        self.colors
            .iter()
            .position(|color| !color.is_off())
            .map(|value| value as DigitValue)
    }
}

impl Digit {
    /// Creates a blank digit whose segment starts at `first_led`.
    pub fn new(style: DigitStyle, first_led: usize) -> Self {
        let segment = DigitSegment::new(first_led);
        match style {
            DigitStyle::EdgeLit => Digit::EdgeLit(segment),
            DigitStyle::FullSegment => Digit::FullSegment(segment),
        }
    }

    /// Rendering strategy of this digit.
    pub fn style(&self) -> DigitStyle {
        match self {
            Digit::EdgeLit(_) => DigitStyle::EdgeLit,
            Digit::FullSegment(_) => DigitStyle::FullSegment,
        }
    }

    fn segment(&self) -> &DigitSegment {
        match self {
            Digit::EdgeLit(segment) | Digit::FullSegment(segment) => segment,
        }
    }

    fn segment_mut(&mut self) -> &mut DigitSegment {
        match self {
            Digit::EdgeLit(segment) | Digit::FullSegment(segment) => segment,
        }
    }

    /// Index of the first LED of this digit's segment.
    pub fn first_led(&self) -> usize {
        self.segment().first_led
    }

    /// Records the color to draw `value` in. Values outside 0-9 are ignored.
    pub fn set_value(&mut self, value: DigitValue, color: Color) {
        if let Some(slot) = self.segment_mut().colors.get_mut(value as usize) {
            *slot = color;
        }
    }

    /// Color recorded for `value`, or `None` outside 0-9.
    pub fn value_color(&self, value: DigitValue) -> Option<Color> {
        self.segment().colors.get(value as usize).copied()
    }

    /// The full color table, indexed by numeral.
    pub fn colors(&self) -> &[Color; VALUES_PER_DIGIT] {
        &self.segment().colors
    }

    /// Numeral currently shown, the lowest one with a non-zero color.
    pub fn active_value(&self) -> Option<DigitValue> {
        self.segment().active_value()
    }

    /// Renders one frame of this digit into `leds`.
    pub fn draw<L: LedStrip>(&self, leds: &mut L) {
        match self {
            Digit::EdgeLit(segment) => segment.draw_edge_lit(leds),
            Digit::FullSegment(segment) => segment.draw_full_segment(leds),
        }
    }

    /// Blanks this digit's segment.
    pub fn all_off<L: LedStrip>(&self, leds: &mut L) {
        self.segment().all_off(leds);
    }
}
