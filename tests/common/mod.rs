//! Shared test infrastructure for numeral-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use numeral_clock::{
    Color, DigitIndex, LED_COUNT, LEDS_PER_DIGIT, LedStrip, Rtc, TimeDuration, TimeInstant,
    TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Mock strip holding one frame of pixels and counting flushes
pub struct MockStrip {
    pixels: [Color; LED_COUNT],
    show_count: u32,
    shown_frames: heapless::Vec<[Color; LED_COUNT], 8>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            pixels: [Color::OFF; LED_COUNT],
            show_count: 0,
            shown_frames: heapless::Vec::new(),
        }
    }

    pub fn pixel(&self, index: usize) -> Color {
        self.pixels[index]
    }

    /// The 20 pixels belonging to `digit`
    pub fn segment(&self, digit: usize) -> &[Color] {
        let first = digit * LEDS_PER_DIGIT;
        &self.pixels[first..first + LEDS_PER_DIGIT]
    }

    pub fn show_count(&self) -> u32 {
        self.show_count
    }

    /// The first frames that were flushed, oldest first
    pub fn shown_frames(&self) -> &[[Color; LED_COUNT]] {
        &self.shown_frames
    }
}

impl LedStrip for MockStrip {
    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.show_count += 1;
        let _ = self.shown_frames.push(self.pixels);
    }
}

// ============================================================================
// Mock RTC
// ============================================================================

/// Mock RTC with directly settable time
pub struct MockRtc {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    update_count: u32,
}

impl MockRtc {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            update_count: 0,
        }
    }

    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
    }

    pub fn update_count(&self) -> u32 {
        self.update_count
    }
}

impl Rtc for MockRtc {
    fn update(&mut self) {
        self.update_count += 1;
    }

    fn hour(&self) -> u8 {
        self.hour
    }

    fn minute(&self) -> u8 {
        self.minute
    }

    fn second(&self) -> u8 {
        self.second
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Digit position from a plain index
pub fn digit(index: usize) -> DigitIndex {
    DigitIndex::new(index).unwrap()
}

/// Segment-relative LED pair lighting `value` on an edge-lit digit
pub fn edge_lit_pair(value: u8) -> (usize, usize) {
    let row = 10 - value as usize;
    (row * 2 - 2, row * 2 - 1)
}

/// True if `segment` shows exactly `value` in `color` as an edge-lit digit
pub fn edge_lit_shows(segment: &[Color], value: u8, color: Color) -> bool {
    let (a, b) = edge_lit_pair(value);
    segment.iter().enumerate().all(|(i, &pixel)| {
        if i == a || i == b {
            pixel == color
        } else {
            pixel == Color::OFF
        }
    })
}

/// True if every pixel of `segment` is off
pub fn is_blank(segment: &[Color]) -> bool {
    segment.iter().all(|pixel| pixel.is_off())
}
