//! Animation behaviors that color the digits each tick.
//!
//! An [`Animator`] holds the six values the clock last pushed and one
//! [`Animation`] variant that decides what color each digit gets. Every tick
//! ends by drawing the digit manager into the LED frame; flushing the frame
//! is left to the caller.

use crate::color::Color;
use crate::digit_manager::DigitManager;
use crate::hal::LedStrip;
use crate::settings::{Setting, Settings};
use crate::time::TimeInstant;
use crate::types::{AnimationType, DIGIT_COUNT, DigitIndex, DigitValue};

/// Minimum time between glow brightness steps.
pub const GLOW_STEP_INTERVAL_MS: u64 = 25;

/// Hue distance between neighbouring digits in the color sweep.
pub const CYCLE_HUE_STEP: u8 = 16;

/// Hue advance of the rightmost digit each time it changes in the flow animation.
pub const FLOW_HUE_STEP: u8 = 6;

/// Hue offset of the set-time indicator from the theme color.
pub const SET_TIME_HUE_OFFSET: u8 = 128;

// Glow brightness is kept as a count of 0.025 steps so the bounds are hit exactly.
const GLOW_LEVEL_MIN: u8 = 8;
const GLOW_LEVEL_MAX: u8 = 40;
const GLOW_STEP: f32 = 0.025;

/// Brightness pulse of the theme color.
#[derive(Debug, Clone, Copy)]
pub struct Glow<I: TimeInstant> {
    level: u8,
    rising: bool,
    last_step: Option<I>,
}

impl<I: TimeInstant> Glow<I> {
    fn new() -> Self {
        Self {
            level: GLOW_LEVEL_MAX,
            rising: false,
            last_step: None,
        }
    }

    /// Current brightness, 0.2-1.0.
    pub fn brightness(&self) -> f32 {
        f32::from(self.level) / f32::from(GLOW_LEVEL_MAX)
    }

    /// Brightness change applied on the next step, ±0.025.
    pub fn increment(&self) -> f32 {
        if self.rising { GLOW_STEP } else { -GLOW_STEP }
    }

    /// Steps brightness if the interval has passed since the last step.
    fn advance(&mut self, now: I) {
        if let Some(last) = self.last_step {
            if !now.elapsed_at_least(last, GLOW_STEP_INTERVAL_MS) {
                return;
            }
        }
        self.last_step = Some(now);

        if self.rising {
            self.level += 1;
            if self.level >= GLOW_LEVEL_MAX {
                self.level = GLOW_LEVEL_MAX;
                self.rising = false;
            }
        } else {
            self.level -= 1;
            if self.level <= GLOW_LEVEL_MIN {
                self.level = GLOW_LEVEL_MIN;
                self.rising = true;
            }
        }
    }
}

/// Hue sweep across the digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HueSweep {
    hue: u8,
}

impl HueSweep {
    /// Hue given to the rightmost digit on the last tick.
    pub fn hue(&self) -> u8 {
        self.hue
    }

    fn next_hue(&mut self) -> u8 {
        self.hue = self.hue.wrapping_add(CYCLE_HUE_STEP);
        self.hue
    }
}

/// Color wave that moves one digit to the left each time a digit changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowLeft {
    colors: Option<[Color; DIGIT_COUNT]>,
    previous: Option<[DigitValue; DIGIT_COUNT]>,
}

impl FlowLeft {
    /// Color held by each digit after the last tick.
    pub fn colors(&self) -> Option<&[Color; DIGIT_COUNT]> {
        self.colors.as_ref()
    }

    fn tick<S: Settings>(&mut self, values: &[DigitValue; DIGIT_COUNT], settings: &mut S) {
        let start = Color::wheel(settings.theme_hue());
        let colors = self.colors.get_or_insert([start; DIGIT_COUNT]);
        let previous = self.previous;

        // Left to right, so each digit reads its neighbour's color from before this tick.
        for i in 0..DIGIT_COUNT {
            let changed = previous.is_none_or(|previous| previous[i] != values[i]);
            if !changed {
                continue;
            }

            if i == DIGIT_COUNT - 1 {
                let hue = settings.theme_hue().wrapping_add(FLOW_HUE_STEP);
                settings.set(Setting::Color, i32::from(hue));
                colors[i] = Color::wheel(hue);
            } else {
                colors[i] = colors[i + 1];
            }
        }

        self.previous = Some(*values);
    }

    fn forget_previous(&mut self) {
        self.previous = None;
    }
}

/// The per-tick color behavior of an [`Animator`].
#[derive(Debug, Clone, Copy)]
pub enum Animation<I: TimeInstant> {
    /// Theme color, no animation.
    PassThrough,
    /// Theme color pulsing between 20% and 100% brightness.
    Glow(Glow<I>),
    /// Hue sweep, redrawn once a second.
    CycleColors(HueSweep),
    /// Hue sweep, redrawn every loop pass.
    CycleColorsSmooth(HueSweep),
    /// Changed digits inherit their right neighbour's color.
    CycleFlowLeft(FlowLeft),
    /// Theme color shifted half way round the wheel.
    SetTime,
}

impl<I: TimeInstant> Animation<I> {
    /// Fresh state for the variant `kind` selects.
    pub fn new(kind: AnimationType) -> Self {
        match kind {
            AnimationType::None => Animation::PassThrough,
            AnimationType::Glow => Animation::Glow(Glow::new()),
            AnimationType::CycleColors => Animation::CycleColors(HueSweep::default()),
            AnimationType::CycleFlowLeft => Animation::CycleFlowLeft(FlowLeft::default()),
            AnimationType::CycleColorsSmooth => {
                Animation::CycleColorsSmooth(HueSweep::default())
            }
            AnimationType::SetTime => Animation::SetTime,
        }
    }

    pub fn kind(&self) -> AnimationType {
        match self {
            Animation::PassThrough => AnimationType::None,
            Animation::Glow(_) => AnimationType::Glow,
            Animation::CycleColors(_) => AnimationType::CycleColors,
            Animation::CycleColorsSmooth(_) => AnimationType::CycleColorsSmooth,
            Animation::CycleFlowLeft(_) => AnimationType::CycleFlowLeft,
            Animation::SetTime => AnimationType::SetTime,
        }
    }
}

/// Owns the six clock digit values and the active animation.
#[derive(Debug, Clone, Copy)]
pub struct Animator<I: TimeInstant> {
    values: [DigitValue; DIGIT_COUNT],
    animation: Animation<I>,
}

impl<I: TimeInstant> Animator<I> {
    /// Creates the animator for `kind` with all digit values at 0.
    pub fn new(kind: AnimationType) -> Self {
        Self {
            values: [0; DIGIT_COUNT],
            animation: Animation::new(kind),
        }
    }

    pub fn kind(&self) -> AnimationType {
        self.animation.kind()
    }

    pub fn animation(&self) -> &Animation<I> {
        &self.animation
    }

    /// Values the next tick will display, left to right.
    pub fn clock_digit_values(&self) -> &[DigitValue; DIGIT_COUNT] {
        &self.values
    }

    /// Overwrites the leading digit values with `values`.
    ///
    /// Only the first `min(values.len(), 6)` slots change; the rest keep
    /// whatever they held before.
    pub fn update_clock_digit_values(&mut self, values: &[DigitValue]) {
        for (slot, &value) in self.values.iter_mut().zip(values) {
            *slot = value;
        }
        trace!("clock digits {}", self.values);
    }

    /// Fast animations redraw on every loop pass, others once a second.
    pub fn is_fast(&self) -> bool {
        self.kind().is_fast()
    }

    /// Lets animations with positional memory react to the color button.
    pub fn color_button_pressed(&mut self) {
        if let Animation::CycleFlowLeft(flow) = &mut self.animation {
            flow.forget_previous();
        }
    }

    /// Runs one tick: colors every digit and draws them into `leds`.
    pub fn run<L: LedStrip, S: Settings>(
        &mut self,
        digits: &mut DigitManager,
        leds: &mut L,
        settings: &mut S,
        now: I,
    ) {
        let values = self.values;
        match &mut self.animation {
            Animation::PassThrough => {
                let theme = Color::wheel(settings.theme_hue());
                paint_uniform(digits, &values, theme);
            }
            Animation::Glow(glow) => {
                let theme = Color::wheel(settings.theme_hue());
                paint_uniform(digits, &values, theme.scaled(glow.brightness()));
                glow.advance(now);
            }
            Animation::CycleColors(sweep) | Animation::CycleColorsSmooth(sweep) => {
                for digit in DigitIndex::all() {
                    let color = Color::wheel(sweep.next_hue());
                    digits.set_exclusive_digit_value_color(digit, values[digit.get()], color);
                }
            }
            Animation::CycleFlowLeft(flow) => {
                flow.tick(&values, settings);
                if let Some(colors) = flow.colors() {
                    for digit in DigitIndex::all() {
                        let i = digit.get();
                        digits.set_exclusive_digit_value_color(digit, values[i], colors[i]);
                    }
                }
            }
            Animation::SetTime => {
                let hue = settings.theme_hue().wrapping_add(SET_TIME_HUE_OFFSET);
                paint_uniform(digits, &values, Color::wheel(hue));
            }
        }

        digits.draw(leds);
    }
}

fn paint_uniform(digits: &mut DigitManager, values: &[DigitValue; DIGIT_COUNT], color: Color) {
    for digit in DigitIndex::all() {
        digits.set_exclusive_digit_value_color(digit, values[digit.get()], color);
    }
}
