//! Top-level clock: display state machine, redraw cadence and separator blink.
//!
//! Provides [`Clock`], which ties the RTC to the active animator and the
//! LED strip. The control loop owns the [`ClockState`] and passes it into
//! every call; the clock never keeps its own copy.

use crate::animator::Animator;
use crate::color::Color;
use crate::command::ClockAction;
use crate::digit_manager::DigitManager;
use crate::hal::{LedStrip, Rtc};
use crate::settings::{Setting, Settings};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{AnimationType, ClockState, DIGIT_COUNT, DigitStyle, DigitValue, INVALID};
use heapless::Vec;

/// LEDs on the strip: six 20-LED digits plus two edge-lit separators.
pub const LED_COUNT: usize = DigitManager::led_count() + EDGE_LIT_SEPARATOR_LEDS.len();

/// How long a displayed value stays up before the time returns.
pub const DISPLAY_VALUE_TIMEOUT_MS: u64 = 1000;

/// Separator LEDs on edge-lit boards, between rows 2/3 and 4/5.
pub const EDGE_LIT_SEPARATOR_LEDS: [usize; 2] = [120, 121];

/// Separator LEDs on full-segment boards, in rows 2 and 4.
pub const FULL_SEGMENT_SEPARATOR_LEDS: [usize; 4] = [25, 33, 65, 73];

/// How hours are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// 0-23, leading zero shown.
    TwentyFour,
    /// 1-12, leading zero blanked.
    Twelve,
}

impl HourFormat {
    /// Maps the persisted 24-hour flag: 1 is 24-hour, anything else 12-hour.
    pub fn from_setting(value: i32) -> Self {
        if value == 1 {
            HourFormat::TwentyFour
        } else {
            HourFormat::Twelve
        }
    }
}

/// Splits a time into the six display digits.
///
/// `hour` must already be in `format`'s range. In 12-hour format a zero
/// hour-tens digit is replaced with [`INVALID`] so it stays dark.
pub fn clock_digits(
    hour: u8,
    minute: u8,
    second: u8,
    format: HourFormat,
) -> [DigitValue; DIGIT_COUNT] {
    let mut hour_tens = hour / 10;
    if format == HourFormat::Twelve && hour_tens == 0 {
        hour_tens = INVALID;
    }

    [
        hour_tens,
        hour % 10,
        minute / 10,
        minute % 10,
        second / 10,
        second % 10,
    ]
}

/// Right-aligns the decimal digits of `value`, blanking unused leading digits.
///
/// Values wider than the display keep their lowest six digits.
pub fn value_digits(value: u32) -> [DigitValue; DIGIT_COUNT] {
    let mut decimal: Vec<DigitValue, DIGIT_COUNT> = Vec::new();
    let mut rest = value;
    loop {
        if decimal.push((rest % 10) as DigitValue).is_err() {
            break;
        }
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let mut digits = [INVALID; DIGIT_COUNT];
    for (slot, &digit) in digits.iter_mut().rev().zip(decimal.iter()) {
        *slot = digit;
    }
    digits
}

/// Structured diagnostics emitted by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    /// Display state changed.
    StateChanged { from: ClockState, to: ClockState },
    /// A new animator was installed.
    AnimationSelected(AnimationType),
    /// Digits were rebuilt with a new rendering strategy.
    DigitDisplayRebuilt(DigitStyle),
    /// A frame was drawn for this RTC second.
    Redraw { second: u8 },
}

fn notify(event: ClockEvent) {
    debug!("clock: {}", event);
}

/// Drives a six-digit LED clock.
///
/// The clock owns the LED strip, the RTC and the settings store, and borrows
/// the time source. Call [`check`](Clock::check) on every pass of the control
/// loop; it decides when a redraw is due.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - LED strip implementation type
/// * `R` - RTC implementation type
/// * `S` - Settings store implementation type
/// * `T` - Time source implementation type
pub struct Clock<'t, I, L, R, S, T>
where
    I: TimeInstant,
    L: LedStrip,
    R: Rtc,
    S: Settings,
    T: TimeSource<I>,
{
    leds: L,
    rtc: R,
    settings: S,
    time_source: &'t T,
    digits: DigitManager,
    animator: Animator<I>,
    last_redraw_second: Option<u8>,
    display_value_entered: Option<I>,
}

impl<'t, I, L, R, S, T> Clock<'t, I, L, R, S, T>
where
    I: TimeInstant,
    L: LedStrip,
    R: Rtc,
    S: Settings,
    T: TimeSource<I>,
{
    /// Creates a clock in `Normal` state with the persisted animation and draws one frame.
    pub fn new(leds: L, rtc: R, settings: S, time_source: &'t T, state: &mut ClockState) -> Self {
        let style = DigitStyle::from_setting(settings.get(Setting::DigitType));
        let kind = AnimationType::from_setting(settings.get(Setting::AnimationType));

        let mut clock = Self {
            leds,
            rtc,
            settings,
            time_source,
            digits: DigitManager::new(style),
            animator: Animator::new(kind),
            last_redraw_second: None,
            display_value_entered: None,
        };

        Self::transition(state, ClockState::Normal);
        notify(ClockEvent::AnimationSelected(kind));
        clock.draw(*state);
        clock
    }

    fn transition(state: &mut ClockState, to: ClockState) {
        if *state != to {
            notify(ClockEvent::StateChanged { from: *state, to });
        }
        *state = to;
    }

    /// Replaces the active animator with a fresh one of `kind`.
    pub fn use_animation(&mut self, kind: AnimationType) {
        self.animator = Animator::new(kind);
        notify(ClockEvent::AnimationSelected(kind));
    }

    fn use_persisted_animation(&mut self) {
        let kind = AnimationType::from_setting(self.settings.get(Setting::AnimationType));
        self.use_animation(kind);
    }

    /// Lets the animator react to the color button, then redraws.
    pub fn color_button_pressed(&mut self, state: ClockState) {
        self.animator.color_button_pressed();
        self.draw(state);
    }

    /// Rebuilds the digits with the rendering strategy currently in the settings.
    pub fn change_digit_type(&mut self) {
        let style = DigitStyle::from_setting(self.settings.get(Setting::DigitType));
        self.digits.create_digit_display(style);
        notify(ClockEvent::DigitDisplayRebuilt(style));
    }

    /// Shows `value` for one second in place of the time.
    pub fn display_value(&mut self, value: u32, state: &mut ClockState) {
        Self::transition(state, ClockState::DisplayValue);
        self.display_value_entered = Some(self.time_source.now());
        self.use_animation(AnimationType::None);
        self.animator.update_clock_digit_values(&value_digits(value));
        self.draw(*state);
    }

    /// Switches to time-setting mode with the set-time indicator.
    pub fn enter_set_time(&mut self, state: &mut ClockState) {
        Self::transition(state, ClockState::SetTime);
        self.display_value_entered = None;
        self.use_animation(AnimationType::SetTime);
        self.draw(*state);
    }

    /// Leaves time-setting mode and restores the persisted animation.
    pub fn exit_set_time(&mut self, state: &mut ClockState) {
        if *state != ClockState::SetTime {
            return;
        }
        Self::transition(state, ClockState::Normal);
        self.use_persisted_animation();
        self.draw(*state);
    }

    /// Persists the next selectable animation and activates it in `Normal` state.
    pub fn next_animation(&mut self, state: ClockState) {
        let current = AnimationType::from_setting(self.settings.get(Setting::AnimationType));
        let next = current.next();
        self.settings.set(Setting::AnimationType, next.into());

        if state == ClockState::Normal {
            self.use_animation(next);
        }
        self.draw(state);
    }

    /// Dispatches `action` to the matching operation.
    pub fn handle_action(&mut self, action: ClockAction, state: &mut ClockState) {
        match action {
            ClockAction::ColorButton => self.color_button_pressed(*state),
            ClockAction::NextAnimation => self.next_animation(*state),
            ClockAction::DisplayValue(value) => self.display_value(value, state),
            ClockAction::ChangeDigitType => self.change_digit_type(),
            ClockAction::EnterSetTime => self.enter_set_time(state),
            ClockAction::ExitSetTime => self.exit_set_time(state),
        }
    }

    /// Runs one control-loop pass, redrawing when due.
    ///
    /// Reverts an expired value display, resynchronizes the RTC in `Normal`
    /// state and redraws when the second changed, when not in `Normal` state,
    /// or every pass for fast animations.
    ///
    /// The pass that ends a value display also redraws unconditionally, so the
    /// time replaces the readout at once instead of on the next second tick.
    pub fn check(&mut self, state: &mut ClockState) {
        let mut update = false;

        if *state == ClockState::DisplayValue {
            let now = self.time_source.now();
            let expired = self
                .display_value_entered
                .is_none_or(|entered| now.elapsed_at_least(entered, DISPLAY_VALUE_TIMEOUT_MS));
            if expired {
                Self::transition(state, ClockState::Normal);
                self.display_value_entered = None;
                self.use_persisted_animation();
                update = true;
            }
        }

        if *state == ClockState::Normal {
            self.rtc.update();
        } else {
            update = true;
        }

        let second = self.rtc.second();
        if self.last_redraw_second != Some(second) {
            update = true;
        }

        if update || self.animator.is_fast() {
            self.last_redraw_second = Some(second);
            trace!("clock: {}", ClockEvent::Redraw { second });
            self.draw(*state);
        }
    }

    /// Renders and flushes one frame.
    ///
    /// Outside `DisplayValue` the digits are refreshed from the RTC and the
    /// separators blink.
    pub fn draw(&mut self, state: ClockState) {
        let showing_time = state != ClockState::DisplayValue;

        if showing_time {
            let values = self.rtc_digits();
            self.animator.update_clock_digit_values(&values);
        }

        let now = self.time_source.now();
        self.animator
            .run(&mut self.digits, &mut self.leds, &mut self.settings, now);

        if showing_time {
            self.blink_separators();
        }

        self.leds.show();
    }

    fn rtc_digits(&self) -> [DigitValue; DIGIT_COUNT] {
        let format = HourFormat::from_setting(self.settings.get(Setting::TwentyFourHourMode));
        let hour = match format {
            HourFormat::TwentyFour => self.rtc.hour(),
            HourFormat::Twelve => self.rtc.hour_12(),
        };
        clock_digits(hour, self.rtc.minute(), self.rtc.second(), format)
    }

    /// Lights the separators in the theme color on even seconds, off on odd.
    fn blink_separators(&mut self) {
        if self.settings.get(Setting::BlinkingSeparators) != 1 {
            return;
        }

        let color = if self.rtc.second() % 2 == 0 {
            Color::wheel(self.settings.theme_hue())
        } else {
            Color::OFF
        };

        let style = DigitStyle::from_setting(self.settings.get(Setting::DigitType));
        let separators: &[usize] = match style {
            DigitStyle::EdgeLit => &EDGE_LIT_SEPARATOR_LEDS,
            DigitStyle::FullSegment => &FULL_SEGMENT_SEPARATOR_LEDS,
        };
        for &index in separators {
            self.leds.set_pixel(index, color);
        }
    }

    /// The active animator.
    pub fn animator(&self) -> &Animator<I> {
        &self.animator
    }

    pub fn digit_manager(&self) -> &DigitManager {
        &self.digits
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut L {
        &mut self.leds
    }

    pub fn rtc(&self) -> &R {
        &self.rtc
    }

    pub fn rtc_mut(&mut self) -> &mut R {
        &mut self.rtc
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut S {
        &mut self.settings
    }
}
