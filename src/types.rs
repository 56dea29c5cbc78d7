//! Core types shared by the digits, animators and the clock.

/// A numeral shown by one digit: 0-9, or [`INVALID`] for a blank digit.
pub type DigitValue = u8;

/// Sentinel digit value rendered as a blank digit.
pub const INVALID: DigitValue = 0xFF;

/// Number of numeral states a digit can show.
pub const VALUES_PER_DIGIT: usize = 10;

/// Number of digits on the display.
pub const DIGIT_COUNT: usize = 6;

/// Display state of the clock.
///
/// Owned by the control loop and handed to every [`Clock`](crate::Clock) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Steady time display.
    #[default]
    Normal,
    /// Time is being configured.
    SetTime,
    /// Transient numeric readout, reverts to `Normal` after one second.
    DisplayValue,
}

/// Selects an animator variant.
///
/// Discriminants match the values persisted under
/// [`Setting::AnimationType`](crate::Setting::AnimationType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AnimationType {
    /// Pass-through: theme color, no animation.
    #[default]
    None = 0,
    /// Brightness pulse of the theme color.
    Glow = 1,
    /// Left-to-right hue sweep, once per second.
    CycleColors = 2,
    /// Color wave flowing left as digits change.
    CycleFlowLeft = 3,
    /// Left-to-right hue sweep, every loop pass.
    CycleColorsSmooth = 4,
    /// Time-setting indicator.
    SetTime = 6,
}

impl AnimationType {
    /// Number of animations a user can cycle through. `SetTime` is not one of them.
    pub const SELECTABLE: u8 = 5;

    /// Maps a persisted setting value to a type, falling back to `None`.
    pub fn from_setting(value: i32) -> Self {
        Self::try_from(value).unwrap_or(AnimationType::None)
    }

    /// The next selectable animation, wrapping back to `None`.
    ///
    /// `SetTime` is not selectable and advances to `None`.
    pub fn next(self) -> Self {
        if self == AnimationType::SetTime {
            return AnimationType::None;
        }
        let next = (self as u8 + 1) % Self::SELECTABLE;
        Self::from_setting(i32::from(next))
    }

    /// True for animations that redraw on every control-loop pass.
    pub fn is_fast(self) -> bool {
        matches!(self, AnimationType::Glow | AnimationType::CycleColorsSmooth)
    }
}

impl From<AnimationType> for i32 {
    fn from(kind: AnimationType) -> Self {
        kind as i32
    }
}

impl TryFrom<i32> for AnimationType {
    type Error = ClockError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AnimationType::None),
            1 => Ok(AnimationType::Glow),
            2 => Ok(AnimationType::CycleColors),
            3 => Ok(AnimationType::CycleFlowLeft),
            4 => Ok(AnimationType::CycleColorsSmooth),
            6 => Ok(AnimationType::SetTime),
            other => Err(ClockError::UnknownAnimationType(other)),
        }
    }
}

/// Rendering strategy for all digits on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitStyle {
    /// Two LEDs under each engraved numeral, all ten lit from the color table.
    EdgeLit,
    /// The whole 20-LED segment draws the numeral from a bitmap.
    FullSegment,
}

impl DigitStyle {
    /// Maps the persisted digit-type setting: 1 is edge-lit, anything else full-segment.
    pub fn from_setting(value: i32) -> Self {
        if value == 1 {
            DigitStyle::EdgeLit
        } else {
            DigitStyle::FullSegment
        }
    }
}

/// A validated digit position, 0 (leftmost) to 5 (rightmost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitIndex(u8);

impl DigitIndex {
    /// Creates an index, or `None` if `index` is not a digit position.
    pub const fn new(index: usize) -> Option<Self> {
        if index < DIGIT_COUNT {
            Some(DigitIndex(index as u8))
        } else {
            None
        }
    }

    /// All digit positions from left to right.
    pub fn all() -> impl Iterator<Item = DigitIndex> {
        (0..DIGIT_COUNT as u8).map(DigitIndex)
    }

    /// Position as an array index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for DigitIndex {
    type Error = ClockError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        DigitIndex::new(index).ok_or(ClockError::InvalidDigitIndex(index))
    }
}

/// Errors raised when converting raw values into clock types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Setting value does not name an animation.
    UnknownAnimationType(i32),

    /// Digit position outside 0-5.
    InvalidDigitIndex(usize),
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::UnknownAnimationType(value) => {
                write!(f, "unknown animation type {}", value)
            }
            ClockError::InvalidDigitIndex(index) => {
                write!(
                    f,
                    "digit index {} out of range, display has {} digits",
                    index, DIGIT_COUNT
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_type_round_trips_through_setting_values() {
        for kind in [
            AnimationType::None,
            AnimationType::Glow,
            AnimationType::CycleColors,
            AnimationType::CycleFlowLeft,
            AnimationType::CycleColorsSmooth,
            AnimationType::SetTime,
        ] {
            assert_eq!(AnimationType::try_from(i32::from(kind)), Ok(kind));
        }
    }

    #[test]
    fn unknown_animation_setting_falls_back_to_none() {
        assert_eq!(
            AnimationType::try_from(5),
            Err(ClockError::UnknownAnimationType(5))
        );
        assert_eq!(AnimationType::from_setting(5), AnimationType::None);
        assert_eq!(AnimationType::from_setting(-1), AnimationType::None);
        assert_eq!(AnimationType::from_setting(200), AnimationType::None);
    }

    #[test]
    fn next_cycles_selectable_animations() {
        assert_eq!(AnimationType::None.next(), AnimationType::Glow);
        assert_eq!(AnimationType::Glow.next(), AnimationType::CycleColors);
        assert_eq!(AnimationType::CycleColors.next(), AnimationType::CycleFlowLeft);
        assert_eq!(
            AnimationType::CycleFlowLeft.next(),
            AnimationType::CycleColorsSmooth
        );
        assert_eq!(AnimationType::CycleColorsSmooth.next(), AnimationType::None);
        assert_eq!(AnimationType::SetTime.next(), AnimationType::None);
    }

    #[test]
    fn digit_index_rejects_out_of_range() {
        assert_eq!(DigitIndex::new(5).map(DigitIndex::get), Some(5));
        assert_eq!(DigitIndex::new(6), None);
        assert_eq!(
            DigitIndex::try_from(6),
            Err(ClockError::InvalidDigitIndex(6))
        );
        assert_eq!(DigitIndex::all().count(), DIGIT_COUNT);
    }

    #[test]
    fn digit_style_from_setting() {
        assert_eq!(DigitStyle::from_setting(1), DigitStyle::EdgeLit);
        assert_eq!(DigitStyle::from_setting(0), DigitStyle::FullSegment);
        assert_eq!(DigitStyle::from_setting(2), DigitStyle::FullSegment);
    }
}
