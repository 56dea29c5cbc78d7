//! Persisted user settings.
//!
//! Storage is the host's concern; the clock only reads and writes integer
//! values through [`Settings`]. [`MemorySettings`] is a RAM-only store
//! seeded with the factory defaults.

/// Keys of the persisted settings the clock uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    /// Default [`AnimationType`](crate::AnimationType), as its discriminant.
    AnimationType,
    /// Theme hue on the color wheel, 0-255.
    Color,
    /// 1 for a 24-hour display, anything else for 12-hour.
    TwentyFourHourMode,
    /// 1 to blink the separator LEDs every other second.
    BlinkingSeparators,
    /// 1 for edge-lit digits, anything else for full-segment digits.
    DigitType,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::AnimationType,
        Setting::Color,
        Setting::TwentyFourHourMode,
        Setting::BlinkingSeparators,
        Setting::DigitType,
    ];

    /// Factory default value.
    pub const fn default_value(self) -> i32 {
        match self {
            Setting::AnimationType => 0,
            Setting::Color => 0,
            Setting::TwentyFourHourMode => 1,
            Setting::BlinkingSeparators => 1,
            Setting::DigitType => 1,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Trait for abstracting settings storage.
///
/// Reads are assumed to always succeed; a store with missing or corrupt
/// data should return the default for that key.
pub trait Settings {
    /// Returns the value stored under `key`.
    fn get(&self, key: Setting) -> i32;

    /// Stores `value` under `key`.
    fn set(&mut self, key: Setting, value: i32);

    /// Theme hue as a color wheel position.
    fn theme_hue(&self) -> u8 {
        self.get(Setting::Color) as u8
    }
}

/// In-memory settings store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySettings {
    values: [i32; Setting::ALL.len()],
}

impl MemorySettings {
    /// Creates a store holding the factory defaults.
    pub const fn new() -> Self {
        Self {
            values: [
                Setting::AnimationType.default_value(),
                Setting::Color.default_value(),
                Setting::TwentyFourHourMode.default_value(),
                Setting::BlinkingSeparators.default_value(),
                Setting::DigitType.default_value(),
            ],
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, key: Setting, value: i32) -> Self {
        self.set(key, value);
        self
    }

    /// Restores every key to its factory default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: Setting) -> i32 {
        self.values[key.slot()]
    }

    fn set(&mut self, key: Setting, value: i32) {
        self.values[key.slot()] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_holds_defaults() {
        let settings = MemorySettings::new();
        for key in Setting::ALL {
            assert_eq!(settings.get(key), key.default_value());
        }
    }

    #[test]
    fn set_only_touches_its_key() {
        let mut settings = MemorySettings::new();
        settings.set(Setting::Color, 42);

        assert_eq!(settings.get(Setting::Color), 42);
        assert_eq!(settings.get(Setting::AnimationType), 0);
        assert_eq!(settings.get(Setting::DigitType), 1);
    }

    #[test]
    fn theme_hue_truncates_to_wheel_position() {
        let settings = MemorySettings::new().with(Setting::Color, 256 + 7);
        assert_eq!(settings.theme_hue(), 7);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut settings = MemorySettings::new()
            .with(Setting::TwentyFourHourMode, 0)
            .with(Setting::AnimationType, 3);
        settings.reset();
        assert_eq!(settings, MemorySettings::new());
    }
}
