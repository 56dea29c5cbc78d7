//! Packed 24-bit RGB colors and the hue wheel.
//!
//! LED strips take colors as `0xRRGGBB`, so that is the representation used
//! throughout the crate. Conversions to `palette::Srgb<u8>` are provided for
//! callers that want to do color math with `palette`.

use palette::Srgb;

/// A packed 24-bit RGB color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u32);

impl Color {
    /// All channels off.
    pub const OFF: Color = Color(0);

    /// Creates a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Color(packed & 0x00FF_FFFF)
    }

    /// Creates a color from its channels.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// True if every channel is zero.
    #[inline]
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Maps a hue position to a fully saturated color.
    ///
    /// Position 0 is red, 85 green and 170 blue; the wheel wraps back to red
    /// at 255 so consecutive positions always give neighbouring colors.
    pub const fn wheel(position: u8) -> Self {
        let pos = 255 - position;
        if pos < 85 {
            return Color::from_rgb(255 - pos * 3, 0, pos * 3);
        }
        if pos < 170 {
            let pos = pos - 85;
            return Color::from_rgb(0, pos * 3, 255 - pos * 3);
        }
        let pos = pos - 170;
        Color::from_rgb(pos * 3, 255 - pos * 3, 0)
    }

    /// Scales every channel by `brightness`, clamped to 0.0-1.0.
    pub fn scaled(self, brightness: f32) -> Self {
        let brightness = brightness.clamp(0.0, 1.0);
        let rgb: Srgb<f32> = Srgb::<u8>::from(self).into_format();
        let dimmed = Srgb::new(
            rgb.red * brightness,
            rgb.green * brightness,
            rgb.blue * brightness,
        );
        dimmed.into_format::<u8>().into()
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::new(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.packed()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Color::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}
