//! Integration tests for the color module

use numeral_clock::Color;
use palette::Srgb;

#[test]
fn wheel_hits_primary_colors() {
    assert_eq!(Color::wheel(0), Color::from_rgb(255, 0, 0));
    assert_eq!(Color::wheel(85), Color::from_rgb(0, 255, 0));
    assert_eq!(Color::wheel(170), Color::from_rgb(0, 0, 255));
    assert_eq!(Color::wheel(255), Color::from_rgb(255, 0, 0));
}

#[test]
fn wheel_blends_between_primaries() {
    // Half way from red to green
    let mid = Color::wheel(42);
    assert!(mid.red() > 0 && mid.green() > 0);
    assert_eq!(mid.blue(), 0);

    // Every wheel color has a channel sum of 255
    for position in 0..=255u8 {
        let color = Color::wheel(position);
        let sum = u16::from(color.red()) + u16::from(color.green()) + u16::from(color.blue());
        assert_eq!(sum, 255, "position {}", position);
    }
}

#[test]
fn channels_pack_as_rrggbb() {
    let color = Color::from_rgb(0x12, 0x34, 0x56);
    assert_eq!(color.packed(), 0x123456);
    assert_eq!(color.red(), 0x12);
    assert_eq!(color.green(), 0x34);
    assert_eq!(color.blue(), 0x56);
    assert_eq!(Color::new(0xFF12_3456), color);
}

#[test]
fn palette_conversion_preserves_channels() {
    let rgb: Srgb<u8> = Color::from_rgb(10, 20, 30).into();
    assert_eq!((rgb.red, rgb.green, rgb.blue), (10, 20, 30));
    assert_eq!(Color::from(Srgb::new(1u8, 2, 3)), Color::from_rgb(1, 2, 3));
}

#[test]
fn scaled_full_brightness_is_identity() {
    let color = Color::from_rgb(200, 100, 50);
    assert_eq!(color.scaled(1.0), color);
}

#[test]
fn scaled_zero_brightness_is_off() {
    assert_eq!(Color::from_rgb(200, 100, 50).scaled(0.0), Color::OFF);
}

#[test]
fn scaled_halves_each_channel() {
    let dim = Color::from_rgb(200, 100, 50).scaled(0.5);
    assert!((i16::from(dim.red()) - 100).abs() <= 1);
    assert!((i16::from(dim.green()) - 50).abs() <= 1);
    assert!((i16::from(dim.blue()) - 25).abs() <= 1);
}

#[test]
fn scaled_clamps_brightness() {
    let color = Color::from_rgb(200, 100, 50);
    assert_eq!(color.scaled(2.0), color);
    assert_eq!(color.scaled(-1.0), Color::OFF);
}
