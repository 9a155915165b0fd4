//! Color notation parsing and the HSL luminosity adjustment used by the extended sheet.

#![forbid(unsafe_code)]

use palette::{FromColor, Hsl, Srgb, encoding};

/// Resolved, opaque sheet color.
pub type Rgb = Srgb<u8>;

/// HSL in normalized `[0, 1]` components, hue in degrees.
pub type HslColor = Hsl<encoding::Srgb, f64>;

// Keeps exact channel values such as 45/255 from truncating to 44.
const TRUNCATE_EPSILON: f64 = 1e-6;

/// Resolve a CSS color string into an RGB triad.
///
/// Anything `csscolorparser` understands is accepted: `#rgb`, `#rgba`,
/// `#rrggbb`, `#rrggbbaa`, CSS named colors, and the `rgb()`, `hsl()`, `hwb()`
/// functional forms in both comma and space syntax. Alpha is dropped.
///
/// ```ignore
/// parse_color("#FF0000")            // Some(255, 0, 0)
/// parse_color("CornflowerBlue")     // Some(100, 149, 237)
/// parse_color("rgb(100%, 0%, 0%)")  // Some(255, 0, 0)
/// parse_color("not-a-color")        // None
/// ```
pub fn parse_color(value: &str) -> Option<Rgb> {
    let [red, green, blue, _alpha] = csscolorparser::parse(value.trim()).ok()?.to_rgba8();
    Some(Rgb::new(red, green, blue))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_channel(value: f64) -> u8 {
    (value * 255.0 + TRUNCATE_EPSILON).clamp(0.0, 255.0) as u8
}

/// Convert an RGB triad into normalized HSL.
pub fn to_hsl(color: Rgb) -> HslColor {
    HslColor::from_color(color.into_format::<f64>())
}

/// Convert normalized HSL back into an RGB triad, truncating each channel.
pub fn from_hsl(hsl: HslColor) -> Rgb {
    let rgb = Srgb::<f64>::from_color(hsl);
    Rgb::new(
        truncate_channel(rgb.red),
        truncate_channel(rgb.green),
        truncate_channel(rgb.blue),
    )
}

/// Replace the lightness of `color` with `lum / 255`, keeping hue and saturation.
///
/// Lightness is clamped to `[0, 1]`, so luminosities past 255 saturate to white
/// and negative ones to black.
pub fn adjust_lum(color: Rgb, lum: f64) -> Rgb {
    let mut hsl = to_hsl(color);
    hsl.lightness = (lum / 255.0).clamp(0.0, 1.0);
    from_hsl(hsl)
}
