//! Conversions between the HEX, RGB and HSV representations.
//!
//! HEX and RGB convert losslessly. HSV to RGB truncates each channel after
//! scaling by 255, so RGB to HSV and back may lose one unit per channel.
//!
//! ```rust
//! use couleur::{hex_to_rgb, rgb_to_hex, Rgb};
//! let orange = hex_to_rgb("#ff8000").unwrap();
//! assert_eq!(orange, Rgb::new(255, 128, 0));
//! assert_eq!(rgb_to_hex(&orange), "#FF8000");
//! ```

use crate::{
    math::{round_to, wrap},
    Color, ColorError, Component, Hsv, Result, Rgb,
};

/// Parse a hex color with an optional leading `#` into RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(ColorError::format(hex, "expected 6 hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::format(hex, "contains a non-hex character"));
    }

    let pair = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::format(hex, "contains a non-hex character"))
    };

    Ok(Rgb::new(pair(0)?, pair(2)?, pair(4)?))
}

/// Format RGB channels as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Convert a color from the HSV notation to RGB channels. Fails if any
/// component lies outside its domain.
pub fn hsv_to_rgb(hsv: &Hsv) -> Result<Rgb> {
    hsv.validate()?;
    Ok(util::hsv_to_rgb(
        f64::from(hsv.hue),
        f64::from(hsv.saturation),
        f64::from(hsv.value),
    ))
}

/// Convert RGB channels to the HSV notation. The hue is rounded to 2
/// decimal places and is 0 for achromatic colors.
pub fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
    util::rgb_to_hsv(rgb)
}

/// Convert a hex color to the HSV notation.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv> {
    hex_to_rgb(hex).map(|rgb| rgb_to_hsv(&rgb))
}

/// Convert a color from the HSV notation to a hex color.
pub fn hsv_to_hex(hsv: &Hsv) -> Result<String> {
    hsv_to_rgb(hsv).map(|rgb| rgb_to_hex(&rgb))
}

/// Implemented by every representation that can be brought to RGB channels.
pub trait ToRgb {
    /// Convert the color to RGB channels.
    fn to_rgb(&self) -> Result<Rgb>;
}

impl ToRgb for Rgb {
    fn to_rgb(&self) -> Result<Rgb> {
        Ok(*self)
    }
}

impl ToRgb for Hsv {
    fn to_rgb(&self) -> Result<Rgb> {
        hsv_to_rgb(self)
    }
}

impl ToRgb for str {
    fn to_rgb(&self) -> Result<Rgb> {
        hex_to_rgb(self)
    }
}

impl ToRgb for String {
    fn to_rgb(&self) -> Result<Rgb> {
        hex_to_rgb(self)
    }
}

impl ToRgb for Color {
    fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Color::Rgb(rgb) => rgb.to_rgb(),
            Color::Hsv(hsv) => hsv.to_rgb(),
            Color::Hex(hex) => hex.to_rgb(),
        }
    }
}

pub(crate) mod util {
    use super::*;

    // Channel math runs in f64 whatever `Component` is, so truncation lands
    // on the same integers for both component widths.

    /// Scale a unit channel to `[0, 255]`, dropping the fraction.
    fn truncate(c: f64) -> u8 {
        (c * 255.0) as u8
    }

    /// Sector based HSV to RGB without domain checks.
    pub fn hsv_to_rgb(hue: f64, s: f64, v: f64) -> Rgb {
        let h = hue / 360.0 * 6.0;
        let i = h.floor();
        let f = h - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match i as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(truncate(r), truncate(g), truncate(b))
    }

    pub fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
        let [red, green, blue] = rgb.to_array().map(|c| f64::from(c) / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let saturation = if max != 0.0 { delta / max } else { 0.0 };

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            60.0 * wrap((green - blue) / delta, 6.0)
        } else if max == green {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        // Wrap again in case rounding lands on 360.
        let hue = wrap(round_to(wrap(hue, 360.0), 100.0), 360.0);

        Hsv::new(hue as Component, saturation as Component, max as Component)
    }
}
