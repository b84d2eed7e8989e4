//! A [`Color`] holds a color value in any of the supported representations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    convert::{hex_to_hsv, hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv},
    ColorError, Hsv, Result, Rgb,
};

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value used for HSV components and tolerances.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value used for HSV components and tolerances.
/// Conversions still compute in `f64`.
pub type Component = f32;

/// The encodings a color can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Representation {
    /// Three integer channels in `[0, 255]`.
    Rgb,
    /// Hue in degrees with fractional saturation and value.
    Hsv,
    /// A `#RRGGBB` string.
    Hex,
}

impl Representation {
    /// All representations.
    pub const ALL: [Representation; 3] = [Self::Rgb, Self::Hsv, Self::Hex];

    /// The selector string for this representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Hex => "HEX",
        }
    }

    /// Parse the mode selector used when comparing colors. Only the exact
    /// strings `"RGB"`, `"HSV"` and `"HEX"` are accepted.
    pub fn from_mode(mode: &str) -> Result<Self> {
        Self::lookup(mode).ok_or_else(|| {
            log::debug!("Rejecting comparison mode '{}'", mode);
            ColorError::InvalidMode(mode.to_owned())
        })
    }

    /// Parse the format selector used when generating palettes. Accepts the
    /// same strings as [`Representation::from_mode`].
    pub fn from_format(format: &str) -> Result<Self> {
        Self::lookup(format).ok_or_else(|| {
            log::debug!("Rejecting palette format '{}'", format);
            ColorError::InvalidFormat(format.to_owned())
        })
    }

    fn lookup(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color value tagged with its representation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// A color given as RGB channels.
    Rgb(Rgb),
    /// A color given in the HSV notation.
    Hsv(Hsv),
    /// A color given as a hex string. Not validated until converted.
    Hex(String),
}

impl Color {
    /// The representation the value is stored in.
    pub fn representation(&self) -> Representation {
        match self {
            Color::Rgb(_) => Representation::Rgb,
            Color::Hsv(_) => Representation::Hsv,
            Color::Hex(_) => Representation::Hex,
        }
    }

    /// Convert this color to the given representation. RGB and HSV colors
    /// already in `representation` are returned unchanged; hex strings are
    /// always validated and come back in `#RRGGBB` form.
    pub fn to_representation(&self, representation: Representation) -> Result<Self> {
        use Representation as R;

        Ok(match (self, representation) {
            (Color::Rgb(_), R::Rgb) | (Color::Hsv(_), R::Hsv) => self.clone(),
            (Color::Rgb(rgb), R::Hsv) => Color::Hsv(rgb_to_hsv(rgb)),
            (Color::Rgb(rgb), R::Hex) => Color::Hex(rgb_to_hex(rgb)),
            (Color::Hsv(hsv), R::Rgb) => Color::Rgb(hsv_to_rgb(hsv)?),
            (Color::Hsv(hsv), R::Hex) => Color::Hex(rgb_to_hex(&hsv_to_rgb(hsv)?)),
            (Color::Hex(hex), R::Rgb) => Color::Rgb(hex_to_rgb(hex)?),
            (Color::Hex(hex), R::Hsv) => Color::Hsv(hex_to_hsv(hex)?),
            (Color::Hex(hex), R::Hex) => Color::Hex(rgb_to_hex(&hex_to_rgb(hex)?)),
        })
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Color::Hsv(value)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color::Hex(value.to_owned())
    }
}
