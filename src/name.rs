//! Classify colors into a small set of human readable names.
//!
//! Classification walks an ordered table of rules and the first rule that
//! matches names the color. The achromatic checks come before the hue
//! buckets, so a desaturated red and a desaturated blue are both `gray`.
//!
//! The table can be replaced through [`Classifier`], which serializes with
//! serde:
//!
//! ```rust
//! use couleur::{Classifier, ColorName, Hsv, Rule};
//! let classifier = Classifier::new(
//!     vec![(Rule::ValueBelow(0.5), ColorName::Black)],
//!     ColorName::White,
//! );
//! assert_eq!(classifier.classify(&Hsv::new(0.0, 1.0, 0.2)), ColorName::Black);
//! assert_eq!(classifier.classify(&Hsv::new(0.0, 1.0, 0.8)), ColorName::White);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    convert::{hex_to_hsv, rgb_to_hsv},
    Color, Component, Hsv, Result,
};

/// The names a color can be classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    /// Very dark colors.
    Black,
    /// Very bright colors.
    White,
    /// Colors with hardly any saturation.
    Gray,
    /// Hues in `[0, 30)` and `[330, 360)`.
    Red,
    /// Hues in `[30, 60)`.
    Orange,
    /// Hues in `[60, 90)`.
    Yellow,
    /// Hues in `[90, 150)`.
    Green,
    /// Hues in `[150, 210)`.
    Cyan,
    /// Hues in `[210, 270)`.
    Blue,
    /// Hues in `[270, 330)`.
    Magenta,
}

impl ColorName {
    /// Every name, in listing order.
    pub const ALL: [ColorName; 10] = [
        Self::Black,
        Self::White,
        Self::Gray,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Magenta,
    ];

    /// The lowercase token for this name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every color name: black, white, gray, red, orange, yellow, green, cyan,
/// blue and magenta.
pub fn name_list() -> &'static [ColorName] {
    &ColorName::ALL
}

/// A single test on an HSV color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Saturation strictly below the threshold.
    SaturationBelow(Component),
    /// Value strictly below the threshold.
    ValueBelow(Component),
    /// Value strictly above the threshold.
    ValueAbove(Component),
    /// Hue strictly below the threshold, in degrees.
    HueBelow(Component),
}

impl Rule {
    /// Returns true if `hsv` passes this rule.
    pub fn matches(&self, hsv: &Hsv) -> bool {
        match *self {
            Rule::SaturationBelow(threshold) => hsv.saturation < threshold,
            Rule::ValueBelow(threshold) => hsv.value < threshold,
            Rule::ValueAbove(threshold) => hsv.value > threshold,
            Rule::HueBelow(threshold) => hsv.hue < threshold,
        }
    }
}

/// Rules applied by [`get_color_name`]. Hues past the last bucket wrap back
/// to red.
static DEFAULT_RULES: &[(Rule, ColorName)] = &[
    (Rule::SaturationBelow(0.1), ColorName::Gray),
    (Rule::ValueBelow(0.1), ColorName::Black),
    (Rule::ValueAbove(0.9), ColorName::White),
    (Rule::HueBelow(30.0), ColorName::Red),
    (Rule::HueBelow(60.0), ColorName::Orange),
    (Rule::HueBelow(90.0), ColorName::Yellow),
    (Rule::HueBelow(150.0), ColorName::Green),
    (Rule::HueBelow(210.0), ColorName::Cyan),
    (Rule::HueBelow(270.0), ColorName::Blue),
    (Rule::HueBelow(330.0), ColorName::Magenta),
];

const DEFAULT_FALLBACK: ColorName = ColorName::Red;

fn classify_with(rules: &[(Rule, ColorName)], fallback: ColorName, hsv: &Hsv) -> ColorName {
    rules
        .iter()
        .find(|(rule, _)| rule.matches(hsv))
        .map_or(fallback, |&(_, name)| name)
}

/// Name an HSV color. The components are not range checked.
pub fn get_color_name(hsv: &Hsv) -> ColorName {
    classify_with(DEFAULT_RULES, DEFAULT_FALLBACK, hsv)
}

/// An ordered classification table with a name for colors no rule matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    /// Rules tried in order. The first match names the color.
    pub rules: Vec<(Rule, ColorName)>,
    /// Name used when no rule matches.
    pub fallback: ColorName,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), DEFAULT_FALLBACK)
    }
}

impl Classifier {
    /// Create a classifier from rules and a fallback name.
    pub fn new(rules: Vec<(Rule, ColorName)>, fallback: ColorName) -> Self {
        Self { rules, fallback }
    }

    /// Name an HSV color.
    pub fn classify(&self, hsv: &Hsv) -> ColorName {
        classify_with(&self.rules, self.fallback, hsv)
    }
}

impl Color {
    /// Name this color with the default rules, converting it to HSV first.
    pub fn name(&self) -> Result<ColorName> {
        let hsv = match self {
            Color::Hsv(hsv) => *hsv,
            Color::Rgb(rgb) => rgb_to_hsv(rgb),
            Color::Hex(hex) => hex_to_hsv(hex)?,
        };
        Ok(get_color_name(&hsv))
    }
}
