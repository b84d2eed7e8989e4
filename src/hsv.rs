//! Model a color with the HSV notation.

use serde::{Deserialize, Serialize};

use crate::{
    math::{in_closed, in_half_open},
    ColorError, Component, Result,
};

couleur_macros::gen_model! {
    /// A color specified with hue, saturation and value.
    #[derive(Default, Serialize, Deserialize)]
    pub struct Hsv {
        /// The hue in degrees, in `[0, 360)`.
        hue: Component,
        /// The saturation, in `[0, 1]`.
        saturation: Component,
        /// The value, in `[0, 1]`.
        value: Component,
    }
}

impl Hsv {
    /// Check that every component lies inside its domain.
    pub fn validate(&self) -> Result<()> {
        if !in_half_open(self.hue, 0.0, 360.0) {
            return Err(ColorError::range("hue", self.hue, "[0, 360)"));
        }
        if !in_closed(self.saturation, 0.0, 1.0) {
            return Err(ColorError::range("saturation", self.saturation, "[0, 1]"));
        }
        if !in_closed(self.value, 0.0, 1.0) {
            return Err(ColorError::range("value", self.value, "[0, 1]"));
        }
        Ok(())
    }
}
