//! Model a color with integer RGB channels.

use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

couleur_macros::gen_model! {
    /// A color given as red, green and blue channels in `[0, 255]`.
    #[derive(Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Rgb {
        /// The red component of the color.
        red: u8,
        /// The green component of the color.
        green: u8,
        /// The blue component of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Create a color from wider integers, failing if any channel lies
    /// outside `[0, 255]`.
    pub fn try_new(red: i32, green: i32, blue: i32) -> Result<Self> {
        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }
}

impl TryFrom<[i32; 3]> for Rgb {
    type Error = ColorError;

    fn try_from(value: [i32; 3]) -> Result<Self> {
        let [red, green, blue] = value;
        Self::try_new(red, green, blue)
    }
}

fn channel(component: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| ColorError::range(component, value, "[0, 255]"))
}
