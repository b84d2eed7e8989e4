//! couleur converts colors between hex strings, RGB channels and the HSV
//! notation, measures how far apart two colors are, names colors and
//! generates evenly spaced palettes.
//!
//! ```rust
//! use couleur::{get_color_name, hex_to_hsv, is_near, ColorName};
//! let hsv = hex_to_hsv("#1E64C8").unwrap();
//! assert_eq!(get_color_name(&hsv), ColorName::Blue);
//! assert!(is_near("#1E64C8", "#1F64C8", 1.0).unwrap());
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hsv;
mod math;
mod metric;
mod name;
mod palette;
mod rgb;


pub use color::{Color, Component, Representation};
pub use convert::{hex_to_hsv, hex_to_rgb, hsv_to_hex, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, ToRgb};
pub use error::{ColorError, Result};
pub use hsv::Hsv;
pub use metric::{distance_percent, is_near, is_near_with_mode, rgb_distance};
pub use name::{get_color_name, name_list, Classifier, ColorName, Rule};
pub use palette::{generate, generate_hsv, generate_with_format};
pub use rgb::Rgb;
