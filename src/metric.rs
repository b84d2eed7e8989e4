//! Distance between colors, measured in RGB space.
//!
//! Distances are expressed as a percentage of the diagonal of the RGB cube,
//! so black and white are 100% apart.
//!
//! The representation both inputs are read in is picked by the type they
//! share:
//!
//! ```rust
//! use couleur::{is_near, Hsv, Rgb};
//! assert!(is_near("#000000", "#010101", 1.0).unwrap());
//! assert!(!is_near(&Rgb::new(0, 0, 0), &Rgb::new(255, 255, 255), 1.0).unwrap());
//! assert!(is_near(&Hsv::new(0.0, 1.0, 1.0), &Hsv::new(1.0, 1.0, 1.0), 2.0).unwrap());
//! ```

use crate::{convert::ToRgb, Color, ColorError, Component, Representation, Result, Rgb};

/// Euclidean distance between two colors in RGB space.
pub fn rgb_distance(a: &Rgb, b: &Rgb) -> Component {
    let [dr, dg, db] = [
        i32::from(a.red) - i32::from(b.red),
        i32::from(a.green) - i32::from(b.green),
        i32::from(a.blue) - i32::from(b.blue),
    ];
    ((dr * dr + dg * dg + db * db) as Component).sqrt()
}

/// The largest possible [`rgb_distance`], between black and white.
fn max_distance() -> Component {
    ((3 * 255 * 255) as Component).sqrt()
}

/// Distance between two colors as a percentage of the largest possible
/// distance.
pub fn distance_percent<C: ToRgb + ?Sized>(a: &C, b: &C) -> Result<Component> {
    let a = a.to_rgb()?;
    let b = b.to_rgb()?;
    Ok(rgb_distance(&a, &b) / max_distance() * 100.0)
}

/// Returns true if the two colors are at most `tolerance` percent apart.
///
/// A tolerance of 0 only accepts identical RGB channels and a tolerance of
/// 100 or more accepts any pair.
pub fn is_near<C: ToRgb + ?Sized>(a: &C, b: &C, tolerance: Component) -> Result<bool> {
    Ok(distance_percent(a, b)? <= tolerance)
}

/// Compare two colors read in the representation named by `mode`, one of
/// `"RGB"`, `"HSV"` or `"HEX"`. Both colors must carry that representation.
pub fn is_near_with_mode(a: &Color, b: &Color, tolerance: Component, mode: &str) -> Result<bool> {
    let mode = Representation::from_mode(mode)?;

    if let Some(other) = [a, b].into_iter().find(|c| c.representation() != mode) {
        log::debug!(
            "Comparing in {} mode but got a {} color",
            mode,
            other.representation()
        );
        return Err(ColorError::InvalidMode(format!(
            "{} does not match a {} color",
            mode,
            other.representation()
        )));
    }

    is_near(a, b, tolerance)
}
