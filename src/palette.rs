//! Generate palettes of colors spread evenly around the hue wheel.

use crate::{
    convert::{rgb_to_hex, util},
    Color, Component, Hsv, Representation, Result,
};

/// The hue of entry `i` in a palette of `n`, kept below a full turn even
/// when `i * step` rounds up to 360.
fn hue_at(i: usize, n: usize) -> f64 {
    let hue = i as f64 * (360.0 / n as f64);
    hue.min(f64::from_bits(360f64.to_bits() - 1))
}

/// Generate `n` fully saturated and bright colors, starting at hue 0 and
/// stepping by `360 / n` degrees.
pub fn generate_hsv(n: usize) -> Vec<Hsv> {
    log::trace!("Generating {} evenly spaced hues", n);

    let last = Component::from_bits((360.0 as Component).to_bits() - 1);
    (0..n)
        .map(|i| Hsv::new((hue_at(i, n) as Component).min(last), 1.0, 1.0))
        .collect()
}

/// Generate `n` evenly spaced colors in the given representation.
pub fn generate(n: usize, representation: Representation) -> Vec<Color> {
    if representation == Representation::Hsv {
        return generate_hsv(n).into_iter().map(Color::Hsv).collect();
    }

    log::trace!("Generating {} evenly spaced {} colors", n, representation);

    // Generated components are always in range.
    let colors = (0..n).map(|i| util::hsv_to_rgb(hue_at(i, n), 1.0, 1.0));
    match representation {
        Representation::Hex => colors.map(|rgb| Color::Hex(rgb_to_hex(&rgb))).collect(),
        _ => colors.map(Color::Rgb).collect(),
    }
}

/// Generate `n` evenly spaced colors in the representation named by
/// `format`, one of `"RGB"`, `"HSV"` or `"HEX"`.
pub fn generate_with_format(n: usize, format: &str) -> Result<Vec<Color>> {
    let representation = Representation::from_format(format)?;
    Ok(generate(n, representation))
}
