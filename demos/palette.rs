//! Print an evenly spaced palette with the hex code and name of each color.

use couleur::{generate_hsv, get_color_name, hsv_to_hex, Hsv, Result};

pub fn main() -> Result<()> {
    let n = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(12);

    for hsv in generate_hsv(n) {
        // Darken a little so the hue buckets show instead of "white".
        let hsv = Hsv::new(hsv.hue, hsv.saturation, 0.8);
        println!(
            "{:>7.2}  {}  {}",
            hsv.hue,
            hsv_to_hex(&hsv)?,
            get_color_name(&hsv)
        );
    }

    Ok(())
}
