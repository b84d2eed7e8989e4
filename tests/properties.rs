//! Properties that hold across the whole conversion and comparison surface.

use couleur::{
    generate, generate_hsv, get_color_name, hex_to_rgb, hsv_to_rgb, is_near, rgb_to_hex,
    rgb_to_hsv, Color, ColorError, ColorName, Component, Hsv, Representation, Rgb,
};

/// A coarse walk over the RGB cube, corners included.
fn rgb_grid() -> impl Iterator<Item = Rgb> {
    let steps = (0..=255u8).step_by(17);
    steps.clone().flat_map(move |r| {
        let steps = steps.clone();
        steps
            .clone()
            .flat_map(move |g| steps.clone().map(move |b| Rgb::new(r, g, b)))
    })
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn hex_round_trip_is_exact_and_uppercase() {
    for hex in ["#FF8000", "ff8000", "#a1B2c3", "000000", "#FFFFFF", "#0aF09e"] {
        let digits = hex.trim_start_matches('#').to_uppercase();
        let rgb = hex_to_rgb(hex).unwrap();
        assert_eq!(rgb_to_hex(&rgb), format!("#{digits}"));
    }
}

#[test]
fn rgb_round_trip_through_hex_is_exact() {
    for rgb in rgb_grid() {
        assert_eq!(hex_to_rgb(&rgb_to_hex(&rgb)), Ok(rgb));
    }
}

#[test]
fn rgb_round_trip_through_hsv_is_within_one() {
    for rgb in rgb_grid().chain([Rgb::new(255, 128, 0), Rgb::new(1, 2, 3)]) {
        let hsv = rgb_to_hsv(&rgb);
        let back = hsv_to_rgb(&hsv).unwrap();
        for (a, b) in rgb.to_array().into_iter().zip(back.to_array()) {
            assert!(
                a.abs_diff(b) <= 1,
                "{rgb:?} -> {hsv:?} -> {back:?} drifted by more than one"
            );
        }
    }
}

// ============================================================================
// Near equality
// ============================================================================

#[test]
fn every_color_is_near_itself_at_zero_tolerance() {
    for rgb in rgb_grid() {
        let hex = rgb_to_hex(&rgb);
        let hsv = rgb_to_hsv(&rgb);

        assert_eq!(is_near(&rgb, &rgb, 0.0), Ok(true));
        assert_eq!(is_near(hex.as_str(), hex.as_str(), 0.0), Ok(true));
        assert_eq!(is_near(&hsv, &hsv, 0.0), Ok(true));
    }
}

#[test]
fn near_equality_is_symmetric() {
    let colors: Vec<Rgb> = rgb_grid().step_by(97).collect();
    for a in &colors {
        for b in &colors {
            for tolerance in [0.0, 1.0, 10.0, 50.0] {
                assert_eq!(is_near(a, b, tolerance), is_near(b, a, tolerance));
            }
        }
    }
}

#[test]
fn full_tolerance_accepts_anything() {
    assert_eq!(is_near("#000000", "#FFFFFF", 100.0), Ok(true));
    assert_eq!(is_near("#000000", "#FFFFFF", 99.99), Ok(false));
}

#[test]
fn documented_scenario() {
    assert_eq!(hex_to_rgb("#FF8000"), Ok(Rgb::new(255, 128, 0)));
    assert_eq!(rgb_to_hex(&Rgb::new(255, 128, 0)), "#FF8000");
    assert_eq!(hsv_to_rgb(&Hsv::new(0.0, 0.0, 0.0)), Ok(Rgb::new(0, 0, 0)));
    assert_eq!(is_near("#000000", "#010101", 1.0), Ok(true));
    assert_eq!(is_near("#000000", "#FFFFFF", 1.0), Ok(false));
}

// ============================================================================
// Domains
// ============================================================================

#[test]
fn hue_domain_is_half_open() {
    assert!(hsv_to_rgb(&Hsv::new(0.0, 1.0, 1.0)).is_ok());
    assert!(matches!(
        hsv_to_rgb(&Hsv::new(360.0, 1.0, 1.0)),
        Err(ColorError::Range { component: "hue", .. })
    ));
}

#[test]
fn rgb_domain_is_checked_at_construction() {
    assert!(matches!(
        Rgb::try_new(256, 0, 0),
        Err(ColorError::Range { component: "red", .. })
    ));
    assert_eq!(Rgb::try_new(255, 0, 0), Ok(Rgb::new(255, 0, 0)));
}

// ============================================================================
// Classification and palettes
// ============================================================================

#[test]
fn classification_examples() {
    assert_eq!(get_color_name(&Hsv::new(10.0, 0.05, 0.9)), ColorName::Gray);
    assert_eq!(get_color_name(&Hsv::new(10.0, 1.0, 0.05)), ColorName::Black);
    assert_eq!(get_color_name(&Hsv::new(0.0, 1.0, 1.0)), ColorName::White);
    assert_eq!(get_color_name(&Hsv::new(0.0, 1.0, 0.5)), ColorName::Red);
    assert_eq!(get_color_name(&Hsv::new(200.0, 1.0, 0.5)), ColorName::Cyan);
    assert_eq!(get_color_name(&Hsv::new(240.0, 1.0, 0.5)), ColorName::Blue);
}

#[test]
fn palettes() {
    for n in 1..=12 {
        let hsv = generate_hsv(n);
        assert_eq!(hsv.len(), n);
        let step = 360.0 / n as Component;
        for pair in hsv.windows(2) {
            approx::assert_abs_diff_eq!(pair[1].hue - pair[0].hue, step, epsilon = 1e-3);
        }

        for representation in Representation::ALL {
            let colors = generate(n, representation);
            assert_eq!(colors.len(), n);
            assert!(colors.iter().all(|c| c.representation() == representation));
        }
    }

    assert!(generate(0, Representation::Hex).is_empty());
}

#[test]
fn palette_colors_are_distinct() {
    let colors = generate(6, Representation::Hex);
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_eq!(is_near::<Color>(a, b, 10.0), Ok(false));
        }
    }
}
