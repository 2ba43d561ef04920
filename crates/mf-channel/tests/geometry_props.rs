//! Invariants of section geometry over random shapes and depths.

use mf_channel::{CrossSection, ShapeKind, build_section, compute_geometry};
use proptest::prelude::*;

fn open_shape() -> impl Strategy<Value = ShapeKind> {
    prop_oneof![
        (0.1_f64..50.0).prop_map(|b| ShapeKind::Rectangle { bottom_width: b }),
        (0.1_f64..50.0, 0.0_f64..5.0).prop_map(|(b, z)| ShapeKind::Trapezoid {
            bottom_width: b,
            side_slope: z
        }),
        (0.1_f64..5.0).prop_map(|z| ShapeKind::Triangle { side_slope: z }),
    ]
}

proptest! {
    #[test]
    fn open_channel_geometry_grows_with_depth(
        shape in open_shape(),
        y in 0.0_f64..20.0,
        dy in 0.001_f64..5.0,
    ) {
        let lo = compute_geometry(&CrossSection::new(shape, y));
        let hi = compute_geometry(&CrossSection::new(shape, y + dy));
        prop_assert!(hi.area >= lo.area);
        prop_assert!(hi.wetted_perimeter >= lo.wetted_perimeter);
        prop_assert!(hi.top_width >= lo.top_width);
    }

    #[test]
    fn pipe_area_and_perimeter_grow_with_depth(
        d in 0.5_f64..10.0,
        frac in 0.0_f64..0.99,
        dfrac in 0.001_f64..0.5,
    ) {
        let pipe = ShapeKind::Circle { diameter: d };
        let lo = compute_geometry(&CrossSection::new(pipe, frac * d));
        let hi = compute_geometry(&CrossSection::new(pipe, (frac + dfrac) * d));
        prop_assert!(hi.area >= lo.area - 1e-12);
        prop_assert!(hi.wetted_perimeter >= lo.wetted_perimeter - 1e-12);
    }

    #[test]
    fn pipe_segments_are_symmetric(d in 0.5_f64..10.0, frac in 0.0_f64..=1.0) {
        // A(y) + A(d - y) is always the full pipe
        let pipe = ShapeKind::Circle { diameter: d };
        let a = compute_geometry(&CrossSection::new(pipe, frac * d)).area;
        let b = compute_geometry(&CrossSection::new(pipe, (1.0 - frac) * d)).area;
        let full = std::f64::consts::PI * d * d / 4.0;
        prop_assert!((a + b - full).abs() < 1e-9 * full.max(1.0));
    }

    #[test]
    fn width_override_matches_direct_shape(b in 0.1_f64..50.0, z in 0.0_f64..5.0, y in 0.0_f64..10.0) {
        let placeholder = ShapeKind::Trapezoid { bottom_width: 1.0, side_slope: z };
        let via_override = compute_geometry(&build_section(&placeholder, y, Some(b)));
        let direct = compute_geometry(&CrossSection::new(
            ShapeKind::Trapezoid { bottom_width: b, side_slope: z },
            y,
        ));
        prop_assert_eq!(via_override, direct);
    }
}
