//! Forward/inverse consistency of the Manning solver.

use mf_channel::{ShapeKind, build_section, compute_geometry};
use mf_core::GRAVITY;
use mf_solver::{ManningInput, SolveFor, critical_depth, solve};
use proptest::prelude::*;

fn forward(shape: ShapeKind, y: f64, n: f64, s: f64) -> f64 {
    let input = ManningInput::new(shape, SolveFor::Discharge)
        .with_depth(y)
        .with_roughness(n)
        .with_slope(s);
    solve(&input).unwrap().discharge
}

#[test]
fn rectangle_depth_round_trip() {
    let rect = ShapeKind::Rectangle { bottom_width: 10.0 };
    let q = forward(rect, 3.0, 0.013, 0.001);

    let input = ManningInput::new(rect, SolveFor::Depth)
        .with_roughness(0.013)
        .with_slope(0.001)
        .with_discharge(q);
    let result = solve(&input).unwrap();

    assert!((result.depth - 3.0).abs() < 1e-2, "y = {}", result.depth);
    assert!((result.discharge - q).abs() < 1e-9);
}

#[test]
fn trapezoid_depth_round_trip() {
    let trap = ShapeKind::Trapezoid {
        bottom_width: 6.0,
        side_slope: 2.0,
    };
    let q = forward(trap, 3.0, 0.025, 0.002);
    let result = solve(
        &ManningInput::new(trap, SolveFor::Depth)
            .with_roughness(0.025)
            .with_slope(0.002)
            .with_discharge(q),
    )
    .unwrap();
    assert!((result.depth - 3.0).abs() < 1e-2, "y = {}", result.depth);
    assert!((result.area - 36.0).abs() < 0.1);
}

#[test]
fn pipe_depth_round_trip_below_crown() {
    let pipe = ShapeKind::Circle { diameter: 4.0 };
    let q = forward(pipe, 2.0, 0.013, 0.001);
    let result = solve(
        &ManningInput::new(pipe, SolveFor::Depth)
            .with_roughness(0.013)
            .with_slope(0.001)
            .with_discharge(q),
    )
    .unwrap();
    assert!((result.depth - 2.0).abs() < 1e-2, "y = {}", result.depth);
}

#[test]
fn width_round_trip_recovers_depth() {
    let rect = ShapeKind::Rectangle { bottom_width: 10.0 };
    let q = forward(rect, 3.0, 0.013, 0.001);

    // Width placeholder is ignored when solving for it
    let width = solve(
        &ManningInput::new(ShapeKind::Rectangle { bottom_width: 0.0 }, SolveFor::BottomWidth)
            .with_depth(3.0)
            .with_roughness(0.013)
            .with_slope(0.001)
            .with_discharge(q),
    )
    .unwrap();
    let b = width.bottom_width.unwrap();
    assert!((b - 10.0).abs() < 1e-3, "b = {b}");
    assert!((width.depth - 3.0).abs() < 1e-12);

    let depth = solve(
        &ManningInput::new(ShapeKind::Rectangle { bottom_width: b }, SolveFor::Depth)
            .with_roughness(0.013)
            .with_slope(0.001)
            .with_discharge(q),
    )
    .unwrap();
    assert!((depth.depth - 3.0).abs() < 1e-2, "y = {}", depth.depth);
}

#[test]
fn report_critical_depth_uses_solved_width() {
    let trap = ShapeKind::Trapezoid {
        bottom_width: 1.0,
        side_slope: 2.0,
    };
    let result = solve(
        &ManningInput::new(trap, SolveFor::BottomWidth)
            .with_depth(2.0)
            .with_roughness(0.025)
            .with_slope(0.001)
            .with_discharge(150.0),
    )
    .unwrap();

    let b = result.bottom_width.unwrap();
    let expected = critical_depth(150.0, &trap, Some(b));
    assert!((result.critical_depth - expected).abs() < 1e-9);

    let geo = compute_geometry(&build_section(&trap, result.critical_depth, Some(b)));
    let c = 150.0 * 150.0 * geo.top_width / (GRAVITY * geo.area.powi(3));
    assert!((c - 1.0).abs() < 1e-3, "Q²T/gA³ = {c}");
}

#[test]
fn every_shape_reports_a_full_state() {
    let shapes = [
        ShapeKind::Rectangle { bottom_width: 10.0 },
        ShapeKind::Trapezoid {
            bottom_width: 6.0,
            side_slope: 2.0,
        },
        ShapeKind::Triangle { side_slope: 1.5 },
        ShapeKind::Circle { diameter: 4.0 },
    ];
    for shape in shapes {
        let r = solve(
            &ManningInput::new(shape, SolveFor::Discharge)
                .with_depth(2.0)
                .with_roughness(0.015)
                .with_slope(0.005),
        )
        .unwrap();
        assert!(r.discharge > 0.0, "{}", shape.name());
        assert!(r.velocity > 0.0, "{}", shape.name());
        assert!(r.froude_number > 0.0, "{}", shape.name());
        assert!(r.critical_depth > 0.0, "{}", shape.name());
        assert!(r.specific_energy > r.depth, "{}", shape.name());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn open_channel_depth_round_trip(
        b in 1.0_f64..50.0,
        z in 0.0_f64..4.0,
        y in 0.2_f64..15.0,
        n in 0.010_f64..0.08,
        s in 0.0001_f64..0.05,
    ) {
        let trap = ShapeKind::Trapezoid { bottom_width: b, side_slope: z };
        let q = forward(trap, y, n, s);
        let r = solve(
            &ManningInput::new(trap, SolveFor::Depth)
                .with_roughness(n)
                .with_slope(s)
                .with_discharge(q),
        )
        .unwrap();
        prop_assert!((r.depth - y).abs() < 1e-2, "y = {}, solved {}", y, r.depth);
        prop_assert!(r.is_settled());
    }

    #[test]
    fn algebraic_inversions_recover_inputs(
        y in 0.2_f64..10.0,
        n in 0.010_f64..0.08,
        s in 0.0001_f64..0.05,
    ) {
        let tri = ShapeKind::Triangle { side_slope: 2.0 };
        let q = forward(tri, y, n, s);
        let base = ManningInput::new(tri, SolveFor::Roughness)
            .with_depth(y)
            .with_roughness(n)
            .with_slope(s)
            .with_discharge(q);

        let rn = solve(&base).unwrap();
        prop_assert!((rn.roughness - n).abs() < 1e-9 * n.max(1.0));

        let rs = solve(&ManningInput { solve_for: SolveFor::Slope, ..base }).unwrap();
        prop_assert!((rs.slope - s).abs() < 1e-9);
    }
}
