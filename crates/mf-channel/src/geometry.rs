//! Section geometry at a flow depth.

use crate::shape::{CrossSection, ShapeKind};
use mf_core::{Real, ratio_or_zero};

/// Hydraulic geometry of a wetted cross section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryResult {
    /// Flow area A
    pub area: Real,
    /// Wetted perimeter P
    pub wetted_perimeter: Real,
    /// Free-surface width T
    pub top_width: Real,
    /// R = A/P, 0 for a dry section
    pub hydraulic_radius: Real,
    /// D = A/T, 0 when the top width vanishes
    pub hydraulic_depth: Real,
}

/// Compute area, perimeter and top width of a section, plus derived ratios.
pub fn compute_geometry(section: &CrossSection) -> GeometryResult {
    let y = section.effective_depth();
    match section.shape {
        ShapeKind::Rectangle { bottom_width } => rectangle(bottom_width, y),
        ShapeKind::Trapezoid {
            bottom_width,
            side_slope,
        } => trapezoid(bottom_width, side_slope, y),
        ShapeKind::Triangle { side_slope } => triangle(side_slope, y),
        ShapeKind::Circle { diameter } => circle(diameter, y),
    }
}

fn rectangle(b: Real, y: Real) -> GeometryResult {
    finish(b * y, b + 2.0 * y, b)
}

fn trapezoid(b: Real, z: Real, y: Real) -> GeometryResult {
    let area = (b + z * y) * y;
    let wetted_perimeter = b + 2.0 * y * (1.0 + z * z).sqrt();
    let top_width = b + 2.0 * z * y;
    finish(area, wetted_perimeter, top_width)
}

fn triangle(z: Real, y: Real) -> GeometryResult {
    let area = z * y * y;
    let wetted_perimeter = 2.0 * y * (1.0 + z * z).sqrt();
    let top_width = 2.0 * z * y;
    finish(area, wetted_perimeter, top_width)
}

/// Circular segment; `y` is already clamped to `[0, d]`.
fn circle(d: Real, y: Real) -> GeometryResult {
    let r = d / 2.0;
    // Central angle subtended by the free surface
    let theta = 2.0 * ((r - y) / r).acos();
    let area = (r * r / 2.0) * (theta - theta.sin());
    let wetted_perimeter = r * theta;
    let top_width = d * (theta / 2.0).sin();
    finish(area, wetted_perimeter, top_width)
}

fn finish(area: Real, wetted_perimeter: Real, top_width: Real) -> GeometryResult {
    GeometryResult {
        area,
        wetted_perimeter,
        top_width,
        hydraulic_radius: ratio_or_zero(area, wetted_perimeter),
        hydraulic_depth: ratio_or_zero(area, top_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::{Tolerances, nearly_equal};
    use std::f64::consts::PI;

    fn geo(shape: ShapeKind, y: Real) -> GeometryResult {
        compute_geometry(&CrossSection::new(shape, y))
    }

    fn assert_same(a: GeometryResult, b: GeometryResult) {
        let tol = Tolerances::default();
        assert!(nearly_equal(a.area, b.area, tol), "{a:?} vs {b:?}");
        assert!(nearly_equal(a.wetted_perimeter, b.wetted_perimeter, tol), "{a:?} vs {b:?}");
        assert!(nearly_equal(a.top_width, b.top_width, tol), "{a:?} vs {b:?}");
    }

    fn assert_close(actual: Real, expected: Real, tol: Real) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn rectangle_basic() {
        let g = geo(ShapeKind::Rectangle { bottom_width: 10.0 }, 3.0);
        assert_close(g.area, 30.0, 1e-9);
        assert_close(g.wetted_perimeter, 16.0, 1e-9);
        assert_close(g.top_width, 10.0, 1e-9);
        assert_close(g.hydraulic_radius, 1.875, 1e-9);
        assert_close(g.hydraulic_depth, 3.0, 1e-9);
    }

    #[test]
    fn trapezoid_basic() {
        // A = (6 + 2*3)*3 = 36, P = 6 + 6*sqrt(5)
        let g = geo(
            ShapeKind::Trapezoid {
                bottom_width: 6.0,
                side_slope: 2.0,
            },
            3.0,
        );
        assert_close(g.area, 36.0, 1e-9);
        assert_close(g.wetted_perimeter, 6.0 + 6.0 * 5.0_f64.sqrt(), 1e-9);
        assert_close(g.top_width, 18.0, 1e-9);
    }

    #[test]
    fn trapezoid_with_vertical_sides_is_rectangle() {
        let trap = geo(
            ShapeKind::Trapezoid {
                bottom_width: 10.0,
                side_slope: 0.0,
            },
            4.0,
        );
        let rect = geo(ShapeKind::Rectangle { bottom_width: 10.0 }, 4.0);
        assert_same(trap, rect);
    }

    #[test]
    fn triangle_basic() {
        let g = geo(ShapeKind::Triangle { side_slope: 1.5 }, 4.0);
        assert_close(g.area, 24.0, 1e-9);
        assert_close(g.wetted_perimeter, 8.0 * 3.25_f64.sqrt(), 1e-9);
        assert_close(g.top_width, 12.0, 1e-9);
    }

    #[test]
    fn circle_full_pipe() {
        let g = geo(ShapeKind::Circle { diameter: 4.0 }, 4.0);
        assert_close(g.area, PI * 4.0, 1e-9);
        assert_close(g.wetted_perimeter, PI * 4.0, 1e-9);
        // Closed top
        assert_close(g.top_width, 0.0, 1e-9);
    }

    #[test]
    fn circle_half_full_is_half_area() {
        let g = geo(ShapeKind::Circle { diameter: 4.0 }, 2.0);
        assert_close(g.area, PI * 2.0, 1e-9);
        assert_close(g.top_width, 4.0, 1e-9);
    }

    #[test]
    fn circle_depth_beyond_diameter_is_full() {
        let g = geo(ShapeKind::Circle { diameter: 3.0 }, 5.0);
        assert_close(g.area, PI * 1.5 * 1.5, 1e-9);
    }

    #[test]
    fn dry_sections_have_zero_area_and_ratios() {
        let shapes = [
            ShapeKind::Rectangle { bottom_width: 5.0 },
            ShapeKind::Trapezoid {
                bottom_width: 5.0,
                side_slope: 2.0,
            },
            ShapeKind::Triangle { side_slope: 2.0 },
            ShapeKind::Circle { diameter: 5.0 },
        ];
        for shape in shapes {
            let g = geo(shape, 0.0);
            assert_eq!(g.area, 0.0, "{}", shape.name());
            assert!(g.hydraulic_radius.is_finite());
            assert!(g.hydraulic_depth.is_finite());
        }
        // Triangle and circle have no perimeter at zero depth
        assert_eq!(geo(ShapeKind::Triangle { side_slope: 2.0 }, 0.0).hydraulic_radius, 0.0);
        assert_eq!(geo(ShapeKind::Circle { diameter: 5.0 }, 0.0).hydraulic_depth, 0.0);
    }
}
