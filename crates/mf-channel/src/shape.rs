//! Channel shape descriptors and section construction.

use mf_core::{MfError, MfResult, Real, ensure_finite};

/// Upper depth bound for root searches in open (non-circular) channels, ft.
pub const DEFAULT_MAX_DEPTH: Real = 100.0;

/// Cross-section shape with its fixed dimensions.
///
/// Side slopes are horizontal:vertical ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rectangle { bottom_width: Real },
    Trapezoid { bottom_width: Real, side_slope: Real },
    Triangle { side_slope: Real },
    Circle { diameter: Real },
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle { .. } => "rectangle",
            ShapeKind::Trapezoid { .. } => "trapezoid",
            ShapeKind::Triangle { .. } => "triangle",
            ShapeKind::Circle { .. } => "circle",
        }
    }

    /// Bottom width, for shapes that have one.
    pub fn bottom_width(&self) -> Option<Real> {
        match *self {
            ShapeKind::Rectangle { bottom_width } | ShapeKind::Trapezoid { bottom_width, .. } => {
                Some(bottom_width)
            }
            ShapeKind::Triangle { .. } | ShapeKind::Circle { .. } => None,
        }
    }

    pub fn has_bottom_width(&self) -> bool {
        self.bottom_width().is_some()
    }

    /// Same shape with the bottom width replaced.
    ///
    /// Shapes without a bottom width are returned unchanged.
    pub fn with_bottom_width(self, width: Real) -> Self {
        match self {
            ShapeKind::Rectangle { .. } => ShapeKind::Rectangle {
                bottom_width: width,
            },
            ShapeKind::Trapezoid { side_slope, .. } => ShapeKind::Trapezoid {
                bottom_width: width,
                side_slope,
            },
            other => other,
        }
    }

    /// Reject non-finite or negative dimensions.
    ///
    /// Geometry itself never checks its input; call this on user-supplied
    /// shapes before evaluating them.
    pub fn check_dimensions(&self) -> MfResult<()> {
        let (width, slope) = match *self {
            ShapeKind::Rectangle { bottom_width } => (Some(bottom_width), None),
            ShapeKind::Trapezoid {
                bottom_width,
                side_slope,
            } => (Some(bottom_width), Some(side_slope)),
            ShapeKind::Triangle { side_slope } => (None, Some(side_slope)),
            ShapeKind::Circle { diameter } => {
                if ensure_finite(diameter, "diameter")? <= 0.0 {
                    return Err(MfError::InvalidArg {
                        what: "diameter must be positive",
                    });
                }
                (None, None)
            }
        };
        for (value, what) in [(width, "bottom width"), (slope, "side slope")] {
            let Some(value) = value else { continue };
            if ensure_finite(value, what)? < 0.0 {
                return Err(MfError::InvalidArg { what });
            }
        }
        Ok(())
    }

    /// Deepest depth a root search should consider.
    ///
    /// A pipe cannot hold more than its diameter; open channels use a generous
    /// fixed bound.
    pub fn max_depth(&self) -> Real {
        match *self {
            ShapeKind::Circle { diameter } => diameter,
            _ => DEFAULT_MAX_DEPTH,
        }
    }
}

/// A shape filled to a flow depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    pub shape: ShapeKind,
    pub depth: Real,
}

impl CrossSection {
    pub fn new(shape: ShapeKind, depth: Real) -> Self {
        Self { shape, depth }
    }

    /// Depth used for geometry: clamped to `[0, d]` for pipes, as given otherwise.
    pub fn effective_depth(&self) -> Real {
        match self.shape {
            ShapeKind::Circle { diameter } => self.depth.max(0.0).min(diameter),
            _ => self.depth,
        }
    }
}

/// Reject a non-finite or negative flow depth.
pub fn check_depth(depth: Real) -> MfResult<Real> {
    if ensure_finite(depth, "depth")? < 0.0 {
        return Err(MfError::InvalidArg {
            what: "depth must not be negative",
        });
    }
    Ok(depth)
}

/// Build the section at `depth`, optionally overriding the bottom width.
///
/// Every solver path goes through here so that depth searches, width searches
/// and critical-depth searches all see the same section.
pub fn build_section(shape: &ShapeKind, depth: Real, width_override: Option<Real>) -> CrossSection {
    let shape = match width_override {
        Some(width) => shape.with_bottom_width(width),
        None => *shape,
    };
    CrossSection::new(shape, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_override_only_touches_bottom_width() {
        let trap = ShapeKind::Trapezoid {
            bottom_width: 6.0,
            side_slope: 2.0,
        };
        let sec = build_section(&trap, 3.0, Some(12.0));
        assert_eq!(
            sec.shape,
            ShapeKind::Trapezoid {
                bottom_width: 12.0,
                side_slope: 2.0
            }
        );
        assert_eq!(sec.depth, 3.0);

        let tri = ShapeKind::Triangle { side_slope: 1.5 };
        assert_eq!(build_section(&tri, 2.0, Some(12.0)).shape, tri);
    }

    #[test]
    fn max_depth_is_diameter_for_pipes() {
        assert_eq!(ShapeKind::Circle { diameter: 4.0 }.max_depth(), 4.0);
        assert_eq!(
            ShapeKind::Rectangle { bottom_width: 4.0 }.max_depth(),
            DEFAULT_MAX_DEPTH
        );
    }

    #[test]
    fn circle_depth_is_clamped() {
        let pipe = ShapeKind::Circle { diameter: 3.0 };
        assert_eq!(CrossSection::new(pipe, 5.0).effective_depth(), 3.0);
        assert_eq!(CrossSection::new(pipe, -1.0).effective_depth(), 0.0);
        let rect = ShapeKind::Rectangle { bottom_width: 3.0 };
        assert_eq!(CrossSection::new(rect, 5.0).effective_depth(), 5.0);
    }

    #[test]
    fn dimension_checks() {
        assert!(ShapeKind::Triangle { side_slope: 0.0 }.check_dimensions().is_ok());
        assert!(matches!(
            ShapeKind::Rectangle { bottom_width: -1.0 }.check_dimensions(),
            Err(MfError::InvalidArg { what: "bottom width" })
        ));
        assert!(matches!(
            ShapeKind::Trapezoid {
                bottom_width: 4.0,
                side_slope: f64::NAN
            }
            .check_dimensions(),
            Err(MfError::NonFinite { .. })
        ));
        assert!(ShapeKind::Circle { diameter: 0.0 }.check_dimensions().is_err());
    }

    #[test]
    fn depth_checks() {
        assert_eq!(check_depth(0.0), Ok(0.0));
        assert_eq!(check_depth(2.5), Ok(2.5));
        assert!(matches!(check_depth(-0.1), Err(MfError::InvalidArg { .. })));
        assert!(matches!(check_depth(f64::NAN), Err(MfError::NonFinite { .. })));
    }

    #[test]
    fn bottom_width_presence() {
        assert!(ShapeKind::Rectangle { bottom_width: 1.0 }.has_bottom_width());
        assert!(!ShapeKind::Circle { diameter: 1.0 }.has_bottom_width());
        assert_eq!(
            ShapeKind::Trapezoid {
                bottom_width: 8.0,
                side_slope: 1.0
            }
            .bottom_width(),
            Some(8.0)
        );
    }
}
