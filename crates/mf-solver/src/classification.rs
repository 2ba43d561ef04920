//! Froude number, flow regime and critical depth.

use crate::bisection::{BisectionConfig, BisectionOutcome, bisect};
use mf_channel::{ShapeKind, build_section, compute_geometry};
use mf_core::{GRAVITY, Real};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shallowest depth considered by depth searches, ft.
pub const MIN_SEARCH_DEPTH: Real = 0.0001;

/// Froude numbers in `[0.99, 1.01]` are reported as critical.
pub const SUBCRITICAL_LIMIT: Real = 0.99;
pub const SUPERCRITICAL_LIMIT: Real = 1.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    Subcritical,
    Critical,
    Supercritical,
}

impl FlowRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowRegime::Subcritical => "subcritical",
            FlowRegime::Critical => "critical",
            FlowRegime::Supercritical => "supercritical",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fr = V / sqrt(g·A/T); 0 for a dry or closed section.
pub fn froude_number(velocity: Real, area: Real, top_width: Real) -> Real {
    if area <= 0.0 || top_width <= 0.0 {
        return 0.0;
    }
    let hydraulic_depth = area / top_width;
    velocity / (GRAVITY * hydraulic_depth).sqrt()
}

pub fn flow_regime(froude: Real) -> FlowRegime {
    if froude < SUBCRITICAL_LIMIT {
        FlowRegime::Subcritical
    } else if froude > SUPERCRITICAL_LIMIT {
        FlowRegime::Supercritical
    } else {
        FlowRegime::Critical
    }
}

/// Depth at which `Q²·T / (g·A³) = 1` for the given shape.
///
/// `width_override` replaces the bottom width of rectangles and trapezoids.
pub fn critical_depth(discharge: Real, shape: &ShapeKind, width_override: Option<Real>) -> Real {
    critical_depth_search(discharge, shape, width_override, &BisectionConfig::default()).root
}

pub(crate) fn critical_depth_search(
    discharge: Real,
    shape: &ShapeKind,
    width_override: Option<Real>,
    config: &BisectionConfig,
) -> BisectionOutcome {
    let residual = |y: Real| {
        let geo = compute_geometry(&build_section(shape, y, width_override));
        if geo.area <= 0.0 || geo.top_width <= 0.0 {
            return -1.0;
        }
        discharge * discharge * geo.top_width / (GRAVITY * geo.area.powi(3)) - 1.0
    };

    let outcome = bisect(residual, MIN_SEARCH_DEPTH, shape.max_depth(), config);
    if !outcome.bracketed || !outcome.converged {
        tracing::warn!(
            shape = shape.name(),
            discharge,
            root = outcome.root,
            bracketed = outcome.bracketed,
            converged = outcome.converged,
            "critical depth search did not settle on a root"
        );
    }
    outcome
}
