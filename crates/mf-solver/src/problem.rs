//! Solve requests.

use crate::error::SolverError;
use mf_channel::ShapeKind;
use mf_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single unknown of a Manning problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveFor {
    #[serde(rename = "Q")]
    Discharge,
    #[serde(rename = "y")]
    Depth,
    #[serde(rename = "n")]
    Roughness,
    #[serde(rename = "S")]
    Slope,
    #[serde(rename = "b")]
    BottomWidth,
}

impl SolveFor {
    pub const ALL: [SolveFor; 5] = [
        SolveFor::Discharge,
        SolveFor::Depth,
        SolveFor::Roughness,
        SolveFor::Slope,
        SolveFor::BottomWidth,
    ];

    /// One-letter tag (`Q`, `y`, `n`, `S`, `b`).
    pub fn tag(&self) -> &'static str {
        match self {
            SolveFor::Discharge => "Q",
            SolveFor::Depth => "y",
            SolveFor::Roughness => "n",
            SolveFor::Slope => "S",
            SolveFor::BottomWidth => "b",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SolveFor::Discharge => "Discharge (Q)",
            SolveFor::Depth => "Normal Depth (y)",
            SolveFor::Roughness => "Manning's n",
            SolveFor::Slope => "Slope (S)",
            SolveFor::BottomWidth => "Bottom Width (b)",
        }
    }

    /// Whether this unknown can be solved on `shape`.
    pub fn applies_to(&self, shape: &ShapeKind) -> bool {
        match self {
            SolveFor::BottomWidth => shape.has_bottom_width(),
            _ => true,
        }
    }
}

impl fmt::Display for SolveFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SolveFor {
    type Err = SolverError;

    /// Accepts the one-letter tags exactly, or long names in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(target) = SolveFor::ALL.iter().find(|t| t.tag() == s) {
            return Ok(*target);
        }
        match s.to_ascii_lowercase().as_str() {
            "discharge" | "flow" => Ok(SolveFor::Discharge),
            "depth" | "normal_depth" | "normal-depth" => Ok(SolveFor::Depth),
            "roughness" | "manning_n" => Ok(SolveFor::Roughness),
            "slope" => Ok(SolveFor::Slope),
            "width" | "bottom_width" | "bottom-width" => Ok(SolveFor::BottomWidth),
            _ => Err(SolverError::InvalidTarget { tag: s.to_string() }),
        }
    }
}

/// A fully populated Manning problem.
///
/// The field named by `solve_for` is ignored; when solving for the bottom
/// width, the width stored in `shape` is only a placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManningInput {
    pub shape: ShapeKind,
    /// Flow depth y (ft)
    pub depth: Real,
    /// Manning's n
    pub roughness: Real,
    /// Bed slope S (ft/ft)
    pub slope: Real,
    /// Discharge Q (cfs)
    pub discharge: Real,
    pub solve_for: SolveFor,
}

impl ManningInput {
    /// Start a request with all quantities zero.
    pub fn new(shape: ShapeKind, solve_for: SolveFor) -> Self {
        Self {
            shape,
            depth: 0.0,
            roughness: 0.0,
            slope: 0.0,
            discharge: 0.0,
            solve_for,
        }
    }

    pub fn with_depth(mut self, depth: Real) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_roughness(mut self, roughness: Real) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_slope(mut self, slope: Real) -> Self {
        self.slope = slope;
        self
    }

    pub fn with_discharge(mut self, discharge: Real) -> Self {
        self.discharge = discharge;
        self
    }
}
