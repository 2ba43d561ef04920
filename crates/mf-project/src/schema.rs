//! Case file schema definitions.

use mf_solver::SolveFor;
use serde::{Deserialize, Serialize};

/// One Manning calculation as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub shape: ShapeDef,
    #[serde(alias = "solveFor")]
    pub solve_for: SolveFor,
    #[serde(default)]
    pub values: ValuesDef,
}

fn default_version() -> u32 {
    crate::migrate::LATEST_VERSION
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapeDef {
    Rectangle,
    Trapezoid,
    Triangle,
    Circle,
}

impl ShapeDef {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeDef::Rectangle => "rectangle",
            ShapeDef::Trapezoid => "trapezoid",
            ShapeDef::Triangle => "triangle",
            ShapeDef::Circle => "circle",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => Some(ShapeDef::Rectangle),
            "trapezoid" | "trap" => Some(ShapeDef::Trapezoid),
            "triangle" | "tri" => Some(ShapeDef::Triangle),
            "circle" | "pipe" => Some(ShapeDef::Circle),
            _ => None,
        }
    }

    pub fn uses_bottom_width(&self) -> bool {
        matches!(self, ShapeDef::Rectangle | ShapeDef::Trapezoid)
    }

    pub fn uses_side_slope(&self) -> bool {
        matches!(self, ShapeDef::Trapezoid | ShapeDef::Triangle)
    }

    pub fn uses_diameter(&self) -> bool {
        matches!(self, ShapeDef::Circle)
    }
}

/// Raw parameter values; any of them may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValuesDef {
    /// Bottom width (ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    /// Flow depth (ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Side slope (H:V)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Diameter (ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
    /// Manning's n
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<f64>,
    /// Channel slope (ft/ft)
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
    /// Discharge (cfs)
    #[serde(rename = "Q", default, skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
}

impl CaseDef {
    pub fn new(name: impl Into<String>, shape: ShapeDef, solve_for: SolveFor, values: ValuesDef) -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: name.into(),
            description: None,
            shape,
            solve_for,
            values,
        }
    }
}
