//! Case validation: completeness and sanity of the raw values.
//!
//! The solver trusts its input. Anything that makes a case unsolvable, such as
//! a missing value or a width target on a pipe, is caught here instead.

use crate::schema::{CaseDef, ShapeDef};
use mf_channel::ShapeKind;
use mf_solver::{ManningInput, SolveFor};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing value: {field} is required when solving for {target} on a {shape}")]
    MissingValue {
        field: &'static str,
        target: SolveFor,
        shape: &'static str,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unsupported target: cannot solve for {target} on a {shape}")]
    UnsupportedTarget {
        target: SolveFor,
        shape: &'static str,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check a case and turn it into a solver request.
pub fn validate_case(case: &CaseDef) -> Result<ManningInput, ValidationError> {
    if case.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let shape = case.shape;
    let target = case.solve_for;
    let v = &case.values;

    if target == SolveFor::BottomWidth && !shape.uses_bottom_width() {
        return Err(ValidationError::UnsupportedTarget {
            target,
            shape: shape.as_str(),
        });
    }

    let fields = Fields { case, target };
    let discharge = fields.unless(SolveFor::Discharge, "Q", v.q, Bound::Positive)?;
    let depth = fields.unless(SolveFor::Depth, "y", v.y, Bound::Positive)?;
    let roughness = fields.unless(SolveFor::Roughness, "n", v.n, Bound::Positive)?;
    let slope = fields.unless(SolveFor::Slope, "S", v.s, Bound::NonNegative)?;

    let kind = match shape {
        ShapeDef::Rectangle => ShapeKind::Rectangle {
            bottom_width: fields.width(v.b)?,
        },
        ShapeDef::Trapezoid => ShapeKind::Trapezoid {
            bottom_width: fields.width(v.b)?,
            side_slope: fields.required("z", v.z, Bound::NonNegative)?,
        },
        ShapeDef::Triangle => ShapeKind::Triangle {
            side_slope: fields.required("z", v.z, Bound::NonNegative)?,
        },
        ShapeDef::Circle => ShapeKind::Circle {
            diameter: fields.required("d", v.d, Bound::Positive)?,
        },
    };

    let mut input = ManningInput::new(kind, target);
    input.discharge = discharge;
    input.depth = depth;
    input.roughness = roughness;
    input.slope = slope;
    Ok(input)
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Positive,
    NonNegative,
}

impl Bound {
    fn check(self, field: &'static str, value: f64) -> Result<f64, ValidationError> {
        let reason = if !value.is_finite() {
            "must be finite"
        } else {
            match self {
                Bound::Positive if value <= 0.0 => "must be positive",
                Bound::NonNegative if value < 0.0 => "must not be negative",
                _ => return Ok(value),
            }
        };
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason,
        })
    }
}

/// Field lookups for one case; the value named by the target is optional.
struct Fields<'a> {
    case: &'a CaseDef,
    target: SolveFor,
}

impl Fields<'_> {
    fn required(
        &self,
        field: &'static str,
        value: Option<f64>,
        bound: Bound,
    ) -> Result<f64, ValidationError> {
        let value = value.ok_or(ValidationError::MissingValue {
            field,
            target: self.target,
            shape: self.case.shape.as_str(),
        })?;
        bound.check(field, value)
    }

    /// Required unless it is the unknown, which reads as 0.
    fn unless(
        &self,
        unknown: SolveFor,
        field: &'static str,
        value: Option<f64>,
        bound: Bound,
    ) -> Result<f64, ValidationError> {
        if self.target == unknown {
            Ok(0.0)
        } else {
            self.required(field, value, bound)
        }
    }

    fn width(&self, value: Option<f64>) -> Result<f64, ValidationError> {
        self.unless(SolveFor::BottomWidth, "b", value, Bound::NonNegative)
    }
}
