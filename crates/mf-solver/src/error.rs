//! Error types for solver operations.

use crate::problem::SolveFor;
use mf_core::error::MfError;
use thiserror::Error;

/// Errors that can occur while resolving a Manning problem.
///
/// Numeric trouble (zero roughness, negative slope) is not an error here: it
/// flows through as NaN or infinity. Only requests the solver cannot
/// interpret are rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid solve target: '{tag}' (expected one of Q, y, n, S, b)")]
    InvalidTarget { tag: String },

    #[error("Cannot solve for {target} on a {shape} section")]
    UnsupportedTarget {
        target: SolveFor,
        shape: &'static str,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for MfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidTarget { .. } => MfError::InvalidArg {
                what: "solve target",
            },
            SolverError::UnsupportedTarget { .. } => MfError::InvalidArg {
                what: "solve target for shape",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::InvalidTarget { tag: "x".into() };
        assert!(err.to_string().contains("'x'"));

        let err = SolverError::UnsupportedTarget {
            target: SolveFor::BottomWidth,
            shape: "circle",
        };
        assert!(err.to_string().contains("circle"));
    }

    #[test]
    fn error_conversion() {
        let err = SolverError::InvalidTarget { tag: "x".into() };
        let mf_err: MfError = err.into();
        assert!(matches!(mf_err, MfError::InvalidArg { .. }));
    }
}
