//! Solver output.

use crate::bisection::BisectionOutcome;
use crate::classification::FlowRegime;
use mf_core::Real;
use serde::Serialize;

/// How a searched unknown was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootSearch {
    pub iterations: usize,
    pub converged: bool,
    pub bracketed: bool,
}

impl From<BisectionOutcome> for RootSearch {
    fn from(outcome: BisectionOutcome) -> Self {
        Self {
            iterations: outcome.iterations,
            converged: outcome.converged,
            bracketed: outcome.bracketed,
        }
    }
}

/// Hydraulic state of a uniform-flow section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowResult {
    /// Discharge Q (cfs)
    pub discharge: Real,
    /// Normal depth y (ft)
    pub depth: Real,
    /// Mean velocity V (ft/s)
    pub velocity: Real,
    /// Flow area A (ft²)
    pub area: Real,
    /// Wetted perimeter P (ft)
    pub wetted_perimeter: Real,
    /// Hydraulic radius R (ft)
    pub hydraulic_radius: Real,
    /// Top width T (ft)
    pub top_width: Real,
    pub froude_number: Real,
    pub flow_regime: FlowRegime,
    /// Critical depth yc (ft) at the solved discharge
    pub critical_depth: Real,
    /// Specific energy E = y + V²/2g (ft)
    pub specific_energy: Real,
    /// Manning's n
    pub roughness: Real,
    /// Bed slope S (ft/ft)
    pub slope: Real,
    /// Bottom width b (ft), for shapes that have one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_width: Option<Real>,
    /// Present when the unknown was found by bisection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_search: Option<RootSearch>,
}

impl FlowResult {
    /// False if the unknown came from a search that never bracketed a root
    /// or ran out of iterations.
    pub fn is_settled(&self) -> bool {
        self.root_search
            .is_none_or(|search| search.converged && search.bracketed)
    }
}
