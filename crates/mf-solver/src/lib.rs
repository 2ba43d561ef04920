//! Manning's-equation solver for uniform open-channel flow.
//!
//! Given a channel shape and all but one of discharge (Q), normal depth (y),
//! roughness (n), slope (S) and bottom width (b), this crate resolves the
//! missing quantity and reports the full hydraulic state of the section:
//! velocity, Froude number, flow regime, critical depth and specific energy.
//!
//! Depth and width are found by bounded bisection; roughness and slope are
//! inverted algebraically. Every search is capped at a fixed iteration count,
//! so a solve has a hard worst-case cost regardless of input.
//!
//! All quantities are in foot-pound-second units.

pub mod bisection;
pub mod classification;
pub mod error;
pub mod manning;
pub mod problem;
pub mod result;
pub mod solve;

pub use bisection::{BisectionConfig, BisectionOutcome, bisect};
pub use classification::{FlowRegime, critical_depth, flow_regime, froude_number};
pub use error::{SolverError, SolverResult};
pub use manning::manning_q;
pub use problem::{ManningInput, SolveFor};
pub use result::{FlowResult, RootSearch};
pub use solve::{solve, solve_with_config};
