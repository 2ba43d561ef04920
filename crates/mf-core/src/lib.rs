//! mf-core: stable foundation for manningflow.
//!
//! Contains:
//! - units (foot-pound-second hydraulic constants, cross-checked through uom)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MfError, MfResult};
pub use numeric::*;
pub use units::constants::{GRAVITY, MANNING_K};
