//! mf-channel: open-channel cross sections.
//!
//! Provides:
//! - Shape descriptors for rectangular, trapezoidal, triangular and circular
//!   channels, and the one routine that turns a shape plus a depth into a
//!   cross section
//! - Geometry of a section at a depth (area, wetted perimeter, top width,
//!   hydraulic radius, hydraulic depth)
//! - Reference values of Manning's roughness coefficient for common materials
//!
//! Geometry is a pure, total function of the section. Nonsensical inputs
//! (negative widths, zero diameters) are not rejected here; they produce
//! whatever the closed-form formulas give.
//!
//! # Example
//!
//! ```
//! use mf_channel::{ShapeKind, build_section, compute_geometry};
//!
//! let shape = ShapeKind::Rectangle { bottom_width: 10.0 };
//! let geo = compute_geometry(&build_section(&shape, 3.0, None));
//!
//! assert_eq!(geo.area, 30.0);
//! assert_eq!(geo.hydraulic_radius, 1.875);
//! ```

pub mod geometry;
pub mod roughness;
pub mod shape;

// Re-exports
pub use geometry::{GeometryResult, compute_geometry};
pub use roughness::{MANNING_N_TABLE, RoughnessEntry, find_material};
pub use shape::{CrossSection, DEFAULT_MAX_DEPTH, ShapeKind, build_section, check_depth};
