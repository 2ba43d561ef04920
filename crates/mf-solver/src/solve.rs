//! High-level solver interface.

use crate::bisection::{BisectionConfig, BisectionOutcome, bisect};
use crate::classification::{MIN_SEARCH_DEPTH, critical_depth_search, flow_regime, froude_number};
use crate::error::{SolverError, SolverResult};
use crate::manning::{manning_q, roughness_for, slope_for};
use crate::problem::{ManningInput, SolveFor};
use crate::result::{FlowResult, RootSearch};
use mf_channel::{GeometryResult, ShapeKind, build_section, compute_geometry};
use mf_core::{GRAVITY, Real, ratio_or_zero};

/// Bottom-width search interval, ft.
pub const MIN_SEARCH_WIDTH: Real = 0.01;
pub const MAX_SEARCH_WIDTH: Real = 500.0;

/// Solve a Manning problem with the default root-search settings.
pub fn solve(input: &ManningInput) -> SolverResult<FlowResult> {
    solve_with_config(input, &BisectionConfig::default())
}

/// Solve a Manning problem.
///
/// This function:
/// 1. Resolves the unknown named by `input.solve_for`, directly for Q, n and
///    S, by bisection for y and b
/// 2. Rebuilds the section at the final depth and width
/// 3. Derives velocity, Froude number, regime, critical depth and specific
///    energy from the solved discharge
///
/// Fails only when the unknown cannot be solved on the input shape.
pub fn solve_with_config(
    input: &ManningInput,
    config: &BisectionConfig,
) -> SolverResult<FlowResult> {
    if !input.solve_for.applies_to(&input.shape) {
        return Err(SolverError::UnsupportedTarget {
            target: input.solve_for,
            shape: input.shape.name(),
        });
    }

    tracing::debug!(
        shape = input.shape.name(),
        target = input.solve_for.tag(),
        "solving Manning equation"
    );

    let mut state = Resolved::from_input(input);
    let mut search = None;

    match input.solve_for {
        SolveFor::Discharge => {
            let geo = state.geometry();
            state.discharge = manning_q(state.roughness, geo.area, geo.hydraulic_radius, state.slope);
        }
        SolveFor::Depth => {
            let outcome = bisect(
                |y| {
                    let geo = geometry_at(&state.shape, y);
                    manning_q(state.roughness, geo.area, geo.hydraulic_radius, state.slope)
                        - state.discharge
                },
                MIN_SEARCH_DEPTH,
                state.shape.max_depth(),
                config,
            );
            report_search("normal depth", &state.shape, &outcome);
            state.depth = outcome.root;
            search = Some(outcome);
        }
        SolveFor::Roughness => {
            let geo = state.geometry();
            state.roughness = roughness_for(state.discharge, geo.area, geo.hydraulic_radius, state.slope);
        }
        SolveFor::Slope => {
            let geo = state.geometry();
            state.slope = slope_for(state.discharge, state.roughness, geo.area, geo.hydraulic_radius);
        }
        SolveFor::BottomWidth => {
            let outcome = bisect(
                |b| {
                    let geo = compute_geometry(&build_section(&state.shape, state.depth, Some(b)));
                    manning_q(state.roughness, geo.area, geo.hydraulic_radius, state.slope)
                        - state.discharge
                },
                MIN_SEARCH_WIDTH,
                MAX_SEARCH_WIDTH,
                config,
            );
            report_search("bottom width", &state.shape, &outcome);
            state.shape = state.shape.with_bottom_width(outcome.root);
            search = Some(outcome);
        }
    }

    Ok(state.finish(search.map(RootSearch::from), config))
}

/// Knowns and the resolved unknown, before the report is assembled.
struct Resolved {
    shape: ShapeKind,
    depth: Real,
    roughness: Real,
    slope: Real,
    discharge: Real,
}

impl Resolved {
    fn from_input(input: &ManningInput) -> Self {
        Self {
            shape: input.shape,
            depth: input.depth,
            roughness: input.roughness,
            slope: input.slope,
            discharge: input.discharge,
        }
    }

    fn geometry(&self) -> GeometryResult {
        geometry_at(&self.shape, self.depth)
    }

    fn finish(self, root_search: Option<RootSearch>, config: &BisectionConfig) -> FlowResult {
        let geo = self.geometry();
        let velocity = ratio_or_zero(self.discharge, geo.area);
        let froude = froude_number(velocity, geo.area, geo.top_width);
        let critical = critical_depth_search(self.discharge, &self.shape, None, config);

        FlowResult {
            discharge: self.discharge,
            depth: self.depth,
            velocity,
            area: geo.area,
            wetted_perimeter: geo.wetted_perimeter,
            hydraulic_radius: geo.hydraulic_radius,
            top_width: geo.top_width,
            froude_number: froude,
            flow_regime: flow_regime(froude),
            critical_depth: critical.root,
            specific_energy: self.depth + velocity * velocity / (2.0 * GRAVITY),
            roughness: self.roughness,
            slope: self.slope,
            bottom_width: self.shape.bottom_width(),
            root_search,
        }
    }
}

fn geometry_at(shape: &ShapeKind, depth: Real) -> GeometryResult {
    compute_geometry(&build_section(shape, depth, None))
}

fn report_search(what: &'static str, shape: &ShapeKind, outcome: &BisectionOutcome) {
    if outcome.bracketed && outcome.converged {
        tracing::debug!(what, root = outcome.root, iterations = outcome.iterations, "root found");
    } else {
        tracing::warn!(
            what,
            shape = shape.name(),
            root = outcome.root,
            bracketed = outcome.bracketed,
            converged = outcome.converged,
            "search ended without a bracketed root; returning best estimate"
        );
    }
}
