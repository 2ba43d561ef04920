//! Solve execution.

use mf_project::{CaseDef, find_sample};
use mf_solver::{FlowResult, ManningInput, solve};

use crate::case_service::check_case;
use crate::error::{AppError, AppResult};

/// A solved case.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub input: ManningInput,
    pub result: FlowResult,
}

/// Validate and solve a case.
pub fn run_case(case: &CaseDef) -> AppResult<RunResponse> {
    let input = check_case(case)?;
    let result = solve(&input)?;

    if result.is_settled() {
        tracing::info!(
            case = %case.name,
            target = input.solve_for.tag(),
            discharge = result.discharge,
            depth = result.depth,
            regime = %result.flow_regime,
            "case solved"
        );
    } else {
        tracing::warn!(
            case = %case.name,
            target = input.solve_for.tag(),
            "case solved with an unsettled root search; result is a best estimate"
        );
    }

    Ok(RunResponse { input, result })
}

/// Solve one of the bundled samples by id.
pub fn run_sample(id: &str) -> AppResult<(CaseDef, RunResponse)> {
    let sample = find_sample(id).ok_or_else(|| AppError::SampleNotFound(id.to_string()))?;
    let response = run_case(&sample.case)?;
    Ok((sample.case, response))
}
