//! Case loading, saving, validation and introspection.

use mf_project::{CaseDef, SampleCase, ShapeDef, samples};
use mf_solver::{ManningInput, SolveFor};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub shape: ShapeDef,
    pub solve_for: SolveFor,
}

/// Load a case from a `.json`, `.yaml` or `.yml` file.
pub fn load_case(path: &Path) -> AppResult<CaseDef> {
    let case = mf_project::load(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), name = %case.name, "loaded case");
    Ok(case)
}

/// Save a case; the format follows the file extension.
pub fn save_case(path: &Path, case: &CaseDef) -> AppResult<()> {
    mf_project::save(path, case).map_err(|e| AppError::CaseFileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check that a case is complete and turn it into a solver request.
pub fn check_case(case: &CaseDef) -> AppResult<ManningInput> {
    Ok(mf_project::validate_case(case)?)
}

pub fn summarize(id: &str, case: &CaseDef) -> CaseSummary {
    CaseSummary {
        id: id.to_string(),
        name: case.name.clone(),
        description: case.description.clone(),
        shape: case.shape,
        solve_for: case.solve_for,
    }
}

/// List the bundled samples.
pub fn list_samples() -> Vec<CaseSummary> {
    samples()
        .iter()
        .map(|SampleCase { id, case }| summarize(id, case))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_listed() {
        let list = list_samples();
        assert_eq!(list.len(), 6);
        assert!(list.iter().any(|s| s.id == "large-river"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_case(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, AppError::CaseFileRead { .. }));
    }
}
