//! Error types for the mf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read case file: {path}: {message}")]
    CaseFileRead { path: PathBuf, message: String },

    #[error("Failed to write case file: {path}: {message}")]
    CaseFileWrite { path: PathBuf, message: String },

    #[error("Case validation failed: {0}")]
    Validation(#[from] mf_project::ValidationError),

    #[error("Sample not found: {0}")]
    SampleNotFound(String),

    #[error("Solver error: {0}")]
    Solver(#[from] mf_solver::SolverError),

    #[error("{0}")]
    Core(#[from] mf_core::MfError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for mf-app operations.
pub type AppResult<T> = Result<T, AppError>;
