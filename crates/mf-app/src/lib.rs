//! Shared application service layer for manningflow.
//!
//! This crate provides one interface for front ends (currently the CLI),
//! centralizing case management, solving and result reporting.

pub mod case_service;
pub mod error;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use case_service::{CaseSummary, check_case, list_samples, load_case, save_case, summarize};
pub use error::{AppError, AppResult};
pub use report::{
    ReportRow, ReportUnits, input_table, render_csv, render_json, render_text, results_table,
};
pub use run_service::{RunResponse, run_case, run_sample};
