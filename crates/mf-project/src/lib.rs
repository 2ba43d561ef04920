//! mf-project: case file format, validation and bundled samples.

pub mod migrate;
pub mod samples;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, from_legacy_json, migrate_to_latest};
pub use samples::{SampleCase, find_sample, samples};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Unsupported file type: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON case, accepting the legacy form-state layout as well.
pub fn parse_json(content: &str) -> ProjectResult<CaseDef> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let case = if migrate::is_legacy_json(&value) {
        from_legacy_json(value)?
    } else {
        serde_json::from_value(value)?
    };
    migrate_to_latest(case)
}

pub fn parse_yaml(content: &str) -> ProjectResult<CaseDef> {
    let case: CaseDef = serde_yaml::from_str(content)?;
    migrate_to_latest(case)
}

// Loading does not validate: an incomplete case is still a valid document
// and should open so it can be edited.
pub fn load_json(path: &Path) -> ProjectResult<CaseDef> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &Path, case: &CaseDef) -> ProjectResult<()> {
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseDef> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &Path, case: &CaseDef) -> ProjectResult<()> {
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a case, picking the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<CaseDef> {
    match extension(path)? {
        Format::Json => load_json(path),
        Format::Yaml => load_yaml(path),
    }
}

/// Save a case, picking the format from the file extension.
pub fn save(path: &Path, case: &CaseDef) -> ProjectResult<()> {
    match extension(path)? {
        Format::Json => save_json(path, case),
        Format::Yaml => save_yaml(path, case),
    }
}

enum Format {
    Json,
    Yaml,
}

fn extension(path: &Path) -> ProjectResult<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
