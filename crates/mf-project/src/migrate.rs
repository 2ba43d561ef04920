//! Schema migration and import of the legacy form-state format.
//!
//! Version 0 is the state blob saved by the browser calculator:
//! `{ "shape": "...", "solveFor": "Q", "form": { "b": "10", "y": "", ... } }`
//! with every value kept as the text the user typed.

use crate::ProjectError;
use crate::schema::{CaseDef, ShapeDef, ValuesDef};
use mf_solver::SolveFor;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut case: CaseDef) -> Result<CaseDef, ProjectError> {
    while case.version < LATEST_VERSION {
        case = migrate_one_version(case)?;
    }
    Ok(case)
}

fn migrate_one_version(case: CaseDef) -> Result<CaseDef, ProjectError> {
    match case.version {
        // A v0 document that already has numeric values only needs the stamp
        0 => Ok(CaseDef { version: 1, ..case }),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

#[derive(Debug, Deserialize)]
struct LegacyState {
    shape: ShapeDef,
    #[serde(rename = "solveFor")]
    solve_for: SolveFor,
    #[serde(default)]
    form: BTreeMap<String, String>,
}

/// True if a JSON document looks like legacy form state.
pub fn is_legacy_json(value: &serde_json::Value) -> bool {
    value.get("form").is_some_and(|f| f.is_object()) && value.get("version").is_none()
}

/// Convert legacy form state into a current case.
///
/// Each field is read from its leading number, so `"10 ft"` is 10. Blank,
/// unparseable or non-finite fields become absent values, matching how the
/// form treated them.
pub fn from_legacy_json(value: serde_json::Value) -> Result<CaseDef, ProjectError> {
    let legacy: LegacyState = serde_json::from_value(value)?;
    let field = |key: &str| {
        legacy
            .form
            .get(key)
            .map(String::as_str)
            .and_then(leading_number)
    };

    let values = ValuesDef {
        b: field("b"),
        y: field("y"),
        z: field("z"),
        d: field("d"),
        n: field("n"),
        s: field("S"),
        q: field("Q"),
    };

    Ok(CaseDef::new(
        "Imported case",
        legacy.shape,
        legacy.solve_for,
        values,
    ))
}

/// Longest decimal prefix of `text` after leading whitespace, if finite.
///
/// Accepts `[sign] digits [. digits] [e [sign] digits]` and ignores whatever
/// follows. Spelled-out infinities and NaN are not numbers here.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
