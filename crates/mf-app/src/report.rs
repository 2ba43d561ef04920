//! Result tables in text, CSV and JSON form.

use mf_core::units::{cfs, fps, ft, ft2};
use mf_project::CaseDef;
use mf_solver::FlowResult;
use serde::Serialize;
use std::fmt::Write;
use uom::si::{
    area::square_meter, length::meter, velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

/// Units used when printing a report. Solving always happens in ft and s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportUnits {
    #[default]
    Customary,
    Si,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

fn row(label: &'static str, value: String, unit: &'static str) -> ReportRow {
    ReportRow { label, value, unit }
}

#[derive(Clone, Copy)]
enum Quantity {
    Length,
    Area,
    Velocity,
    Discharge,
}

impl Quantity {
    fn unit(self, units: ReportUnits) -> &'static str {
        match (self, units) {
            (Quantity::Length, ReportUnits::Customary) => "ft",
            (Quantity::Length, ReportUnits::Si) => "m",
            (Quantity::Area, ReportUnits::Customary) => "ft²",
            (Quantity::Area, ReportUnits::Si) => "m²",
            (Quantity::Velocity, ReportUnits::Customary) => "ft/s",
            (Quantity::Velocity, ReportUnits::Si) => "m/s",
            (Quantity::Discharge, ReportUnits::Customary) => "cfs",
            (Quantity::Discharge, ReportUnits::Si) => "m³/s",
        }
    }

    fn convert(self, v: f64, units: ReportUnits) -> f64 {
        match units {
            ReportUnits::Customary => v,
            ReportUnits::Si => match self {
                Quantity::Length => ft(v).get::<meter>(),
                Quantity::Area => ft2(v).get::<square_meter>(),
                Quantity::Velocity => fps(v).get::<meter_per_second>(),
                Quantity::Discharge => cfs(v).get::<cubic_meter_per_second>(),
            },
        }
    }
}

/// Exponent notation with a signed exponent, `5.0000e+2` or `1.0000e-3`.
fn to_exponential(v: f64, digits: usize) -> String {
    let text = format!("{:.*e}", digits, v);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

/// Rows of the results table, in display order.
pub fn results_table(result: &FlowResult, units: ReportUnits) -> Vec<ReportRow> {
    let q = |label, quantity: Quantity, v: f64, digits: usize| {
        row(
            label,
            format!("{:.*}", digits, quantity.convert(v, units)),
            quantity.unit(units),
        )
    };

    let mut rows = vec![
        q("Discharge (Q)", Quantity::Discharge, result.discharge, 3),
        q("Normal Depth (y)", Quantity::Length, result.depth, 4),
        q("Velocity (V)", Quantity::Velocity, result.velocity, 3),
        q("Flow Area (A)", Quantity::Area, result.area, 3),
        q("Wetted Perimeter (P)", Quantity::Length, result.wetted_perimeter, 3),
        q("Hydraulic Radius (R)", Quantity::Length, result.hydraulic_radius, 4),
        q("Top Width (T)", Quantity::Length, result.top_width, 3),
    ];
    if let Some(b) = result.bottom_width {
        rows.push(q("Bottom Width (b)", Quantity::Length, b, 3));
    }
    rows.extend([
        row("Froude Number (Fr)", format!("{:.4}", result.froude_number), ""),
        q("Critical Depth (yc)", Quantity::Length, result.critical_depth, 4),
        q("Specific Energy (E)", Quantity::Length, result.specific_energy, 4),
        row("Manning's n", format!("{:.4}", result.roughness), ""),
        row(
            "Slope (S)",
            to_exponential(result.slope, 4),
            match units {
                ReportUnits::Customary => "ft/ft",
                ReportUnits::Si => "m/m",
            },
        ),
    ]);
    rows
}

/// Rows describing the inputs of a case; absent values print as a dash.
pub fn input_table(case: &CaseDef) -> Vec<ReportRow> {
    let v = &case.values;
    let opt = |label, value: Option<f64>, unit| match value {
        Some(x) => row(label, format!("{x}"), unit),
        None => row(label, "—".to_string(), ""),
    };

    let mut rows = vec![
        row("Channel Shape", case.shape.as_str().to_string(), ""),
        row("Solve For", case.solve_for.label().to_string(), ""),
    ];
    if case.shape.uses_bottom_width() {
        rows.push(opt("Bottom Width (b)", v.b, "ft"));
    }
    if case.shape.uses_diameter() {
        rows.push(opt("Diameter (d)", v.d, "ft"));
    }
    rows.push(opt("Flow Depth (y)", v.y, "ft"));
    if case.shape.uses_side_slope() {
        rows.push(opt("Side Slope (z)", v.z, "H:V"));
    }
    rows.push(opt("Manning's n", v.n, ""));
    rows.push(opt("Slope (S)", v.s, "ft/ft"));
    rows.push(opt("Discharge (Q)", v.q, "cfs"));
    rows
}

/// Plain-text report: regime line, then an aligned results table.
pub fn render_text(result: &FlowResult, units: ReportUnits) -> String {
    let rows = results_table(result, units);
    let label_w = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let value_w = rows.iter().map(|r| r.value.len()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Flow Regime: {}", result.flow_regime);
    for r in &rows {
        let pad = label_w - r.label.chars().count();
        let _ = writeln!(
            out,
            "  {}{}  {:>value_w$} {}",
            r.label,
            " ".repeat(pad),
            r.value,
            r.unit
        );
    }
    if let Some(search) = result.root_search.filter(|s| !(s.converged && s.bracketed)) {
        let _ = writeln!(
            out,
            "Warning: root search did not settle after {} iterations (bracketed: {}); values are a best estimate",
            search.iterations, search.bracketed
        );
    }
    out
}

/// CSV with a `Parameter,Value,Unit` header.
pub fn render_csv(result: &FlowResult, units: ReportUnits) -> String {
    let mut out = String::from("Parameter,Value,Unit\n");
    for r in results_table(result, units) {
        let _ = writeln!(out, "\"{}\",{},\"{}\"", r.label, r.value, r.unit);
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    shape: &'static str,
    solve_for: &'static str,
    result: &'a FlowResult,
}

/// Pretty JSON of the raw result, in solver units.
pub fn render_json(case: &CaseDef, result: &FlowResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        name: &case.name,
        shape: case.shape.as_str(),
        solve_for: case.solve_for.tag(),
        result,
    })
}
