//! Bundled sample cases.

use crate::schema::{CaseDef, ShapeDef, ValuesDef};
use mf_solver::SolveFor;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleCase {
    pub id: &'static str,
    pub case: CaseDef,
}

fn sample(
    id: &'static str,
    name: &str,
    description: &str,
    shape: ShapeDef,
    solve_for: SolveFor,
    values: ValuesDef,
) -> SampleCase {
    let mut case = CaseDef::new(name, shape, solve_for, values);
    case.description = Some(description.to_string());
    SampleCase { id, case }
}

pub fn samples() -> Vec<SampleCase> {
    vec![
        sample(
            "concrete-rect",
            "Concrete Rectangular Channel",
            "Textbook example (Chow): 10 ft wide concrete channel, find discharge",
            ShapeDef::Rectangle,
            SolveFor::Discharge,
            ValuesDef {
                b: Some(10.0),
                y: Some(3.0),
                n: Some(0.013),
                s: Some(0.001),
                ..ValuesDef::default()
            },
        ),
        sample(
            "earth-trapezoid",
            "Earth Trapezoidal Canal",
            "Irrigation canal in earth, b=6 ft, 2:1 side slopes, find normal depth",
            ShapeDef::Trapezoid,
            SolveFor::Depth,
            ValuesDef {
                b: Some(6.0),
                z: Some(2.0),
                n: Some(0.025),
                s: Some(0.0005),
                q: Some(200.0),
                ..ValuesDef::default()
            },
        ),
        sample(
            "grassed-waterway",
            "Grassed Waterway (Triangle)",
            "Triangular grassed waterway, 4:1 side slopes, small agricultural flow",
            ShapeDef::Triangle,
            SolveFor::Discharge,
            ValuesDef {
                y: Some(1.5),
                z: Some(4.0),
                n: Some(0.035),
                s: Some(0.02),
                ..ValuesDef::default()
            },
        ),
        sample(
            "storm-sewer",
            "Circular Storm Sewer (48\")",
            "48-inch concrete storm sewer flowing partially full, find discharge",
            ShapeDef::Circle,
            SolveFor::Discharge,
            ValuesDef {
                d: Some(4.0),
                y: Some(3.0),
                n: Some(0.013),
                s: Some(0.005),
                ..ValuesDef::default()
            },
        ),
        sample(
            "mountain-stream",
            "Steep Mountain Stream",
            "High-gradient boulder-lined stream, supercritical flow (Fr > 1)",
            ShapeDef::Trapezoid,
            SolveFor::Discharge,
            ValuesDef {
                b: Some(8.0),
                y: Some(1.5),
                z: Some(1.0),
                n: Some(0.040),
                s: Some(0.05),
                ..ValuesDef::default()
            },
        ),
        sample(
            "large-river",
            "Large River Section",
            "Wide alluvial river, b=100 ft, gentle slope, find normal depth for large Q",
            ShapeDef::Trapezoid,
            SolveFor::Depth,
            ValuesDef {
                b: Some(100.0),
                z: Some(3.0),
                n: Some(0.030),
                s: Some(0.0002),
                q: Some(10_000.0),
                ..ValuesDef::default()
            },
        ),
    ]
}

pub fn find_sample(id: &str) -> Option<SampleCase> {
    samples().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let all = samples();
        let mut ids: Vec<_> = all.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn lookup_by_id() {
        let s = find_sample("storm-sewer").unwrap();
        assert_eq!(s.case.shape, ShapeDef::Circle);
        assert!(find_sample("nope").is_none());
    }
}
