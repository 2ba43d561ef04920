//! Reference values of Manning's roughness coefficient.

use mf_core::Real;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughnessEntry {
    pub material: &'static str,
    pub n_min: Real,
    pub n_typical: Real,
    pub n_max: Real,
}

impl RoughnessEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.material.to_ascii_lowercase().contains(&query)
    }

    pub fn contains(&self, n: Real) -> bool {
        n >= self.n_min && n <= self.n_max
    }
}

const fn entry(material: &'static str, n_min: Real, n_typical: Real, n_max: Real) -> RoughnessEntry {
    RoughnessEntry {
        material,
        n_min,
        n_typical,
        n_max,
    }
}

/// Common channel and pipe materials.
pub static MANNING_N_TABLE: [RoughnessEntry; 16] = [
    entry("Glass", 0.009, 0.010, 0.013),
    entry("Smooth steel", 0.011, 0.012, 0.014),
    entry("Cast iron", 0.011, 0.013, 0.015),
    entry("Concrete (finished)", 0.011, 0.012, 0.014),
    entry("Concrete (unfinished)", 0.014, 0.017, 0.020),
    entry("Brick with mortar", 0.012, 0.015, 0.018),
    entry("Earth (clean)", 0.016, 0.022, 0.030),
    entry("Earth (gravel)", 0.022, 0.027, 0.033),
    entry("Earth (weedy)", 0.025, 0.035, 0.045),
    entry("Natural stream (clean)", 0.025, 0.033, 0.040),
    entry("Natural stream (weedy)", 0.030, 0.040, 0.050),
    entry("Floodplain (grass)", 0.025, 0.035, 0.050),
    entry("Floodplain (trees)", 0.050, 0.100, 0.150),
    entry("Corrugated metal", 0.022, 0.025, 0.030),
    entry("PVC / HDPE", 0.009, 0.010, 0.013),
    entry("Riprap", 0.030, 0.040, 0.050),
];

/// Exact, case-insensitive lookup by material name.
pub fn find_material(name: &str) -> Option<&'static RoughnessEntry> {
    let name = name.trim();
    MANNING_N_TABLE
        .iter()
        .find(|e| e.material.eq_ignore_ascii_case(name))
}
