//! Manning's equation.

use mf_core::{MANNING_K, Real};

/// Q = (K/n)·A·R^(2/3)·√S
///
/// Zero roughness or a negative slope yields infinity or NaN; callers are
/// expected to have rejected such input.
pub fn manning_q(n: Real, area: Real, hydraulic_radius: Real, slope: Real) -> Real {
    (MANNING_K / n) * area * hydraulic_radius.powf(2.0 / 3.0) * slope.sqrt()
}

/// Discharge the section would carry on a unit slope, `(K/n)·A·R^(2/3)`.
pub fn unit_slope_capacity(n: Real, area: Real, hydraulic_radius: Real) -> Real {
    (MANNING_K / n) * area * hydraulic_radius.powf(2.0 / 3.0)
}

/// Roughness that makes the section carry `discharge`.
pub fn roughness_for(discharge: Real, area: Real, hydraulic_radius: Real, slope: Real) -> Real {
    (MANNING_K / discharge) * area * hydraulic_radius.powf(2.0 / 3.0) * slope.sqrt()
}

/// Slope that makes the section carry `discharge`, `(Q/capacity)²`.
pub fn slope_for(discharge: Real, n: Real, area: Real, hydraulic_radius: Real) -> Real {
    (discharge / unit_slope_capacity(n, area, hydraulic_radius)).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_rectangle_discharge() {
        // b=10, y=3 -> A=30, R=1.875
        let q = manning_q(0.013, 30.0, 1.875, 0.001);
        assert!((q - 164.89).abs() < 0.5, "q = {q}");
    }

    #[test]
    fn inversions_are_consistent() {
        let (n, a, r, s) = (0.025, 36.0, 1.854, 0.002);
        let q = manning_q(n, a, r, s);
        assert!((roughness_for(q, a, r, s) - n).abs() < 1e-12);
        assert!((slope_for(q, n, a, r) - s).abs() < 1e-12);
    }

    #[test]
    fn zero_roughness_is_not_finite() {
        assert!(!manning_q(0.0, 30.0, 1.875, 0.001).is_finite());
        assert!(manning_q(0.013, 30.0, 1.875, -0.001).is_nan());
    }
}
