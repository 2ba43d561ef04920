//! Bounded bisection root finder.

/// Bisection configuration.
#[derive(Debug, Clone, Copy)]
pub struct BisectionConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Stop once the bracket is narrower than this
    pub tolerance: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-8,
        }
    }
}

/// Bisection result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionOutcome {
    /// Midpoint of the final bracket
    pub root: f64,
    /// Number of halvings performed
    pub iterations: usize,
    /// Bracket shrank below tolerance
    pub converged: bool,
    /// Function changes sign across the final bracket
    pub bracketed: bool,
}

/// Find a root of `f` in `[lo, hi]`.
///
/// Keeps `[lo, mid]` whenever `f(lo)·f(mid) ≤ 0`, otherwise `[mid, hi]`.
/// Never fails: when the iteration budget runs out, or when `f` has no sign
/// change in the interval, the midpoint of the last bracket is returned and
/// the outcome flags say so.
///
/// `bracketed` is judged on the final bracket, so a search whose endpoints
/// share a sign but which still closes in on an interior root counts as
/// bracketed.
pub fn bisect<F>(f: F, mut lo: f64, mut hi: f64, config: &BisectionConfig) -> BisectionOutcome
where
    F: Fn(f64) -> f64,
{
    let mut f_lo = f(lo);
    let mut f_hi = f(hi);

    for iter in 0..config.max_iterations {
        let mid = 0.5 * (lo + hi);
        if hi - lo < config.tolerance {
            return BisectionOutcome {
                root: mid,
                iterations: iter,
                converged: true,
                bracketed: f_lo * f_hi <= 0.0,
            };
        }

        let f_mid = f(mid);
        if f_lo * f_mid <= 0.0 {
            hi = mid;
            f_hi = f_mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    BisectionOutcome {
        root: 0.5 * (lo + hi),
        iterations: config.max_iterations,
        converged: hi - lo < config.tolerance,
        bracketed: f_lo * f_hi <= 0.0,
    }
}
