use crate::FgError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FgError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FgError::NonFinite { what, value: v })
    }
}

/// Divide `num` by `den`, refusing an exact zero denominator.
///
/// The quotient is checked for finiteness so overflow does not leak out as `inf`.
pub fn checked_div(num: Real, den: Real, what: &'static str) -> Result<Real, FgError> {
    if den == 0.0 {
        return Err(FgError::DivisionByZero { what });
    }
    ensure_finite(num / den, what)
}
