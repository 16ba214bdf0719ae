//! Laminar flame speed from mass conservation across a 1D flame front.

use fg_core::units::{Density, Velocity, mps};
use fg_core::{FgError, FgResult, Real, checked_div, ensure_finite};

/// Reference frame of the flame front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlameFrame {
    /// The front does not move; burnt gas leaves at `v_b`.
    Stationary,
    /// Unburnt gas enters through an inlet at `v_u` and the front propagates.
    #[default]
    Inlet,
}

impl FlameFrame {
    pub fn from_stationary(stationary: bool) -> Self {
        if stationary {
            FlameFrame::Stationary
        } else {
            FlameFrame::Inlet
        }
    }
}

/// Laminar flame speed `s_l` for a 1D flame.
///
/// - stationary: `s_l = v_b * rho_b / rho_u`
/// - inlet:      `s_l = (v_b - v_u) / (rho_u / rho_b - 1)`
pub fn laminar_flame_speed(
    v_u: Real,
    v_b: Real,
    rho_u: Real,
    rho_b: Real,
    stationary: bool,
) -> FgResult<Real> {
    flame_speed(v_u, v_b, rho_u, rho_b, FlameFrame::from_stationary(stationary))
}

/// Same as [`laminar_flame_speed`] with the frame given explicitly.
pub fn flame_speed(
    v_u: Real,
    v_b: Real,
    rho_u: Real,
    rho_b: Real,
    frame: FlameFrame,
) -> FgResult<Real> {
    ensure_finite(v_u, "unburnt velocity")?;
    ensure_finite(v_b, "burnt velocity")?;
    ensure_finite(rho_u, "unburnt density")?;
    ensure_finite(rho_b, "burnt density")?;

    match frame {
        FlameFrame::Stationary => checked_div(v_b * rho_b, rho_u, "unburnt density"),
        FlameFrame::Inlet => {
            let ratio = checked_div(rho_u, rho_b, "burnt density")?;
            checked_div(v_b - v_u, ratio - 1.0, "density ratio minus one")
        }
    }
}

/// Unit-checked variant of [`flame_speed`].
pub fn laminar_flame_speed_si(
    v_u: Velocity,
    v_b: Velocity,
    rho_u: Density,
    rho_b: Density,
    frame: FlameFrame,
) -> FgResult<Velocity> {
    flame_speed(v_u.value, v_b.value, rho_u.value, rho_b.value, frame).map(mps)
}

/// Element-wise flame speed over sampled profiles (e.g. one entry per time step).
///
/// All four slices must have the same length. The first failing element aborts
/// the evaluation and is reported with its index.
pub fn laminar_flame_speed_profile(
    v_u: &[Real],
    v_b: &[Real],
    rho_u: &[Real],
    rho_b: &[Real],
    frame: FlameFrame,
) -> FgResult<Vec<Real>> {
    let n = v_u.len();
    for (what, len) in [
        ("burnt velocity", v_b.len()),
        ("unburnt density", rho_u.len()),
        ("burnt density", rho_b.len()),
    ] {
        if len != n {
            return Err(FgError::LengthMismatch {
                what,
                expected: n,
                found: len,
            });
        }
    }

    (0..n)
        .map(|i| {
            flame_speed(v_u[i], v_b[i], rho_u[i], rho_b[i], frame).map_err(|e| {
                FgError::AtIndex {
                    index: i,
                    source: Box::new(e),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::units::kgpm3;
    use fg_core::{Tolerances, nearly_equal};

    #[test]
    fn stationary_front() {
        let s = laminar_flame_speed(10.0, 2.0, 1.0, 2.0, true).unwrap();
        assert_eq!(s, 4.0);
    }

    #[test]
    fn inlet_front() {
        let s = laminar_flame_speed(10.0, 2.0, 1.0, 2.0, false).unwrap();
        assert_eq!(s, 16.0);
    }

    #[test]
    fn default_frame_is_inlet() {
        assert_eq!(FlameFrame::default(), FlameFrame::Inlet);
        assert_eq!(FlameFrame::from_stationary(false), FlameFrame::default());
    }

    #[test]
    fn zero_unburnt_density_stationary() {
        let err = laminar_flame_speed(1.0, 2.0, 0.0, 1.0, true).unwrap_err();
        assert!(matches!(err, FgError::DivisionByZero { .. }));
    }

    #[test]
    fn zero_burnt_density_inlet() {
        let err = laminar_flame_speed(1.0, 2.0, 1.0, 0.0, false).unwrap_err();
        assert_eq!(
            err,
            FgError::DivisionByZero {
                what: "burnt density"
            }
        );
    }

    #[test]
    fn equal_densities_inlet() {
        for rho in [0.1, 1.0, 1.2, 7.5] {
            let err = laminar_flame_speed(0.3, 2.1, rho, rho, false).unwrap_err();
            assert_eq!(
                err,
                FgError::DivisionByZero {
                    what: "density ratio minus one"
                }
            );
        }
    }

    #[test]
    fn non_finite_input_rejected() {
        let err = laminar_flame_speed(f64::NAN, 2.0, 1.0, 2.0, false).unwrap_err();
        assert!(matches!(err, FgError::NonFinite { .. }));
    }

    #[test]
    fn si_variant_matches_raw() {
        let s = laminar_flame_speed_si(
            mps(0.4),
            mps(2.8),
            kgpm3(1.13),
            kgpm3(0.16),
            FlameFrame::Inlet,
        )
        .unwrap();
        let raw = flame_speed(0.4, 2.8, 1.13, 0.16, FlameFrame::Inlet).unwrap();
        assert!(nearly_equal(s.value, raw, Tolerances::default()));
    }

    #[test]
    fn profile_reports_failing_index() {
        let err = laminar_flame_speed_profile(
            &[10.0, 10.0],
            &[2.0, 2.0],
            &[1.0, 2.0],
            &[2.0, 2.0],
            FlameFrame::Inlet,
        )
        .unwrap_err();
        match err {
            FgError::AtIndex { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, FgError::DivisionByZero { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn profile_length_mismatch() {
        let err = laminar_flame_speed_profile(
            &[1.0, 2.0],
            &[1.0, 2.0],
            &[1.0],
            &[1.0, 2.0],
            FlameFrame::Stationary,
        )
        .unwrap_err();
        assert_eq!(
            err,
            FgError::LengthMismatch {
                what: "unburnt density",
                expected: 2,
                found: 1
            }
        );
    }
}
