//! Grid sizing for 1D flame discretization.

use fg_core::{FgResult, Real, Tolerances, checked_div, ensure_finite, nearly_equal};

/// Uniform grid spacing and resulting point count for a 1D domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridEstimate {
    /// Grid spacing [m] that places `n_flame_points` across the flame thickness.
    pub delta_x: Real,
    /// Number of spacings across the whole domain (not rounded).
    pub n_points: Real,
}

impl GridEstimate {
    /// Whole number of points, rounded up. Reversed bounds give 0.
    ///
    /// Values within round-off of an integer are not bumped to the next one.
    pub fn grid_points(&self) -> usize {
        if self.n_points <= 0.0 {
            return 0;
        }
        let nearest = self.n_points.round();
        if nearly_equal(self.n_points, nearest, Tolerances::default()) {
            nearest as usize
        } else {
            self.n_points.ceil() as usize
        }
    }
}

/// Estimate a uniform grid that resolves the flame with `n_flame_points` points.
///
/// `grid_rb < grid_lb` is not rejected; the estimate is then negative.
pub fn estimate_1d_grid(
    grid_lb: Real,
    grid_rb: Real,
    flame_thickness: Real,
    n_flame_points: Real,
) -> FgResult<GridEstimate> {
    ensure_finite(grid_lb, "left grid bound")?;
    ensure_finite(grid_rb, "right grid bound")?;
    ensure_finite(flame_thickness, "flame thickness")?;
    ensure_finite(n_flame_points, "flame points")?;

    let delta_x = checked_div(flame_thickness, n_flame_points, "flame points")?;
    let n_points = checked_div(grid_rb - grid_lb, delta_x, "grid spacing")?;

    tracing::info!(delta_x, n_points, "1D grid estimate");

    Ok(GridEstimate { delta_x, n_points })
}

/// Number of grid points `(grid_rb - grid_lb) / (flame_thickness / n_flame_points)`.
pub fn calculate_1d_points_in_grid(
    grid_lb: Real,
    grid_rb: Real,
    flame_thickness: Real,
    n_flame_points: Real,
) -> FgResult<Real> {
    estimate_1d_grid(grid_lb, grid_rb, flame_thickness, n_flame_points).map(|g| g.n_points)
}
