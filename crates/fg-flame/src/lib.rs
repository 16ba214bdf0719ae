//! fg-flame: closed-form helpers for 1D premixed flames.
//!
//! Provides:
//! - Laminar flame speed from the velocity jump and density ratio across the front
//! - Grid point estimate for resolving a flame of given thickness
//!
//! Everything here is pure arithmetic over `f64`. Degenerate inputs (a zero
//! density, a unit density ratio, a zero flame thickness) are reported as
//! [`FgError::DivisionByZero`](fg_core::FgError) rather than leaking `inf`/`NaN`.

pub mod flame_speed;
pub mod grid;

pub use flame_speed::{
    FlameFrame, flame_speed, laminar_flame_speed, laminar_flame_speed_profile,
    laminar_flame_speed_si,
};
pub use grid::{GridEstimate, calculate_1d_points_in_grid, estimate_1d_grid};
