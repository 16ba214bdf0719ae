//! Flame helpers used together the way a preprocessing script does.

use fg_core::{Tolerances, nearly_equal};
use fg_flame::{FlameFrame, estimate_1d_grid, flame_speed, laminar_flame_speed};

#[test]
fn methane_air_like_numbers() {
    // Unburnt ~300 K, burnt ~2200 K at 1 atm
    let rho_u = 1.13;
    let rho_b = 0.155;
    let v_u = 0.38;
    let v_b = v_u * rho_u / rho_b;

    // In the stationary frame the unburnt velocity is the flame speed
    let s_stat = flame_speed(v_u, v_b, rho_u, rho_b, FlameFrame::Stationary).unwrap();
    assert!(nearly_equal(s_stat, v_u, Tolerances::default()), "s = {s_stat}");

    let s_inlet = laminar_flame_speed(0.0, v_b - v_u, rho_u, rho_b, false).unwrap();
    assert!(s_inlet > 0.0 && s_inlet < 1.0, "s = {s_inlet}");
}

#[test]
fn grid_for_thin_flame() {
    // 0.5 mm flame resolved with 20 points over a 2 cm domain
    let g = estimate_1d_grid(-0.01, 0.01, 5e-4, 20.0).unwrap();
    assert!(nearly_equal(g.delta_x, 2.5e-5, Tolerances::default()));
    assert!(nearly_equal(g.n_points, 800.0, Tolerances::default()));
    assert_eq!(g.grid_points(), 800);
}
