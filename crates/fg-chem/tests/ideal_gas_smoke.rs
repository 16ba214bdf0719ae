//! Ideal-gas backend driven through the capability traits only.

use fg_chem::{ChemError, ChemistryBackend, Composition, GasState, IdealGasBackend};
use fg_core::units::{k, pa};

fn lean_blend<B: ChemistryBackend>(backend: &B, phi: f64) -> B::Gas {
    let fuel = Composition::pure("C3H8").to_solver_string();
    let oxidizer: Composition = "O2:1, N2:3.76".parse().unwrap();
    let oxidizer = oxidizer.to_solver_string();

    let mut gas = backend.load_mechanism("propane.yaml").unwrap();
    gas.set_tpx(k(300.0), pa(101_325.0), &format!("{fuel}, {oxidizer}"))
        .unwrap();
    gas.set_equivalence_ratio(phi, &fuel, &oxidizer).unwrap();
    gas
}

#[test]
fn stoichiometric_propane_air() {
    let gas = lean_blend(&IdealGasBackend::new(), 1.0);
    let x = gas.mole_fractions().unwrap();

    // C3H8 + 5 (O2 + 3.76 N2)
    let total = 1.0 + 5.0 * 4.76;
    assert!((x.fraction("C3H8") - 1.0 / total).abs() < 1e-12);
    assert!((x.fraction("O2") - 5.0 / total).abs() < 1e-12);
}

#[test]
fn leaner_means_less_fuel() {
    let backend = IdealGasBackend::new();
    let lean = lean_blend(&backend, 0.6);
    let stoich = lean_blend(&backend, 1.0);
    let fuel_lean = lean.mole_fractions().unwrap().fraction("C3H8");
    let fuel_stoich = stoich.mole_fractions().unwrap().fraction("C3H8");
    assert!(fuel_lean < fuel_stoich);
    assert!((lean.equivalence_ratio().unwrap() - 0.6).abs() < 1e-12);
}

#[test]
fn unknown_species_rejected() {
    let mut gas = IdealGasBackend::new().load_mechanism("gri30.yaml").unwrap();
    let err = gas.set_tpx(k(300.0), pa(1e5), "Zz9:1").unwrap_err();
    assert!(matches!(err, ChemError::UnknownElement { .. }));
}

#[test]
fn mechanism_style_heptane_names() {
    let oxidizer = "O2:1, N2:3.76";
    for fuel in ["nc7h16:1", "NC7H16:1", "n-C7H16:1"] {
        let mut gas = IdealGasBackend::new().load_mechanism("heptane.yaml").unwrap();
        gas.set_tpx(k(300.0), pa(101_325.0), &format!("{fuel}, {oxidizer}"))
            .unwrap();
        gas.set_equivalence_ratio(1.0, fuel, oxidizer).unwrap();

        // C7H16 + 11 (O2 + 3.76 N2)
        let species = fuel.trim_end_matches(":1");
        let x = gas.mole_fractions().unwrap();
        let expected = 1.0 / (1.0 + 11.0 * 4.76);
        assert!((x.fraction(species) - expected).abs() < 1e-12, "{fuel}");
    }
}
