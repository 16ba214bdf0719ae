//! Gas construction from a flame configuration.

use fg_chem::{ChemistryBackend, GasState};
use fg_core::units::{k, pa};
use fg_project::{FlameConfig, FlameletTypeData};

use crate::error::{AppError, AppResult};

/// The only supported `mixApproach`.
pub const PHI_APPROACH: &str = "phi";

/// Build a gas from a raw flame configuration document.
pub fn gas_from_fg<B: ChemistryBackend>(
    backend: &B,
    fg_dict: &serde_json::Value,
) -> AppResult<B::Gas> {
    let config = FlameConfig::from_value(fg_dict)?;
    gas_from_config(backend, &config)
}

/// Build a gas from a typed flame configuration.
///
/// The reactants (fuel then oxidizer, as listed) are set at `Tf` and `pressure`
/// first; the phi mixing then replaces the composition with the
/// equivalence-ratio blend at the same temperature and pressure.
pub fn gas_from_config<B: ChemistryBackend>(
    backend: &B,
    config: &FlameConfig,
) -> AppResult<B::Gas> {
    let temperature = k(config.heat_loss.tf);
    let pressure = pa(config.chemistry.pressure);
    let mechanism = config.chemistry.mechanism.as_str();

    let mut gas = backend.load_mechanism(mechanism)?;

    let fuel = config.chemistry.fuel_x.to_solver_string();
    let oxidizer = config.chemistry.oxidizer_x.to_solver_string();
    let reactants = format!("{fuel}, {oxidizer}");
    gas.set_tpx(temperature, pressure, &reactants)?;

    let approach = config.flamelet_type.mix_approach.as_str();
    if approach != PHI_APPROACH {
        return Err(AppError::UnsupportedMixApproach {
            approach: approach.to_string(),
        });
    }
    let phi = equivalence_ratio(&config.flamelet_type)?;
    gas.set_equivalence_ratio(phi, &fuel, &oxidizer)?;

    tracing::info!(
        backend = backend.name(),
        mechanism,
        t_k = temperature.value,
        p_pa = pressure.value,
        phi,
        "built gas"
    );
    Ok(gas)
}

fn equivalence_ratio(flamelet: &FlameletTypeData) -> AppResult<f64> {
    flamelet
        .mix_method
        .as_ref()
        .ok_or(AppError::MissingKey { key: "mixMethod" })?
        .as_f64()
        .ok_or_else(|| AppError::InvalidInput("mixMethod must be a number for phi mixing".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_chem::IdealGasBackend;
    use serde_json::json;

    fn config(approach: &str, method: serde_json::Value) -> serde_json::Value {
        json!({
            "HeatLossData": {"Tf": 320.0},
            "ChemistryData": {
                "pressure": 2.0e5,
                "mechanism": "gri30.yaml",
                "fuelX": {"CH4": 1},
                "oxidizerX": {"O2": 1, "N2": 3.76}
            },
            "FlameletTypeData": {"mixApproach": approach, "mixMethod": method}
        })
    }

    #[test]
    fn phi_build() {
        let gas = gas_from_fg(&IdealGasBackend::new(), &config("phi", json!(1.0))).unwrap();
        assert_eq!(gas.mechanism(), "gri30.yaml");
        assert_eq!(gas.temperature().value, 320.0);
        assert_eq!(gas.pressure().value, 2.0e5);
        assert!((gas.equivalence_ratio().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn other_approaches_rejected() {
        for approach in ["rich", "PHI", "Z", ""] {
            let err = gas_from_fg(&IdealGasBackend::new(), &config(approach, json!(1.0)))
                .unwrap_err();
            assert!(
                matches!(err, AppError::UnsupportedMixApproach { .. }),
                "{approach}: {err}"
            );
            assert!(err.to_string().contains("only phi-based mixing is supported"));
        }
    }

    #[test]
    fn phi_needs_numeric_method() {
        let mut doc = config("phi", json!(1.0));
        doc["FlameletTypeData"]
            .as_object_mut()
            .unwrap()
            .remove("mixMethod");
        let err = gas_from_fg(&IdealGasBackend::new(), &doc).unwrap_err();
        assert!(matches!(err, AppError::MissingKey { key: "mixMethod" }));

        let err = gas_from_fg(&IdealGasBackend::new(), &config("phi", json!("lean"))).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn missing_keys_are_typed_config_errors() {
        use fg_project::ProjectError;
        use std::error::Error;

        let mut doc = config("phi", json!(1.0));
        doc["HeatLossData"] = json!({});
        let err = gas_from_fg(&IdealGasBackend::new(), &doc).unwrap_err();
        assert!(matches!(err, AppError::Config(ProjectError::Schema(_))));
        assert!(err.to_string().contains("Tf"), "{err}");
        assert!(err.source().is_some());

        for key in ["pressure", "mechanism"] {
            let mut doc = config("phi", json!(1.0));
            doc["ChemistryData"].as_object_mut().unwrap().remove(key);
            let err = gas_from_fg(&IdealGasBackend::new(), &doc).unwrap_err();
            assert!(
                matches!(err, AppError::Config(ProjectError::Schema(_))),
                "{key}: {err}"
            );
            assert!(err.to_string().contains(key), "{key}: {err}");
        }
    }

    #[test]
    fn backend_errors_surface() {
        let mut doc = config("phi", json!(1.0));
        doc["HeatLossData"]["Tf"] = json!(-5.0);
        let err = gas_from_fg(&IdealGasBackend::new(), &doc).unwrap_err();
        assert!(matches!(err, AppError::Chemistry(_)));
    }
}
