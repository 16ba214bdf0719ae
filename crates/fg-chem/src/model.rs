//! Capability traits for chemistry backends.
//!
//! Callers build and drive gas states only through these traits, so a kinetics
//! library binding can stand in for the in-tree [`IdealGasBackend`](crate::IdealGasBackend)
//! and tests can record the calls they receive.

use crate::composition::Composition;
use crate::error::{ChemError, ChemResult};
use fg_core::units::{Pressure, Temperature};

/// Factory for gas states from a mechanism identifier.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait ChemistryBackend: Send + Sync {
    type Gas: GasState;

    /// Backend name (for logging).
    fn name(&self) -> &str;

    /// Construct a gas from a mechanism identifier (file name or built-in name).
    fn load_mechanism(&self, mechanism: &str) -> ChemResult<Self::Gas>;
}

/// A thermodynamic state owned by a chemistry backend.
pub trait GasState {
    /// Mechanism the state was built from.
    fn mechanism(&self) -> &str;

    fn temperature(&self) -> Temperature;

    fn pressure(&self) -> Pressure;

    /// Current mole fractions, `None` until a composition has been set.
    fn mole_fractions(&self) -> Option<&Composition>;

    /// Set temperature, pressure and mole fractions (`species:value, ...`).
    fn set_tpx(&mut self, t: Temperature, p: Pressure, x: &str) -> ChemResult<()>;

    /// Set the mole fractions to the fuel/oxidizer blend with equivalence ratio `phi`.
    ///
    /// Temperature and pressure are kept.
    fn set_equivalence_ratio(&mut self, phi: f64, fuel: &str, oxidizer: &str) -> ChemResult<()>;
}

/// Validation helpers shared by backends.
pub(crate) mod validation {
    use super::*;

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> ChemResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(ChemError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> ChemResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(ChemError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure an equivalence ratio is non-negative and finite.
    pub fn validate_phi(phi: f64) -> ChemResult<()> {
        if !phi.is_finite() || phi < 0.0 {
            return Err(ChemError::NonPhysical {
                what: "equivalence ratio must be non-negative and finite",
            });
        }
        Ok(())
    }

}
