//! Flame configuration schema.
//!
//! Field names follow the flame-generation JSON layout:
//!
//! ```json
//! {
//!   "HeatLossData": {"Tf": 300.0},
//!   "ChemistryData": {
//!     "pressure": 101325.0, "mechanism": "gri30.yaml",
//!     "fuelX": {"CH4": 1.0},
//!     "oxidizerX": {"O2": 1.0, "N2": 3.76}
//!   },
//!   "FlameletTypeData": {"mixApproach": "phi", "mixMethod": 0.8}
//! }
//! ```
//!
//! Unknown keys are ignored. A missing key fails the whole parse with an error
//! naming the field.

use crate::{ProjectError, ProjectResult};
use fg_chem::Composition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlameConfig {
    #[serde(rename = "HeatLossData")]
    pub heat_loss: HeatLossData,
    #[serde(rename = "ChemistryData")]
    pub chemistry: ChemistryData,
    #[serde(rename = "FlameletTypeData")]
    pub flamelet_type: FlameletTypeData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatLossData {
    /// Fresh gas temperature [K].
    #[serde(rename = "Tf")]
    pub tf: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChemistryData {
    /// Pressure [Pa].
    pub pressure: f64,
    pub mechanism: String,
    #[serde(rename = "fuelX")]
    pub fuel_x: Composition,
    #[serde(rename = "oxidizerX")]
    pub oxidizer_x: Composition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlameletTypeData {
    #[serde(rename = "mixApproach")]
    pub mix_approach: String,
    /// Mixing parameter; its meaning depends on `mix_approach` (phi: the
    /// equivalence ratio).
    #[serde(
        rename = "mixMethod",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mix_method: Option<serde_json::Value>,
}

impl FlameConfig {
    /// Interpret an already parsed JSON document.
    pub fn from_value(value: &serde_json::Value) -> ProjectResult<Self> {
        Self::deserialize(value).map_err(ProjectError::Schema)
    }
}
