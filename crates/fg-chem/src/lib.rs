//! fg-chem: chemistry seam for flamegen.
//!
//! Provides:
//! - Ordered species compositions and the `species:value, ...` solver string
//! - Elemental makeup of species parsed from formula-style names
//! - `ChemistryBackend`/`GasState` traits isolating callers from a kinetics library
//! - An ideal-gas mixture backend that evaluates compositions and
//!   equivalence-ratio blends
//!
//! # Example
//!
//! ```
//! use fg_chem::{ChemistryBackend, GasState, IdealGasBackend};
//! use fg_core::units::{k, pa};
//!
//! let backend = IdealGasBackend::new();
//! let mut gas = backend.load_mechanism("gri30.yaml").unwrap();
//! gas.set_tpx(k(300.0), pa(101325.0), "CH4:1, O2:2, N2:7.52").unwrap();
//! gas.set_equivalence_ratio(0.8, "CH4:1", "O2:1, N2:3.76").unwrap();
//! assert!(gas.mole_fractions().is_some());
//! ```

pub mod composition;
pub mod elements;
pub mod error;
pub mod ideal;
pub mod model;

pub use composition::Composition;
pub use elements::Formula;
pub use error::{ChemError, ChemResult};
pub use ideal::{IdealGasBackend, IdealGasMixture};
pub use model::{ChemistryBackend, GasState};
