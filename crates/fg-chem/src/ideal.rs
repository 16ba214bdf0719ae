//! Ideal-gas mixture backend.
//!
//! Evaluates mixture composition only: no thermodynamic tables and no kinetics.
//! The mechanism identifier is recorded verbatim and never read.

use crate::composition::Composition;
use crate::elements::Formula;
use crate::error::{ChemError, ChemResult};
use crate::model::{ChemistryBackend, GasState, validation};
use fg_core::checked_div;
use fg_core::units::{Density, Pressure, Temperature, constants, k, kgpm3};

/// Universal gas constant [J/(kmol·K)].
const R_UNIVERSAL: f64 = 8_314.462_618;

/// In-tree backend producing [`IdealGasMixture`] states.
#[derive(Debug, Clone, Default)]
pub struct IdealGasBackend {}

impl IdealGasBackend {
    pub fn new() -> Self {
        Self {}
    }
}

impl ChemistryBackend for IdealGasBackend {
    type Gas = IdealGasMixture;

    fn name(&self) -> &str {
        "ideal-gas"
    }

    fn load_mechanism(&self, mechanism: &str) -> ChemResult<IdealGasMixture> {
        if mechanism.trim().is_empty() {
            return Err(ChemError::InvalidArg {
                what: "empty mechanism identifier",
            });
        }
        tracing::debug!(backend = self.name(), mechanism, "loading mechanism");
        Ok(IdealGasMixture::new(mechanism))
    }
}

/// Gas state of the ideal-gas backend. Starts at 300 K and 1 atm with no
/// composition.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealGasMixture {
    mechanism: String,
    t: Temperature,
    p: Pressure,
    x: Option<Composition>,
}

impl IdealGasMixture {
    fn new(mechanism: &str) -> Self {
        Self {
            mechanism: mechanism.to_string(),
            t: k(300.0),
            p: constants::one_atm(),
            x: None,
        }
    }

    fn composition(&self) -> ChemResult<&Composition> {
        self.x.as_ref().ok_or(ChemError::InvalidArg {
            what: "composition has not been set",
        })
    }

    /// Mean molar mass [kg/kmol].
    pub fn mean_molar_mass(&self) -> ChemResult<f64> {
        self.composition()?
            .iter()
            .map(|(species, x)| Formula::parse(species).map(|f| f.molar_mass() * x))
            .sum()
    }

    /// Ideal-gas density `p M / (R T)`.
    pub fn density(&self) -> ChemResult<Density> {
        let m = self.mean_molar_mass()?;
        let rho = checked_div(self.p.value * m, R_UNIVERSAL * self.t.value, "gas temperature")?;
        Ok(kgpm3(rho))
    }

    /// Oxygen-based equivalence ratio `(2C + H/2 + 2S) / O` of the current mixture.
    ///
    /// Matches the ratio passed to [`GasState::set_equivalence_ratio`] when the
    /// fuel carries no oxygen.
    pub fn equivalence_ratio(&self) -> ChemResult<f64> {
        let mut demand = 0.0;
        let mut oxygen = 0.0;
        for (species, x) in self.composition()?.iter() {
            let formula = Formula::parse(species)?;
            demand += x * (formula.oxygen_demand() + formula.count("O"));
            oxygen += x * formula.count("O");
        }
        Ok(checked_div(demand, oxygen, "mixture oxygen")?)
    }
}

/// Mole-weighted net oxygen demand of a normalized composition.
fn oxygen_demand(comp: &Composition) -> ChemResult<f64> {
    comp.iter()
        .map(|(species, x)| Formula::parse(species).map(|f| f.oxygen_demand() * x))
        .sum()
}

/// Parse a composition string, check every species name, and normalize.
fn parse_mole_fractions(x: &str) -> ChemResult<Composition> {
    let comp: Composition = x.parse()?;
    for (species, _) in comp.iter() {
        Formula::parse(species)?;
    }
    comp.normalized()
}

/// Blend fuel and oxidizer so that the fuel/oxidizer ratio is `phi` times stoichiometric.
fn blend(phi: f64, fuel: &Composition, oxidizer: &Composition) -> ChemResult<Composition> {
    let required = oxygen_demand(fuel)?;
    let available = -oxygen_demand(oxidizer)?;
    if required <= 0.0 {
        return Err(ChemError::Stoichiometry {
            what: "fuel does not consume oxygen",
        });
    }
    if available <= 0.0 {
        return Err(ChemError::Stoichiometry {
            what: "oxidizer carries no free oxygen",
        });
    }

    // moles of fuel per mole of oxidizer
    let fuel_per_ox = checked_div(phi * available, required, "fuel oxygen demand")?;

    let mut items: Vec<(String, f64)> = Vec::with_capacity(fuel.len() + oxidizer.len());
    let fuel_part = fuel.iter().map(|(s, x)| (s, fuel_per_ox * x));
    for (species, n) in fuel_part.chain(oxidizer.iter()) {
        match items.iter_mut().find(|(s, _)| s == species) {
            Some((_, total)) => *total += n,
            None => items.push((species.to_string(), n)),
        }
    }
    Composition::new(items)?.normalized()
}

impl GasState for IdealGasMixture {
    fn mechanism(&self) -> &str {
        &self.mechanism
    }

    fn temperature(&self) -> Temperature {
        self.t
    }

    fn pressure(&self) -> Pressure {
        self.p
    }

    fn mole_fractions(&self) -> Option<&Composition> {
        self.x.as_ref()
    }

    fn set_tpx(&mut self, t: Temperature, p: Pressure, x: &str) -> ChemResult<()> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        let comp = parse_mole_fractions(x)?;

        self.t = t;
        self.p = p;
        self.x = Some(comp);
        Ok(())
    }

    fn set_equivalence_ratio(&mut self, phi: f64, fuel: &str, oxidizer: &str) -> ChemResult<()> {
        validation::validate_phi(phi)?;
        let fuel = parse_mole_fractions(fuel)?;
        let oxidizer = parse_mole_fractions(oxidizer)?;

        self.x = Some(blend(phi, &fuel, &oxidizer)?);
        Ok(())
    }
}
