//! Species compositions and their solver string form.

use crate::error::{ChemError, ChemResult};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Ordered species fractions, e.g. `CH4:1, O2:2, N2:7.52`.
///
/// Order is insertion order and survives every conversion (JSON, string form).
/// Fractions are stored as given; use [`Composition::normalized`] for mole
/// fractions summing to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(String, f64)>,
}

impl Composition {
    /// Create a single-species composition.
    pub fn pure(species: impl Into<String>) -> Self {
        Self {
            items: vec![(species.into(), 1.0)],
        }
    }

    /// Create a composition from `(species, fraction)` pairs.
    ///
    /// Rejects an empty list, blank or repeated species names, and fractions that
    /// are negative or non-finite.
    pub fn new(items: Vec<(String, f64)>) -> ChemResult<Self> {
        if items.is_empty() {
            return Err(ChemError::EmptyComposition);
        }
        for (i, (species, frac)) in items.iter().enumerate() {
            if species.trim().is_empty() {
                return Err(ChemError::InvalidArg {
                    what: "blank species name",
                });
            }
            if !frac.is_finite() {
                return Err(ChemError::NonPhysical {
                    what: "non-finite species fraction",
                });
            }
            if *frac < 0.0 {
                return Err(ChemError::NonPhysical {
                    what: "negative species fraction",
                });
            }
            if items[..i].iter().any(|(s, _)| s == species) {
                return Err(ChemError::InvalidArg {
                    what: "repeated species name",
                });
            }
        }
        Ok(Self { items })
    }

    /// Build a composition from a JSON object of species to numbers.
    pub fn from_json(value: &serde_json::Value) -> ChemResult<Self> {
        let map = value.as_object().ok_or(ChemError::InvalidArg {
            what: "composition must be a JSON object",
        })?;
        let items = map
            .iter()
            .map(|(species, frac)| {
                frac.as_f64()
                    .map(|f| (species.clone(), f))
                    .ok_or(ChemError::InvalidArg {
                        what: "species fraction must be a number",
                    })
            })
            .collect::<ChemResult<Vec<_>>>()?;
        Self::new(items)
    }

    /// Solver string form: `species1:value1, species2:value2, ...`.
    pub fn to_solver_string(&self) -> String {
        self.to_string()
    }

    /// Copy scaled so the fractions sum to one.
    pub fn normalized(&self) -> ChemResult<Self> {
        let sum: f64 = self.items.iter().map(|(_, f)| f).sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(ChemError::NonPhysical {
                what: "fractions sum to zero or non-finite",
            });
        }
        Ok(Self {
            items: self
                .items
                .iter()
                .map(|(s, f)| (s.clone(), f / sum))
                .collect(),
        })
    }

    /// Fraction of a species (0.0 if not present).
    pub fn fraction(&self, species: &str) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over species in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(s, f)| (s.as_str(), *f))
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (species, frac)) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{species}:{frac}")?;
        }
        Ok(())
    }
}

impl FromStr for Composition {
    type Err = ChemError;

    fn from_str(s: &str) -> ChemResult<Self> {
        let parse_err = |reason| ChemError::Parse {
            input: s.to_string(),
            reason,
        };

        let mut items = Vec::new();
        for entry in s.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(parse_err("empty entry"));
            }
            let (species, frac) = entry
                .split_once(':')
                .ok_or_else(|| parse_err("missing ':'"))?;
            let frac: f64 = frac
                .trim()
                .parse()
                .map_err(|_| parse_err("fraction is not a number"))?;
            items.push((species.trim().to_string(), frac));
        }
        Self::new(items)
    }
}

impl Serialize for Composition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (species, frac) in &self.items {
            map.serialize_entry(species, frac)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Composition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CompositionVisitor;

        impl<'de> Visitor<'de> for CompositionVisitor {
            type Value = Composition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of species names to fractions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Composition, A::Error> {
                let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((species, frac)) = map.next_entry::<String, f64>()? {
                    items.push((species, frac));
                }
                Composition::new(items).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(CompositionVisitor)
    }
}
