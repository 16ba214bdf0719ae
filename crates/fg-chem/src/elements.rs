//! Elemental makeup of species, parsed from their formula-style names.
//!
//! Mechanism species are named by formula (`CH4`, `C3H8`, `H2O2`), often in
//! upper case (`AR`, `HE`, `NC7H16`) and sometimes in lower case (`nc7h16`).
//! A second capital is folded into the symbol before it only when it is not an
//! element on its own, so `CO` is carbon monoxide and `AR` is argon. Isomer
//! markers (`n-`, `i-`, `iso-`, and the dash-less `N`/`I` in front of a carbon
//! count) and trailing state marks such as `(S)` or `(g)` are ignored.
//! Parenthesised groups may carry a multiplier: `C6H4(CH3)2`.

use crate::error::{ChemError, ChemResult};

struct ElementData {
    symbol: &'static str,
    atomic_mass: f64,
}

// Atomic masses [kg/kmol]
const ELEMENTS: &[ElementData] = &[
    ElementData {
        symbol: "H",
        atomic_mass: 1.008,
    },
    ElementData {
        symbol: "He",
        atomic_mass: 4.0026,
    },
    ElementData {
        symbol: "C",
        atomic_mass: 12.011,
    },
    ElementData {
        symbol: "N",
        atomic_mass: 14.007,
    },
    ElementData {
        symbol: "O",
        atomic_mass: 15.999,
    },
    ElementData {
        symbol: "F",
        atomic_mass: 18.998,
    },
    ElementData {
        symbol: "Ne",
        atomic_mass: 20.18,
    },
    ElementData {
        symbol: "S",
        atomic_mass: 32.065,
    },
    ElementData {
        symbol: "Cl",
        atomic_mass: 35.45,
    },
    ElementData {
        symbol: "Ar",
        atomic_mass: 39.948,
    },
    ElementData {
        symbol: "Kr",
        atomic_mass: 83.798,
    },
    ElementData {
        symbol: "Xe",
        atomic_mass: 131.293,
    },
];

const ISOMER_PREFIXES: &[&str] = &["iso-", "n-", "i-"];

const STATE_MARKS: &[&str] = &["(S)", "(s)", "(G)", "(g)", "(L)", "(l)", "(C)", "(c)"];

fn element(symbol: &str) -> Option<&'static ElementData> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Atom counts of one species, in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    atoms: Vec<(&'static str, f64)>,
}

impl Formula {
    /// Parse a formula-style species name.
    pub fn parse(species: &str) -> ChemResult<Self> {
        let body = formula_body(species);
        if body.is_empty() {
            return Err(ChemError::InvalidArg {
                what: "empty species name",
            });
        }

        let chars: Vec<char> = body.chars().collect();
        let mut pos = 0;
        let atoms = parse_atoms(species, &chars, &mut pos, false)?;
        Ok(Self { atoms })
    }

    /// Number of atoms of `symbol` (0.0 if absent).
    pub fn count(&self, symbol: &str) -> f64 {
        self.atoms
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, n)| *n)
            .unwrap_or(0.0)
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(&self) -> f64 {
        self.atoms
            .iter()
            .map(|(symbol, n)| element(symbol).map(|e| e.atomic_mass).unwrap_or(0.0) * n)
            .sum()
    }

    /// Oxygen atoms needed to burn this species completely to CO2, H2O and SO2,
    /// net of the oxygen it carries. Negative for oxidizers.
    pub fn oxygen_demand(&self) -> f64 {
        2.0 * self.count("C") + 0.5 * self.count("H") + 2.0 * self.count("S") - self.count("O")
    }
}

/// Strip isomer markers and state marks, and upper-case all-lower-case names.
fn formula_body(species: &str) -> String {
    let mut body = species.trim();

    if let Some(len) = ISOMER_PREFIXES.iter().find_map(|p| {
        body.get(..p.len())
            .filter(|head| head.eq_ignore_ascii_case(p))
            .map(|_| p.len())
    }) {
        body = &body[len..];
    }
    if let Some(stripped) = STATE_MARKS.iter().find_map(|m| body.strip_suffix(*m)) {
        body = stripped;
    }

    let mut body = if body.chars().any(|c| c.is_ascii_uppercase()) {
        body.to_string()
    } else {
        body.to_ascii_uppercase()
    };

    // NC7H16, IC8H18
    let bytes = body.as_bytes();
    let marked = match bytes {
        [b'I', next, ..] => next.is_ascii_uppercase(),
        [b'N', b'C', digit, ..] => digit.is_ascii_digit(),
        _ => false,
    };
    if marked {
        body.remove(0);
    }
    body
}

fn parse_atoms(
    species: &str,
    chars: &[char],
    pos: &mut usize,
    nested: bool,
) -> ChemResult<Vec<(&'static str, f64)>> {
    let unknown = |symbol: &str| ChemError::UnknownElement {
        species: species.to_string(),
        symbol: symbol.to_string(),
    };
    let unbalanced = || ChemError::Parse {
        input: species.to_string(),
        reason: "unbalanced parentheses",
    };

    let mut atoms: Vec<(&'static str, f64)> = Vec::new();
    while *pos < chars.len() {
        let c = chars[*pos];
        match c {
            '(' => {
                *pos += 1;
                let group = parse_atoms(species, chars, pos, true)?;
                let n = read_count(chars, pos).unwrap_or(1.0);
                for (symbol, count) in group {
                    accumulate(&mut atoms, symbol, count * n);
                }
            }
            ')' if nested => {
                *pos += 1;
                return Ok(atoms);
            }
            ')' => return Err(unbalanced()),
            c if c.is_ascii_uppercase() => {
                *pos += 1;
                let mut symbol = c.to_string();
                if let Some(&next) = chars.get(*pos) {
                    let two = format!("{c}{}", next.to_ascii_lowercase());
                    let folds = next.is_ascii_lowercase()
                        || (next.is_ascii_uppercase()
                            && element(&next.to_string()).is_none()
                            && element(&two).is_some());
                    if folds {
                        symbol = two;
                        *pos += 1;
                    }
                }
                let data = element(&symbol).ok_or_else(|| unknown(symbol.as_str()))?;
                let n = read_count(chars, pos).unwrap_or(1.0);
                accumulate(&mut atoms, data.symbol, n);
            }
            other => return Err(unknown(other.to_string().as_str())),
        }
    }

    if nested {
        return Err(unbalanced());
    }
    Ok(atoms)
}

fn read_count(chars: &[char], pos: &mut usize) -> Option<f64> {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    chars[start..*pos].iter().collect::<String>().parse().ok()
}

fn accumulate(atoms: &mut Vec<(&'static str, f64)>, symbol: &'static str, count: f64) {
    match atoms.iter_mut().find(|(s, _)| *s == symbol) {
        Some((_, n)) => *n += count,
        None => atoms.push((symbol, count)),
    }
}
