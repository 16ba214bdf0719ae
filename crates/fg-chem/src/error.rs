//! Chemistry errors.

use fg_core::FgError;
use thiserror::Error;

/// Result type for chemistry operations.
pub type ChemResult<T> = Result<T, ChemError>;

/// Errors raised while handling compositions or driving a chemistry backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// A composition with no species.
    #[error("Composition must contain at least one species")]
    EmptyComposition,

    /// Non-physical values (negative fraction, non-positive temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A composition string that does not follow `species:value, ...`.
    #[error("Cannot parse composition '{input}': {reason}")]
    Parse { input: String, reason: &'static str },

    /// Species name containing a symbol that is not a known element.
    #[error("Unknown element '{symbol}' in species '{species}'")]
    UnknownElement { species: String, symbol: String },

    /// Fuel or oxidizer cannot take part in an equivalence-ratio mix.
    #[error("Stoichiometry error: {what}")]
    Stoichiometry { what: &'static str },

    /// Backend error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<FgError> for ChemError {
    fn from(err: FgError) -> Self {
        ChemError::Backend {
            message: err.to_string(),
        }
    }
}
