use thiserror::Error;

pub type FgResult<T> = Result<T, FgError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Length mismatch for {what}: expected {expected}, got {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Element {index} failed: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<FgError>,
    },
}
