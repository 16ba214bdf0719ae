//! Error types for the fg-app service layer.

use fg_chem::ChemError;
use fg_core::FgError;
use fg_project::ProjectError;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ProjectError),

    #[error("Missing key: {key}")]
    MissingKey { key: &'static str },

    #[error("Mixing approach '{approach}' is not supported: only phi-based mixing is supported")]
    UnsupportedMixApproach { approach: String },

    #[error("Chemistry error: {0}")]
    Chemistry(#[from] ChemError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] FgError),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for fg-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<fg_results::ResultsError> for AppError {
    fn from(err: fg_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
