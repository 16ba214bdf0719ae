//! Shared application service layer for flamegen.
//!
//! Ties the configuration schema (`fg-project`) to a chemistry backend
//! (`fg-chem`) for the CLI and for scripts using the crates directly.

pub mod error;
pub mod gas_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use gas_service::{PHI_APPROACH, gas_from_config, gas_from_fg};
