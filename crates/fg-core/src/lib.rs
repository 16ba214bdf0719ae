//! fg-core: shared foundation for flamegen.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + guarded division)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FgError, FgResult};
pub use numeric::*;
pub use units::*;
