//! gerg-core: numeric foundation for the SGERG-88 solver.
//!
//! Contains:
//! - units (uom SI types + constructors in the units of the gas analysis)
//! - numeric (finiteness check + coefficient polynomial)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
