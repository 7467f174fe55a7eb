//! gerg-sgerg: compression factor of natural gas by the GERG-88 simplified
//! virial equation (SGERG-88).
//!
//! Provides:
//! - Simplified gas analysis (CO2, calorific value, relative density, H2)
//!   with range validation
//! - Inference of the equivalent five component mixture
//! - GERG-88 second and third virial coefficients
//! - Molar volume solve and compression factor
//!
//! # Example
//!
//! ```
//! use gerg_sgerg::sgerg;
//!
//! let props = sgerg(0.01, 37.0, 0.7443, 0.0, 8.0, 15.0)?;
//! assert!((props.z - 0.98110).abs() < 1e-5);
//! println!("x2 = {:.4}, Z = {:.6}, D = {:.3} mol/m³", props.x2, props.z, props.d);
//! # Ok::<(), gerg_sgerg::SgergError>(())
//! ```
//!
//! Every call is a pure function of its inputs and the solver configuration:
//! there is no global state and nothing to synchronise.

pub mod analysis;
pub mod composition;
pub mod config;
mod density;
pub mod error;
pub mod properties;
pub mod solver;
pub mod virial;

// Re-exports for ergonomics
pub use analysis::{Parameter, SimplifiedAnalysis};
pub use composition::{Component, Composition};
pub use config::{LoopConfig, SolverConfig};
pub use error::{CompositionError, CompositionStage, SgergError, SgergResult};
pub use properties::GasProperties;
pub use solver::{Sgerg, Solution, sgerg};
pub use virial::VirialCoefficients;
