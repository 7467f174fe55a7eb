//! Solver tolerances and iteration caps.

use gerg_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Convergence settings of one iterative loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Absolute tolerance on the loop's residual
    pub tolerance: f64,
    /// Maximum iterations before the loop fails
    pub max_iterations: usize,
}

impl LoopConfig {
    pub const fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    fn validate(&self, what: &'static str) -> CoreResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(CoreError::InvalidArg { what });
        }
        if self.max_iterations == 0 {
            return Err(CoreError::InvalidArg { what });
        }
        Ok(())
    }
}

/// Solver configuration.
///
/// The defaults are the values of the GERG-88 reference routine; changing
/// them gives results that are no longer comparable with published figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Secant loop on the reference-state density [kg/m³]
    pub molar_mass: LoopConfig,
    /// Outer loop on the calorific value [MJ/m³]
    pub calorific_value: LoopConfig,
    /// Molar volume loop, residual in pressure [bar]
    pub density: LoopConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            molar_mass: LoopConfig::new(1.0e-6, 20),
            calorific_value: LoopConfig::new(1.0e-4, 20),
            density: LoopConfig::new(1.0e-5, 20),
        }
    }
}

impl SolverConfig {
    /// Reject non-positive tolerances and zero iteration caps.
    pub fn validate(&self) -> CoreResult<()> {
        self.molar_mass.validate("molar mass loop settings")?;
        self.calorific_value
            .validate("calorific value loop settings")?;
        self.density.validate("density loop settings")?;
        Ok(())
    }
}
