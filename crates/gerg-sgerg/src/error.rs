//! SGERG-88 calculation errors.

use crate::analysis::Parameter;
use gerg_core::CoreError;
use std::fmt;
use thiserror::Error;

/// Result type for SGERG-88 operations.
pub type SgergResult<T> = Result<T, SgergError>;

/// Errors that terminate an SGERG-88 calculation.
///
/// No variant carries a partial result: a call either yields fully converged
/// properties or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SgergError {
    /// An input lies outside the range the correlation is validated for.
    #[error("{parameter} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        parameter: Parameter,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Composition inference found no valid mixture for the analysis.
    #[error("Composition did not converge to a valid mixture: {0}")]
    CompositionConvergence(#[from] CompositionError),

    /// The molar volume iteration ran out of iterations.
    #[error(
        "Density did not converge after {iterations} iterations (pressure residual {residual} bar)"
    )]
    DensityConvergence { iterations: usize, residual: f64 },

    /// A mixing rule needed the root of a negative product.
    #[error("No viable solution for virial coefficient {coefficient}")]
    NoViableVirial { coefficient: &'static str },

    /// Non-finite intermediate or invalid configuration.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Which loop of the composition inference gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionStage {
    /// Secant iteration matching the relative density.
    MolarMass,
    /// Outer iteration matching the calorific value.
    CalorificValue,
}

impl fmt::Display for CompositionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MolarMass => f.write_str("molar mass"),
            Self::CalorificValue => f.write_str("calorific value"),
        }
    }
}

/// Reasons composition inference fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    #[error("{stage} iteration exceeded {iterations} iterations")]
    IterationLimit {
        stage: CompositionStage,
        iterations: usize,
    },

    /// Relative density too low for the given CO2 and H2 content.
    #[error("relative density {rm} conflicts with CO2 fraction {x3} and H2 fraction {x5}")]
    ConflictingInput { x3: f64, x5: f64, rm: f64 },

    #[error("calculated N2 fraction {x2} outside [-0.01, 0.5]")]
    NitrogenOutOfRange { x2: f64 },

    #[error("sum of N2 ({x2}) and CO2 ({x3}) fractions exceeds 0.5")]
    InertsOutOfRange { x2: f64, x3: f64 },

    #[error("calculated N2 fraction {x2} conflicts with relative density {rm}")]
    ConflictingNitrogen { x2: f64, rm: f64 },
}

impl From<SgergError> for CoreError {
    fn from(e: SgergError) -> Self {
        match e {
            SgergError::OutOfRange { .. } => CoreError::InvalidArg {
                what: "input out of range",
            },
            SgergError::CompositionConvergence(_) => CoreError::InvalidArg {
                what: "composition",
            },
            SgergError::DensityConvergence { .. } => CoreError::InvalidArg {
                what: "density convergence",
            },
            SgergError::NoViableVirial { .. } => CoreError::InvalidArg {
                what: "virial coefficient",
            },
            SgergError::Core(inner) => inner,
        }
    }
}
