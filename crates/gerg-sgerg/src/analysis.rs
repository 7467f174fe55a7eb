//! Simplified gas analysis and its validity ranges.

use crate::error::{SgergError, SgergResult};
use gerg_core::constants::T0_K;
use gerg_core::units::{Pressure, Temperature, in_bar, in_celsius};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One of the six scalar inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Mole fraction CO2 (x3)
    Co2Fraction,
    /// Superior calorific value [MJ/m³] (hs)
    CalorificValue,
    /// Relative density (rm)
    RelativeDensity,
    /// Mole fraction H2 (x5)
    H2Fraction,
    /// Absolute pressure [bar] (p)
    Pressure,
    /// Temperature [°C] (tc)
    Temperature,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::Co2Fraction,
        Parameter::CalorificValue,
        Parameter::RelativeDensity,
        Parameter::H2Fraction,
        Parameter::Pressure,
        Parameter::Temperature,
    ];

    /// Inclusive range the correlation is validated for.
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::Co2Fraction => (0.0, 0.30),
            Self::CalorificValue => (20.0, 48.0),
            Self::RelativeDensity => (0.55, 0.90),
            Self::H2Fraction => (0.0, 0.10),
            Self::Pressure => (0.0, 120.0),
            Self::Temperature => (-23.0, 65.0),
        }
    }

    /// Check `value` against the range. NaN is never in range.
    pub fn check(self, value: f64) -> SgergResult<f64> {
        let (min, max) = self.range();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            debug!(parameter = %self, value, min, max, "input out of range");
            Err(SgergError::OutOfRange {
                parameter: self,
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Co2Fraction => "CO2 fraction",
            Self::CalorificValue => "calorific value",
            Self::RelativeDensity => "relative density",
            Self::H2Fraction => "H2 fraction",
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
        };
        f.write_str(label)
    }
}

/// The six inputs of an SGERG-88 calculation.
///
/// Calorific value and relative density refer to metering at 0 °C and
/// 1.01325 bar, combustion at 25 °C. Construction does not validate; see
/// [`SimplifiedAnalysis::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAnalysis {
    co2: f64,
    calorific_value: f64,
    relative_density: f64,
    h2: f64,
    pressure_bar: f64,
    temperature_c: f64,
}

impl SimplifiedAnalysis {
    /// Build from raw values in the argument order of `sgerg`.
    ///
    /// - `x3`: mole fraction CO2
    /// - `hs`: superior calorific value [MJ/m³]
    /// - `rm`: relative density
    /// - `x5`: mole fraction H2
    /// - `p`: absolute pressure [bar]
    /// - `tc`: temperature [°C]
    pub fn new(x3: f64, hs: f64, rm: f64, x5: f64, p: f64, tc: f64) -> Self {
        Self {
            co2: x3,
            calorific_value: hs,
            relative_density: rm,
            h2: x5,
            pressure_bar: p,
            temperature_c: tc,
        }
    }

    /// Build with pressure and temperature as typed quantities.
    pub fn from_quantities(
        x3: f64,
        hs: f64,
        rm: f64,
        x5: f64,
        p: Pressure,
        t: Temperature,
    ) -> Self {
        Self::new(x3, hs, rm, x5, in_bar(p), in_celsius(t))
    }

    pub fn co2(&self) -> f64 {
        self.co2
    }

    pub fn calorific_value(&self) -> f64 {
        self.calorific_value
    }

    pub fn relative_density(&self) -> f64 {
        self.relative_density
    }

    pub fn h2(&self) -> f64 {
        self.h2
    }

    pub fn pressure_bar(&self) -> f64 {
        self.pressure_bar
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_c + T0_K
    }

    /// Value of a single input.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Co2Fraction => self.co2,
            Parameter::CalorificValue => self.calorific_value,
            Parameter::RelativeDensity => self.relative_density,
            Parameter::H2Fraction => self.h2,
            Parameter::Pressure => self.pressure_bar,
            Parameter::Temperature => self.temperature_c,
        }
    }

    /// Check every input against its range.
    ///
    /// State conditions are checked before the gas analysis, so an input
    /// with several violations reports the pressure or temperature first.
    pub fn validate(&self) -> SgergResult<()> {
        const ORDER: [Parameter; 6] = [
            Parameter::Pressure,
            Parameter::Temperature,
            Parameter::RelativeDensity,
            Parameter::Co2Fraction,
            Parameter::CalorificValue,
            Parameter::H2Fraction,
        ];
        for parameter in ORDER {
            parameter.check(self.get(parameter))?;
        }
        Ok(())
    }
}
