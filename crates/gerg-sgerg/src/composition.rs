//! Equivalent composition of the simplified analysis.
//!
//! SGERG-88 replaces the hydrocarbons of a natural gas with a single
//! equivalent hydrocarbon characterised by its molar calorific value `h`.
//! Together with N2, CO2, H2 and CO (tied to H2) this gives the five
//! component mixture the virial mixing rules work on. The hydrocarbon
//! fraction and `h` are found by matching the analysed relative density and
//! calorific value; N2 closes the balance.

use crate::analysis::SimplifiedAnalysis;
use crate::config::SolverConfig;
use crate::error::{CompositionError, CompositionStage, SgergResult};
use crate::virial;
use gerg_core::constants::T0_K;
use serde::Serialize;
use tracing::{debug, trace};

/// Hydrocarbon molar mass `M = GM1R0 + GM1R1·h` [g/mol].
const GM1R0: f64 = -2.709328;
const GM1R1: f64 = 0.021062199;
/// Molar masses [g/mol]: N2, CO2, H2, CO.
const GM2: f64 = 28.0135;
const GM3: f64 = 44.010;
const GM5: f64 = 2.0159;
const GM7: f64 = 28.010;
/// Ideal molar volume at 0 °C, 1.01325 bar [dm³/mol].
const FA: f64 = 22.414097;
/// Density of air at metering conditions [kg/m³].
const RL: f64 = 1.292923;
/// Molar calorific values [kJ/mol]: H2, CO.
const H5: f64 = 285.83;
const H7: f64 = 282.98;
/// CO content carried along with hydrogen (coke-oven gas ratio).
const CO_PER_H2: f64 = 0.0964;

/// Starting guesses for the inference.
const B_EFF_START: f64 = -0.065;
const H_START: f64 = 1000.0;

/// Components of the SGERG-88 mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Equivalent hydrocarbon (CH4 and higher homologues lumped)
    Hydrocarbon,
    /// Nitrogen (N₂)
    N2,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Hydrogen (H₂)
    H2,
    /// Carbon monoxide (CO)
    CO,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Hydrocarbon,
        Component::N2,
        Component::CO2,
        Component::H2,
        Component::CO,
    ];

    /// Molar mass [g/mol]; `None` for the equivalent hydrocarbon, whose mass
    /// depends on its calorific value.
    pub fn fixed_molar_mass(self) -> Option<f64> {
        match self {
            Self::Hydrocarbon => None,
            Self::N2 => Some(GM2),
            Self::CO2 => Some(GM3),
            Self::H2 => Some(GM5),
            Self::CO => Some(GM7),
        }
    }
}

/// Mole fractions of the five component mixture.
///
/// Only produced by composition inference; N2 is the closing residual so the
/// fractions sum to one up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Composition {
    hydrocarbon: f64,
    n2: f64,
    co2: f64,
    h2: f64,
    co: f64,
    /// Molar calorific value of the equivalent hydrocarbon [kJ/mol]
    hydrocarbon_heating_value: f64,
}

impl Composition {
    /// Trial mixture for hydrocarbon heating value `h` at reference molar
    /// density `amol`: the hydrocarbon fraction reproduces `hs`, N2 closes.
    fn trial(hs: f64, x3: f64, x5: f64, h: f64, amol: f64) -> Self {
        let x7 = x5 * CO_PER_H2;
        let x1 = (hs - (x5 * H5 + x7 * H7) * amol) / h / amol;
        let x2 = 1.0 - x1 - x3 - x5 - x7;
        Self {
            hydrocarbon: x1,
            n2: x2,
            co2: x3,
            h2: x5,
            co: x7,
            hydrocarbon_heating_value: h,
        }
    }

    pub fn mole_fraction(&self, component: Component) -> f64 {
        match component {
            Component::Hydrocarbon => self.hydrocarbon,
            Component::N2 => self.n2,
            Component::CO2 => self.co2,
            Component::H2 => self.h2,
            Component::CO => self.co,
        }
    }

    /// Iterate over all components with their mole fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(|c| (c, self.mole_fraction(c)))
    }

    pub fn hydrocarbon(&self) -> f64 {
        self.hydrocarbon
    }

    /// Inferred nitrogen fraction (X2).
    pub fn n2(&self) -> f64 {
        self.n2
    }

    pub fn co2(&self) -> f64 {
        self.co2
    }

    pub fn h2(&self) -> f64 {
        self.h2
    }

    pub fn co(&self) -> f64 {
        self.co
    }

    /// Molar calorific value of the equivalent hydrocarbon [kJ/mol].
    pub fn hydrocarbon_heating_value(&self) -> f64 {
        self.hydrocarbon_heating_value
    }

    /// Molar mass of the equivalent hydrocarbon [g/mol].
    pub fn hydrocarbon_molar_mass(&self) -> f64 {
        GM1R0 + GM1R1 * self.hydrocarbon_heating_value
    }

    /// Sum of all mole fractions.
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, x)| x).sum()
    }

    /// Mixture molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        self.hydrocarbon * self.hydrocarbon_molar_mass()
            + self.n2 * GM2
            + self.co2 * GM3
            + self.h2 * GM5
            + self.co * GM7
    }

    /// Mass density at metering conditions [kg/m³] for molar density `amol`
    /// [mol/dm³].
    fn reference_density(&self, amol: f64) -> f64 {
        self.molar_mass() * amol
    }

    /// Superior calorific value at metering conditions [MJ/m³].
    fn calorific_value(&self, amol: f64) -> f64 {
        self.hydrocarbon * self.hydrocarbon_heating_value * amol
            + (self.h2 * H5 + self.co * H7) * amol
    }
}

/// Infer the equivalent composition from a validated analysis.
///
/// Alternates a secant iteration on `h` matching the reference density
/// (`rm · ρ_air`) with a refresh of the real-gas molar density at metering
/// conditions, until the calorific value is also reproduced. Iteration
/// counters are cumulative over the whole inference.
pub(crate) fn infer(
    analysis: &SimplifiedAnalysis,
    config: &SolverConfig,
) -> SgergResult<Composition> {
    let x3 = analysis.co2();
    let x5 = analysis.h2();
    let hs = analysis.calorific_value();
    let rm = analysis.relative_density();

    if 0.55 + 0.97 * x3 - 0.45 * x5 > rm {
        debug!(x3, x5, rm, "relative density conflicts with CO2/H2 content");
        return Err(CompositionError::ConflictingInput { x3, x5, rm }.into());
    }

    let sm = rm * RL;
    let mut h = H_START;
    let mut amol = 1.0 / (FA + B_EFF_START);
    let mut molar_mass_iterations = 0;
    let mut calorific_iterations = 0;

    let composition = loop {
        let trial = Composition::trial(hs, x3, x5, h, amol);
        let sm1 = trial.reference_density(amol);

        if (sm - sm1).abs() > config.molar_mass.tolerance {
            let sm2 = Composition::trial(hs, x3, x5, h + 1.0, amol).reference_density(amol);
            h += (sm - sm1) / (sm2 - sm1);
            molar_mass_iterations += 1;
            trace!(
                iteration = molar_mass_iterations,
                h,
                residual = sm - sm1,
                "molar mass step"
            );
            if molar_mass_iterations > config.molar_mass.max_iterations {
                return Err(CompositionError::IterationLimit {
                    stage: CompositionStage::MolarMass,
                    iterations: config.molar_mass.max_iterations,
                }
                .into());
            }
            continue;
        }

        let b11 = virial::b11(T0_K, h);
        let b_eff = virial::mixture_b(&trial, T0_K, b11)?;
        amol = 1.0 / (FA + b_eff);
        let hs_calc = trial.calorific_value(amol);

        if (hs - hs_calc).abs() > config.calorific_value.tolerance {
            calorific_iterations += 1;
            trace!(
                iteration = calorific_iterations,
                b_eff,
                residual = hs - hs_calc,
                "calorific value step"
            );
            if calorific_iterations > config.calorific_value.max_iterations {
                return Err(CompositionError::IterationLimit {
                    stage: CompositionStage::CalorificValue,
                    iterations: config.calorific_value.max_iterations,
                }
                .into());
            }
            continue;
        }
        break trial;
    };

    debug!(
        molar_mass_iterations,
        calorific_iterations,
        x1 = composition.hydrocarbon,
        x2 = composition.n2,
        h = composition.hydrocarbon_heating_value,
        "composition converged"
    );

    check_plausible(&composition, rm)?;
    Ok(composition)
}

fn check_plausible(composition: &Composition, rm: f64) -> Result<(), CompositionError> {
    let x2 = composition.n2;
    let x3 = composition.co2;
    let x5 = composition.h2;

    let err = if !(-0.01..=0.5).contains(&x2) {
        CompositionError::NitrogenOutOfRange { x2 }
    } else if x2 + x3 > 0.5 {
        CompositionError::InertsOutOfRange { x2, x3 }
    } else if 0.55 + 0.4 * x2 + 0.97 * x3 - 0.45 * x5 > rm {
        CompositionError::ConflictingNitrogen { x2, rm }
    } else {
        return Ok(());
    };
    debug!(%err, "implausible composition");
    Err(err)
}
