//! SGERG-88 entry points: validation, composition inference, virial evaluation.

use crate::analysis::SimplifiedAnalysis;
use crate::composition::{self, Composition};
use crate::config::SolverConfig;
use crate::density;
use crate::error::SgergResult;
use crate::properties::GasProperties;
use crate::virial::VirialCoefficients;
use gerg_core::constants::R_BAR_DM3;
use tracing::{debug, instrument};

/// Everything computed for one analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub analysis: SimplifiedAnalysis,
    pub composition: Composition,
    /// Coefficients at the requested temperature
    pub virial: VirialCoefficients,
    pub properties: GasProperties,
    /// Iterations of the density loop (0 at zero pressure)
    pub density_iterations: usize,
}

/// SGERG-88 calculator.
///
/// Holds only its solver configuration; every call is independent, so one
/// value can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Sgerg {
    config: SolverConfig,
}

impl Sgerg {
    /// Calculator with the reference tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with custom tolerances and iteration caps.
    pub fn with_config(config: SolverConfig) -> SgergResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compression factor of a gas given by its simplified analysis.
    ///
    /// Arguments as for [`crate::sgerg`].
    pub fn sgerg(
        &self,
        x3: f64,
        hs: f64,
        rm: f64,
        x5: f64,
        p: f64,
        tc: f64,
    ) -> SgergResult<GasProperties> {
        self.evaluate(&SimplifiedAnalysis::new(x3, hs, rm, x5, p, tc))
    }

    pub fn evaluate(&self, analysis: &SimplifiedAnalysis) -> SgergResult<GasProperties> {
        self.solve(analysis).map(|solution| solution.properties)
    }

    /// Run the full calculation and keep the intermediate results.
    #[instrument(level = "debug", skip(self))]
    pub fn solve(&self, analysis: &SimplifiedAnalysis) -> SgergResult<Solution> {
        analysis.validate()?;

        let composition = composition::infer(analysis, &self.config)?;
        let t = analysis.temperature_k();
        let virial = VirialCoefficients::at(&composition, t)?;

        let p = analysis.pressure_bar();
        let rt = R_BAR_DM3 * t;
        let (z, d, density_iterations) = if (rt / p).is_finite() {
            let sol = density::solve_volume(p, t, &virial, &self.config.density)?;
            (sol.z, 1000.0 / sol.v, sol.iterations)
        } else {
            // Ideal-gas limit: p = 0 or so close that RT/p overflows
            (1.0, 1000.0 * p / rt, 0)
        };

        let properties = GasProperties {
            x2: composition.n2(),
            z,
            d,
            molar_mass: composition.molar_mass(),
        };
        debug!(x2 = properties.x2, z, d, "sgerg solved");

        Ok(Solution {
            analysis: *analysis,
            composition,
            virial,
            properties,
            density_iterations,
        })
    }
}

/// Compression factor of a natural gas from the GERG-88 simplified analysis.
///
/// - `x3`: mole fraction CO2 (0.0 to 0.3)
/// - `hs`: superior calorific value [MJ/m³] (20 to 48)
/// - `rm`: relative density (0.55 to 0.9)
/// - `x5`: mole fraction H2 (0.0 to 0.1)
/// - `p`: absolute pressure [bar] (0 to 120)
/// - `tc`: temperature [°C] (-23 to 65)
///
/// Returns the inferred N2 fraction `x2`, the compression factor `z` and the
/// molar density `d` [mol/m³].
pub fn sgerg(x3: f64, hs: f64, rm: f64, x5: f64, p: f64, tc: f64) -> SgergResult<GasProperties> {
    Sgerg::new().sgerg(x3, hs, rm, x5, p, tc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoopConfig;
    use crate::error::SgergError;
    use gerg_core::CoreError;

    #[test]
    fn reference_scenario() {
        let props = sgerg(0.01, 37.0, 0.7443, 0.0, 8.0, 15.0).unwrap();
        assert!((props.x2 - 0.206_119_3).abs() < 1e-6, "x2 = {}", props.x2);
        assert!((props.z - 0.981_100_3).abs() < 1e-6, "z = {}", props.z);
        assert!((props.d - 340.346_6).abs() < 1e-3, "d = {}", props.d);
    }

    #[test]
    fn solution_is_consistent_with_properties() {
        let analysis = SimplifiedAnalysis::new(0.01, 37.0, 0.7443, 0.0, 8.0, 15.0);
        let solution = Sgerg::new().solve(&analysis).unwrap();
        assert_eq!(solution.properties.x2, solution.composition.n2());
        assert_eq!(solution.analysis, analysis);
        assert!(solution.density_iterations >= 1);
        assert!((solution.virial.temperature_k - 288.15).abs() < 1e-9);
        let z = solution
            .virial
            .compression_factor(solution.properties.molar_volume());
        assert!((z - solution.properties.z).abs() < 1e-12);
    }

    #[test]
    fn zero_pressure_is_ideal_gas() {
        let props = sgerg(0.01, 37.0, 0.7443, 0.0, 0.0, 15.0).unwrap();
        assert_eq!(props.z, 1.0);
        assert_eq!(props.d, 0.0);
        assert!((props.x2 - 0.206_119_3).abs() < 1e-6);
    }

    #[test]
    fn subnormal_pressure_takes_ideal_gas_limit() {
        let p = 1e-310;
        let solution = Sgerg::new()
            .solve(&SimplifiedAnalysis::new(0.01, 37.0, 0.7443, 0.0, p, 15.0))
            .unwrap();
        let props = solution.properties;
        assert_eq!(props.z, 1.0);
        assert_eq!(solution.density_iterations, 0);
        assert!(props.d > 0.0 && props.d.is_finite(), "d = {}", props.d);
        assert!((props.x2 - 0.206_119_3).abs() < 1e-6);
    }

    #[test]
    fn tiny_pressure_with_finite_rt_over_p_iterates() {
        let solution = Sgerg::new()
            .solve(&SimplifiedAnalysis::new(0.01, 37.0, 0.7443, 0.0, 1e-300, 15.0))
            .unwrap();
        assert!(solution.density_iterations >= 1);
        let props = solution.properties;
        assert!((props.z - 1.0).abs() < 1e-12);
        assert!(props.d > 0.0 && props.d.is_finite());
    }

    #[test]
    fn with_config_rejects_invalid_settings() {
        let config = SolverConfig {
            calorific_value: LoopConfig::new(-1.0, 20),
            ..SolverConfig::default()
        };
        let err = Sgerg::with_config(config).unwrap_err();
        assert!(matches!(err, SgergError::Core(CoreError::InvalidArg { .. })));
    }

    #[test]
    fn validation_runs_before_iteration() {
        // Zero iteration budget would fail any iteration; range check must come first.
        let sgerg = Sgerg {
            config: SolverConfig {
                molar_mass: LoopConfig::new(1e-6, 0),
                ..SolverConfig::default()
            },
        };
        let err = sgerg.sgerg(0.01, 37.0, 0.7443, 0.0, 150.0, 15.0).unwrap_err();
        assert!(matches!(err, SgergError::OutOfRange { .. }));
    }

    #[test]
    fn calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sgerg>();
        assert_send_sync::<Solution>();
    }
}
