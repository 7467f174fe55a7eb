//! Result of an SGERG-88 calculation.

use gerg_core::units::{Density, MolarDensity, MolarMass, g_per_mol, kg_per_m3, mol_per_m3};
use serde::{Deserialize, Serialize};

/// Nitrogen fraction, compression factor and molar density of the gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    /// Inferred N2 mole fraction.
    ///
    /// Lies in [-0.01, 0.5]. Small negative values are accepted as rounding
    /// in the supplied analysis, as the SGERG-88 plausibility check allows;
    /// they are reported unclamped.
    pub x2: f64,
    /// Compression factor
    pub z: f64,
    /// Molar density [mol/m³]
    pub d: f64,
    /// Mixture molar mass [g/mol]
    pub molar_mass: f64,
}

impl GasProperties {
    /// Molar volume [dm³/mol]; infinite at zero pressure.
    pub fn molar_volume(&self) -> f64 {
        1000.0 / self.d
    }

    /// Mass density [kg/m³].
    pub fn mass_density(&self) -> f64 {
        self.d * self.molar_mass / 1000.0
    }

    pub fn density(&self) -> MolarDensity {
        mol_per_m3(self.d)
    }

    pub fn mass_density_quantity(&self) -> Density {
        kg_per_m3(self.mass_density())
    }

    pub fn molar_mass_quantity(&self) -> MolarMass {
        g_per_mol(self.molar_mass)
    }

    /// `(x2, z, d)` in the order `sgerg` documents.
    pub fn triple(&self) -> (f64, f64, f64) {
        (self.x2, self.z, self.d)
    }
}

impl From<GasProperties> for (f64, f64, f64) {
    fn from(props: GasProperties) -> Self {
        props.triple()
    }
}
