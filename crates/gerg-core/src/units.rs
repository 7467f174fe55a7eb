// gerg-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, MolarConcentration as UomMolarConcentration,
    MolarMass as UomMolarMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MolarDensity = UomMolarConcentration;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn mol_per_m3(v: f64) -> MolarDensity {
    use uom::si::molar_concentration::mole_per_cubic_meter;
    MolarDensity::new::<mole_per_cubic_meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::gram_per_mole;
    MolarMass::new::<gram_per_mole>(v)
}

#[inline]
pub fn in_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[inline]
pub fn in_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

/// Reference state of the simplified gas analysis.
pub mod constants {
    /// Molar gas constant [bar·dm³/(mol·K)] as tabulated for GERG-88.
    pub const R_BAR_DM3: f64 = 0.083_145_1;

    /// 0 °C in kelvin.
    pub const T0_K: f64 = 273.15;
}
