//! GERG-88 second and third virial coefficients of the equivalent mixture.
//!
//! Index convention of the tables: 1 equivalent hydrocarbon, 2 N2, 3 CO2,
//! 5 H2, 7 CO. Every coefficient is a quadratic in T [K]; the hydrocarbon
//! self terms are also quadratic in the molar heating value `h`. B is in
//! dm³/mol, C in dm⁶/mol².

use crate::composition::Composition;
use crate::error::{SgergError, SgergResult};
use gerg_core::numeric::quadratic;
use serde::{Deserialize, Serialize};

const BR11H0: [f64; 3] = [-0.425468, 0.286500e-2, -0.462073e-5];
const BR11H1: [f64; 3] = [0.877118e-3, -0.556281e-5, 0.881510e-8];
const BR11H2: [f64; 3] = [-0.824747e-6, 0.431436e-8, -0.608319e-11];
const BR22: [f64; 3] = [-0.144600, 0.740910e-3, -0.911950e-6];
const BR23: [f64; 3] = [-0.339693, 0.161176e-2, -0.204429e-5];
const BR33: [f64; 3] = [-0.868340, 0.403760e-2, -0.516570e-5];
const BR15: [f64; 3] = [-0.521280e-1, 0.271570e-3, -0.25e-6];
const BR17: [f64; 3] = [-0.687290e-1, -0.239381e-5, 0.518195e-6];
const BR55: [f64; 3] = [-0.110596e-2, 0.813385e-4, -0.987220e-7];
const BR77: [f64; 3] = [-0.130820, 0.602540e-3, -0.644300e-6];
const B25: f64 = 0.012;

const CR111H0: [f64; 3] = [-0.302488, 0.195861e-2, -0.316302e-5];
const CR111H1: [f64; 3] = [0.646422e-3, -0.422876e-5, 0.688157e-8];
const CR111H2: [f64; 3] = [-0.332805e-6, 0.223160e-8, -0.367713e-11];
const CR222: [f64; 3] = [0.784980e-2, -0.398950e-4, 0.611870e-7];
const CR223: [f64; 3] = [0.552066e-2, -0.168609e-4, 0.157169e-7];
const CR233: [f64; 3] = [0.358783e-2, 0.806674e-5, -0.325798e-7];
const CR333: [f64; 3] = [0.205130e-2, 0.348880e-4, -0.837030e-7];
const CR555: [f64; 3] = [0.104711e-2, -0.364887e-5, 0.467095e-8];
const CR117: [f64; 3] = [0.736748e-2, -0.276578e-4, 0.343051e-7];

const Z12: f64 = 0.72;
const Z13: f64 = -0.865;
const Y12: f64 = 0.92;
const Y13: f64 = 0.92;
const Y123: f64 = 1.10;
const Y115: f64 = 1.2;

const D3REP: f64 = 1.0 / 3.0;

/// Mixture virial coefficients at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirialCoefficients {
    /// Second virial coefficient B [dm³/mol]
    pub b: f64,
    /// Third virial coefficient C [dm⁶/mol²]
    pub c: f64,
    /// Temperature the coefficients belong to [K]
    pub temperature_k: f64,
}

impl VirialCoefficients {
    /// Evaluate B and C of `composition` at `t` [K].
    pub fn at(composition: &Composition, t: f64) -> SgergResult<Self> {
        let b11 = b11(t, composition.hydrocarbon_heating_value());
        let b = mixture_b(composition, t, b11)?;
        let c = mixture_c(composition, t)?;
        Ok(Self {
            b,
            c,
            temperature_k: t,
        })
    }

    /// Compression factor `1 + B/v + C/v²` at molar volume `v` [dm³/mol].
    pub fn compression_factor(&self, v: f64) -> f64 {
        1.0 + self.b / v + self.c / (v * v)
    }
}

/// Hydrocarbon self term B11(T, h).
pub(crate) fn b11(t: f64, h: f64) -> f64 {
    quadratic(&BR11H0, t) + quadratic(&BR11H1, t) * h + quadratic(&BR11H2, t) * h * h
}

/// Hydrocarbon self term C111(T, h).
fn c111(t: f64, h: f64) -> f64 {
    quadratic(&CR111H0, t) + quadratic(&CR111H1, t) * h + quadratic(&CR111H2, t) * h * h
}

/// Mixture second virial coefficient with hydrocarbon term `b11`.
pub(crate) fn mixture_b(comp: &Composition, t: f64, b11: f64) -> SgergResult<f64> {
    let b22 = quadratic(&BR22, t);
    let b23 = quadratic(&BR23, t);
    let b33 = quadratic(&BR33, t);
    let b15 = quadratic(&BR15, t);
    let b55 = quadratic(&BR55, t);
    let b17 = quadratic(&BR17, t);
    let b77 = quadratic(&BR77, t);

    let ba13 = b11 * b33;
    if ba13 < 0.0 {
        return Err(SgergError::NoViableVirial { coefficient: "B" });
    }

    let zzz = Z12 + (320.0 - t).powi(2) * 1.875e-5;

    let (x1, x2, x3, x5, x7) = (comp.hydrocarbon(), comp.n2(), comp.co2(), comp.h2(), comp.co());

    // 2·x1·x2·B12 with B12 = z12·(B11 + B22)/2
    Ok(x1 * x1 * b11
        + x1 * x2 * zzz * (b11 + b22)
        + 2.0 * (x1 * x3) * Z13 * ba13.sqrt()
        + x2 * x2 * b22
        + 2.0 * (x2 * x3) * b23
        + x3 * x3 * b33
        + x5 * x5 * b55
        + 2.0 * (x1 * x5) * b15
        + 2.0 * (x2 * x5) * B25
        + 2.0 * (x1 * x7) * b17
        + x7 * x7 * b77)
}

/// Mixture third virial coefficient.
pub(crate) fn mixture_c(comp: &Composition, t: f64) -> SgergResult<f64> {
    let c111 = c111(t, comp.hydrocarbon_heating_value());
    let c222 = quadratic(&CR222, t);
    let c223 = quadratic(&CR223, t);
    let c233 = quadratic(&CR233, t);
    let c333 = quadratic(&CR333, t);
    let c555 = quadratic(&CR555, t);
    let c117 = quadratic(&CR117, t);

    let [ca112, ca113, ca122, ca123, ca133, ca115] = cross_products(c111, c222, c333, c555)?;

    let (x1, x2, x3, x5, x7) = (comp.hydrocarbon(), comp.n2(), comp.co2(), comp.h2(), comp.co());
    let (x11, x22, x33, x55) = (x1 * x1, x2 * x2, x3 * x3, x5 * x5);
    let x15 = x1 * x5;
    let y12 = Y12 + (t - 270.0) * 0.0013;

    Ok(x1 * x11 * c111
        + 3.0 * x11 * x2 * ca112.powf(D3REP) * y12
        + 3.0 * x11 * x3 * ca113.powf(D3REP) * Y13
        + 3.0 * x1 * x15 * ca115.powf(D3REP) * Y115
        + 3.0 * x1 * x22 * ca122.powf(D3REP) * y12
        + 6.0 * x1 * x2 * x3 * ca123.powf(D3REP) * Y123
        + 3.0 * x1 * x33 * ca133.powf(D3REP) * Y13
        + x22 * x2 * c222
        + 3.0 * x22 * x3 * c223
        + 3.0 * x2 * x33 * c233
        + x3 * x33 * c333
        + x5 * x55 * c555
        + 3.0 * x11 * x7 * c117)
}

/// Products of pure C terms whose cube roots give the unlike interactions,
/// ordered 112, 113, 122, 123, 133, 115.
fn cross_products(c111: f64, c222: f64, c333: f64, c555: f64) -> SgergResult<[f64; 6]> {
    let products = [
        c111 * c111 * c222,
        c111 * c111 * c333,
        c111 * c222 * c222,
        c111 * c222 * c333,
        c111 * c333 * c333,
        c111 * c111 * c555,
    ];
    if products.iter().any(|&ca| ca < 0.0) {
        return Err(SgergError::NoViableVirial { coefficient: "C" });
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SimplifiedAnalysis;
    use crate::composition::infer;
    use crate::config::SolverConfig;

    fn reference_composition() -> Composition {
        let analysis = SimplifiedAnalysis::new(0.01, 37.0, 0.7443, 0.0, 8.0, 15.0);
        infer(&analysis, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn b11_at_reference_point() {
        // Polynomial evaluated by hand at T = 273.15 K, h = 1000 kJ/mol
        assert!((b11(273.15, 1000.0) - (-0.072_462_970)).abs() < 1e-8);
    }

    #[test]
    fn reference_gas_coefficients() {
        let v = VirialCoefficients::at(&reference_composition(), 288.15).unwrap();
        assert!((v.b - (-0.056_634_241)).abs() < 1e-8, "B = {}", v.b);
        assert!((v.c - 0.003_242_309).abs() < 1e-8, "C = {}", v.c);
        assert_eq!(v.temperature_k, 288.15);
    }

    #[test]
    fn b_rises_with_temperature() {
        let comp = reference_composition();
        let cold = VirialCoefficients::at(&comp, 250.15).unwrap();
        let warm = VirialCoefficients::at(&comp, 338.15).unwrap();
        assert!(cold.b < warm.b);
    }

    #[test]
    fn positive_hydrocarbon_b_has_no_geometric_mean() {
        // B33 of CO2 is negative, so B11·B33 < 0
        let comp = reference_composition();
        let err = mixture_b(&comp, 288.15, 0.1).unwrap_err();
        assert_eq!(err, SgergError::NoViableVirial { coefficient: "B" });
    }

    #[test]
    fn negative_hydrocarbon_c_has_no_cube_root() {
        let t = 288.15;
        let (c222, c333, c555) = (quadratic(&CR222, t), quadratic(&CR333, t), quadratic(&CR555, t));
        let err = cross_products(-1e-3, c222, c333, c555).unwrap_err();
        assert_eq!(err, SgergError::NoViableVirial { coefficient: "C" });
    }

    #[test]
    fn reference_c_cross_products_are_positive() {
        let t = 288.15;
        let comp = reference_composition();
        let c111 = c111(t, comp.hydrocarbon_heating_value());
        let products =
            cross_products(c111, quadratic(&CR222, t), quadratic(&CR333, t), quadratic(&CR555, t))
                .unwrap();
        assert!(products.iter().all(|&ca| ca > 0.0), "{products:?}");
    }

    #[test]
    fn compression_factor_is_one_at_infinite_volume() {
        let v = VirialCoefficients::at(&reference_composition(), 288.15).unwrap();
        assert!((v.compression_factor(1e12) - 1.0).abs() < 1e-12);
        assert!(v.compression_factor(3.0) < 1.0);
    }
}
