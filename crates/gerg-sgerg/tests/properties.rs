//! Property tests over the validated input ranges.

use gerg_sgerg::{Sgerg, SgergError, SimplifiedAnalysis, sgerg};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_inputs_terminate_with_physical_results(
        x3 in 0.0_f64..=0.3,
        hs in 20.0_f64..=48.0,
        rm in 0.55_f64..=0.9,
        x5 in 0.0_f64..=0.1,
        p in 0.0_f64..=120.0,
        tc in -23.0_f64..=65.0,
    ) {
        let analysis = SimplifiedAnalysis::new(x3, hs, rm, x5, p, tc);
        match Sgerg::new().solve(&analysis) {
            Ok(solution) => {
                let props = solution.properties;
                prop_assert!(props.z > 0.0, "z = {}", props.z);
                prop_assert!(props.d >= 0.0, "d = {}", props.d);
                if p > 0.0 {
                    prop_assert!(props.d > 0.0);
                }
                // Slightly negative N2 passes the plausibility rule
                prop_assert!((-0.01..=0.5).contains(&props.x2), "x2 = {}", props.x2);

                let sum = solution.composition.sum();
                prop_assert!((sum - 1.0).abs() < 1e-6, "sum = {}", sum);
            }
            Err(err) => {
                prop_assert!(
                    matches!(
                        err,
                        SgergError::CompositionConvergence(_)
                            | SgergError::DensityConvergence { .. }
                    ),
                    "unexpected error for in-range input: {err}"
                );
            }
        }
    }

    #[test]
    fn density_rises_with_pressure(
        p1 in 1.0_f64..=119.0,
        dp in 0.5_f64..=60.0,
        tc in -23.0_f64..=65.0,
    ) {
        let p2 = (p1 + dp).min(120.0);
        prop_assume!(p2 > p1);
        let low = sgerg(0.01, 37.0, 0.7443, 0.0, p1, tc).unwrap();
        let high = sgerg(0.01, 37.0, 0.7443, 0.0, p2, tc).unwrap();
        prop_assert!(high.d > low.d, "d({p1}) = {}, d({p2}) = {}", low.d, high.d);
    }

    #[test]
    fn z_falls_with_pressure_at_moderate_pressure(
        p1 in 1.0_f64..=50.0,
        dp in 1.0_f64..=10.0,
        tc in -23.0_f64..=65.0,
    ) {
        let low = sgerg(0.01, 37.0, 0.7443, 0.0, p1, tc).unwrap();
        let high = sgerg(0.01, 37.0, 0.7443, 0.0, p1 + dp, tc).unwrap();
        prop_assert!(high.z < low.z);
    }

    #[test]
    fn identical_inputs_give_identical_bits(
        x3 in 0.0_f64..=0.05,
        p in 1.0_f64..=60.0,
        tc in -10.0_f64..=40.0,
    ) {
        let first = sgerg(x3, 37.0, 0.7443, 0.0, p, tc);
        let second = sgerg(x3, 37.0, 0.7443, 0.0, p, tc);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.x2.to_bits(), b.x2.to_bits());
                prop_assert_eq!(a.z.to_bits(), b.z.to_bits());
                prop_assert_eq!(a.d.to_bits(), b.d.to_bits());
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "diverging outcomes: {a:?} vs {b:?}"),
        }
    }
}
