//! Molar volume from the truncated virial equation `p·v = R·T·(1 + B/v + C/v²)`.

use crate::config::LoopConfig;
use crate::error::{SgergError, SgergResult};
use crate::virial::VirialCoefficients;
use gerg_core::constants::R_BAR_DM3;
use gerg_core::numeric::ensure_finite;
use tracing::{debug, trace};

/// Converged state of the density iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VolumeSolution {
    /// Molar volume [dm³/mol]
    pub v: f64,
    /// Compression factor
    pub z: f64,
    pub iterations: usize,
}

/// Solve for the molar volume at `p` [bar], `t` [K] by successive
/// substitution, starting from `v = RT/p + B`.
///
/// Converged when the pressure recomputed from `v` is within the loop
/// tolerance of `p`. `RT/p` must be finite; callers take the ideal-gas limit
/// otherwise.
pub(crate) fn solve_volume(
    p: f64,
    t: f64,
    virial: &VirialCoefficients,
    config: &LoopConfig,
) -> SgergResult<VolumeSolution> {
    let rt = R_BAR_DM3 * t;
    let rtp = rt / p;
    let mut v = rtp + virial.b;
    let mut residual = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        v = rtp * virial.compression_factor(v);
        let v_checked = ensure_finite(v, "molar volume")?;
        let z = virial.compression_factor(v_checked);
        let pa = rt / v_checked * z;
        residual = pa - p;
        trace!(iteration, v, z, residual, "density step");

        if residual.abs() < config.tolerance {
            debug!(iterations = iteration, v, z, "density converged");
            return Ok(VolumeSolution {
                v: v_checked,
                z,
                iterations: iteration,
            });
        }
    }

    debug!(p, t, residual, "density iteration exhausted");
    Err(SgergError::DensityConvergence {
        iterations: config.max_iterations,
        residual,
    })
}
