use crate::CoreError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Evaluate `c[0] + c[1]·x + c[2]·x²`.
///
/// `x²` is formed first so results match tables evaluated as `c2 * (x * x)`.
#[inline]
pub fn quadratic(c: &[f64; 3], x: f64) -> f64 {
    let x2 = x * x;
    c[0] + c[1] * x + c[2] * x2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_passes_value_through() {
        assert_eq!(ensure_finite(2.5, "test"), Ok(2.5));
    }

    #[test]
    fn quadratic_evaluates_polynomial() {
        assert_eq!(quadratic(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_eq!(quadratic(&[-0.5, 0.0, 0.0], 300.0), -0.5);
    }
}
