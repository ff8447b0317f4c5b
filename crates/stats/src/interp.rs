//! Piecewise-linear interpolation with linear extrapolation at the ends.

use crate::error::StatsError;

/// Interpolates `fp` at `x` over the non-decreasing abscissae `xp`.
///
/// Inside the table the result follows the segment containing `x`; when `x`
/// equals a repeated abscissa the last matching point wins. Outside the table
/// the first or last segment is extended with its slope. A single-point table
/// or a zero-width boundary segment yields the boundary ordinate. A `NaN`
/// anywhere in the inputs yields `NaN`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyTable`], [`StatsError::LengthMismatch`] or
/// [`StatsError::UnsortedTable`] for a malformed table.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> Result<f64, StatsError> {
    validate_table(xp, fp)?;
    if x.is_nan() || xp.iter().chain(fp).any(|v| v.is_nan()) {
        return Ok(f64::NAN);
    }

    let n = xp.len();
    if n == 1 {
        return Ok(fp[0]);
    }
    if x < xp[0] {
        return Ok(extend(x, xp[0], xp[1], fp[0], fp[1], fp[0]));
    }
    if x > xp[n - 1] {
        return Ok(extend(
            x,
            xp[n - 2],
            xp[n - 1],
            fp[n - 2],
            fp[n - 1],
            fp[n - 1],
        ));
    }

    // x >= xp[0], so at least one abscissa is <= x.
    let j = xp.partition_point(|&v| v <= x) - 1;
    if j == n - 1 {
        return Ok(fp[n - 1]);
    }
    Ok(extend(x, xp[j], xp[j + 1], fp[j], fp[j + 1], fp[j]))
}

/// Evaluates the line through `(x0, y0)` and `(x1, y1)` at `x`, or returns
/// `flat` when the segment has zero width.
fn extend(x: f64, x0: f64, x1: f64, y0: f64, y1: f64, flat: f64) -> f64 {
    let dx = x1 - x0;
    if dx == 0.0 {
        return flat;
    }
    y0 + (x - x0) * (y1 - y0) / dx
}

fn validate_table(xp: &[f64], fp: &[f64]) -> Result<(), StatsError> {
    if xp.len() != fp.len() {
        return Err(StatsError::LengthMismatch {
            xp_len: xp.len(),
            fp_len: fp.len(),
        });
    }
    if xp.is_empty() {
        return Err(StatsError::EmptyTable);
    }
    if let Some(i) = xp.windows(2).position(|w| w[1] < w[0]) {
        return Err(StatsError::UnsortedTable { index: i + 1 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const XP: [f64; 3] = [10.0, 20.0, 40.0];
    const FP: [f64; 3] = [0.0, 50.0, 100.0];

    #[test]
    fn interior() {
        assert_relative_eq!(interp(15.0, &XP, &FP).unwrap(), 25.0, epsilon = 1e-12);
        assert_relative_eq!(interp(30.0, &XP, &FP).unwrap(), 75.0, epsilon = 1e-12);
    }

    #[test]
    fn knots() {
        assert_eq!(interp(10.0, &XP, &FP).unwrap(), 0.0);
        assert_eq!(interp(20.0, &XP, &FP).unwrap(), 50.0);
        assert_eq!(interp(40.0, &XP, &FP).unwrap(), 100.0);
    }

    #[test]
    fn extrapolates_with_boundary_slope() {
        // first segment slope 5 per unit, last segment 2.5 per unit
        assert_relative_eq!(interp(8.0, &XP, &FP).unwrap(), -10.0, epsilon = 1e-12);
        assert_relative_eq!(interp(44.0, &XP, &FP).unwrap(), 110.0, epsilon = 1e-12);
    }

    #[test]
    fn repeated_abscissa_takes_last() {
        let xp = [0.0, 0.0, 0.0, 5.0];
        let fp = [0.0, 10.0, 25.0, 100.0];
        assert_eq!(interp(0.0, &xp, &fp).unwrap(), 25.0);
        assert_relative_eq!(interp(2.5, &xp, &fp).unwrap(), 62.5, epsilon = 1e-12);
        // zero-width leading segment cannot be extended
        assert_eq!(interp(-1.0, &xp, &fp).unwrap(), 0.0);
    }

    #[test]
    fn single_point() {
        assert_eq!(interp(-3.0, &[1.0], &[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(interp(f64::NAN, &XP, &FP).unwrap().is_nan());
        assert!(interp(1.0, &[0.0, f64::NAN], &[0.0, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn malformed_tables() {
        assert_eq!(interp(1.0, &[], &[]).unwrap_err(), StatsError::EmptyTable);
        assert_eq!(
            interp(1.0, &[1.0, 2.0], &[1.0]).unwrap_err(),
            StatsError::LengthMismatch {
                xp_len: 2,
                fp_len: 1
            }
        );
        assert_eq!(
            interp(1.0, &[1.0, 3.0, 2.0], &[0.0, 1.0, 2.0]).unwrap_err(),
            StatsError::UnsortedTable { index: 2 }
        );
    }
}
