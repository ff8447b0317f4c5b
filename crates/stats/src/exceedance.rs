//! Exceedance probabilities for flow-duration curves.

/// Probability that `x` is equalled or exceeded, estimated from `values`
/// with the Weibull plotting position: `count(v >= x) / (n + 1)`.
///
/// Missing values are ignored and do not count towards `n`. Returns `NaN`
/// when `x` is `NaN`.
pub fn exceedance_probability(x: f64, values: &[f64]) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let (n, exceeding) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0usize, 0usize), |(n, k), &v| (n + 1, k + usize::from(v >= x)));
    exceeding as f64 / (n as f64 + 1.0)
}

/// Applies [`exceedance_probability`] to each of `xs`.
pub fn exceedance_probabilities(xs: &[f64], values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    let denom = sorted.len() as f64 + 1.0;
    xs.iter()
        .map(|&x| {
            if x.is_nan() {
                return f64::NAN;
            }
            let below = sorted.partition_point(|&v| v < x);
            (sorted.len() - below) as f64 / denom
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_value() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(exceedance_probability(1.0, &values), 0.8, epsilon = 1e-12);
        assert_relative_eq!(exceedance_probability(2.5, &values), 0.4, epsilon = 1e-12);
        assert_eq!(exceedance_probability(5.0, &values), 0.0);
    }

    #[test]
    fn multiple_matches_single() {
        let values = [4.0, 1.0, f64::NAN, 3.0, 2.0];
        let xs = [1.0, 1.25, 2.5, 4.0, 9.0];
        let many = exceedance_probabilities(&xs, &values);
        for (x, p) in xs.iter().zip(&many) {
            assert_relative_eq!(*p, exceedance_probability(*x, &values), epsilon = 1e-12);
        }
        assert_relative_eq!(many[1], 0.6, epsilon = 1e-12);
    }

    #[test]
    fn missing_inputs() {
        assert!(exceedance_probability(f64::NAN, &[1.0]).is_nan());
        assert_eq!(exceedance_probability(1.0, &[]), 0.0);
        assert!(exceedance_probabilities(&[f64::NAN], &[1.0])[0].is_nan());
    }
}
