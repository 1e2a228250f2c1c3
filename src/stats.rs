//! Statistics helpers
//!
//! Small numeric routines behind the scatter view: means, Pearson correlation,
//! least-squares regression and histogram binning.

use serde::Serialize;

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Calculate Pearson correlation coefficient
///
/// Returns a value between -1 and 1:
/// - 1: perfect positive correlation
/// - 0: no correlation
/// - -1: perfect negative correlation
///
/// Mismatched lengths, empty input and zero variance all yield 0.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x.powi(2)) * (n * sum_y2 - sum_y.powi(2))).sqrt();

    if denominator == 0.0 || denominator.is_nan() {
        0.0
    } else {
        numerator / denominator
    }
}

/// Least-squares line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Square of the Pearson coefficient
    pub r_squared: f64,
}

impl Regression {
    /// Value of the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a least-squares line through `(x, y)` pairs
///
/// Needs at least two points and some spread in `x`.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Option<Regression> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let (mut sxx, mut sxy) = (0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        sxx += dx * dx;
        sxy += dx * (yi - mean_y);
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let r = pearson_correlation(x, y);

    Some(Regression {
        slope,
        intercept: mean_y - slope * mean_x,
        r_squared: r * r,
    })
}

/// One histogram bucket covering `[lower, upper)`
///
/// The last bucket also includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bin `values` into `bins` equal-width buckets spanning `[min, max]`
///
/// Values outside the range (and NaN) are dropped. Returns an empty vector
/// when `bins` is zero or the range is empty.
pub fn histogram(values: &[f64], bins: usize, min: f64, max: f64) -> Vec<HistogramBin> {
    if bins == 0 || !(min < max) {
        return Vec::new();
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &v in values {
        if !(min..=max).contains(&v) {
            continue;
        }
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[3.0, 2.0, 2.0, 1.0]), Some(2.0));
    }

    #[test]
    fn test_pearson_correlation_perfect_positive() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson_correlation(&x, &y);
        assert!((r - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_correlation_perfect_negative() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        let r = pearson_correlation(&x, &y);
        assert!((r + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_correlation_degenerate() {
        assert_eq!(pearson_correlation(&[], &[]), 0.0);
        assert_eq!(pearson_correlation(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(pearson_correlation(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_linear_regression() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let y = vec![1.0, 3.0, 5.0, 7.0];
        let fit = linear_regression(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 1.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
        assert!((fit.predict(10.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_regression_needs_spread() {
        assert!(linear_regression(&[1.0], &[1.0]).is_none());
        assert!(linear_regression(&[2.0, 2.0, 2.0], &[1.0, 5.0, 9.0]).is_none());
    }

    #[test]
    fn test_histogram() {
        let bins = histogram(&[0.0, 0.5, 4.0, 9.9, 10.0, 11.0, -1.0], 10, 0.0, 10.0);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[4].count, 1);
        // 9.9 and the closed upper edge both land in the last bin
        assert_eq!(bins[9].count, 2);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
        assert_eq!(bins[9].upper, 10.0);
    }

    #[test]
    fn test_histogram_degenerate() {
        assert!(histogram(&[1.0], 0, 0.0, 10.0).is_empty());
        assert!(histogram(&[1.0], 5, 3.0, 3.0).is_empty());
    }
}
