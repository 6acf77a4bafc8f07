// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The statistics kernel: percentiles, box-plot summaries, Gaussian kernel
//! density estimation, correlation and rolling windows.
//!
//! These are the numerics shared by the distribution charts (box, violin,
//! density, ridgeline), the correlogram and the financial overlays. All
//! functions are total: empty input yields zeros or empty sequences, never
//! a panic.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Number of evaluation points a KDE produces.
const KDE_RESOLUTION: usize = 100;

/// Arithmetic mean; 0 for empty input.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation (n − 1 denominator); 0 for fewer than two
/// values.
pub fn std_dev(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Linear-interpolated percentile of an already **sorted** slice.
///
/// Empty input returns 0; a singleton returns its value.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = rank.floor();
            let hi = rank.ceil();
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "rank is clamped to [0, n-1]"
            )]
            let (lo_i, hi_i) = (lo as usize, hi as usize);
            let frac = rank - lo;
            sorted[lo_i] + frac * (sorted[hi_i] - sorted[lo_i])
        }
    }
}

/// A five-number box-plot summary with Tukey fences and outliers.
///
/// `min`/`max` are the whisker endpoints: the most extreme data values
/// lying within the fences, not the raw extremes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxSummary {
    /// Whisker minimum (smallest value within the fences).
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Whisker maximum (largest value within the fences).
    pub max: f64,
    /// Arithmetic mean of the input.
    pub mean: f64,
    /// Interquartile range `q3 - q1`.
    pub iqr: f64,
    /// Lower Tukey fence `q1 - k * iqr`.
    pub lower_fence: f64,
    /// Upper Tukey fence `q3 + k * iqr`.
    pub upper_fence: f64,
    /// All data outside the fences, sorted ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarizes `xs` with the conventional fence factor `k = 1.5`.
    pub fn from_data(xs: &[f64]) -> Self {
        Self::with_fences(xs, 1.5)
    }

    /// Summarizes `xs` with fences at `q1 - k*iqr` and `q3 + k*iqr`.
    ///
    /// Empty input yields an all-zero summary.
    pub fn with_fences(xs: &[f64], k: f64) -> Self {
        if xs.is_empty() {
            return Self::default();
        }
        let mut sorted: Vec<f64> = xs.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

        let q1 = percentile(&sorted, 25.0);
        let median = percentile(&sorted, 50.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let lower_fence = q1 - k * iqr;
        let upper_fence = q3 + k * iqr;

        let min = sorted
            .iter()
            .copied()
            .find(|v| *v >= lower_fence)
            .unwrap_or(q1);
        let max = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= upper_fence)
            .unwrap_or(q3);
        let outliers: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|v| *v < lower_fence || *v > upper_fence)
            .collect();

        Self {
            min,
            q1,
            median,
            q3,
            max,
            mean: mean(xs),
            iqr,
            lower_fence,
            upper_fence,
            outliers,
        }
    }
}

/// Silverman's rule-of-thumb KDE bandwidth:
/// `0.9 * min(sigma, iqr / 1.34) * n^(-1/5)`.
///
/// Degenerate spread (or empty input) falls back to 1.
pub fn silverman_bandwidth(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 1.0;
    }
    let mut sorted: Vec<f64> = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    let iqr = percentile(&sorted, 75.0) - percentile(&sorted, 25.0);
    let sigma = std_dev(xs);
    let spread = sigma.min(iqr / 1.34);
    if !spread.is_finite() || spread <= 0.0 {
        return 1.0;
    }
    0.9 * spread * (xs.len() as f64).powf(-0.2)
}

/// Gaussian kernel density estimate over 100 evaluation points covering
/// `[min, max]` of the data.
///
/// When `bandwidth` is `None` it is auto-selected with Silverman's rule.
/// Empty input yields an empty sequence; single-valued input evaluates
/// over a widened `[v-1, v+1]` window so the spike stays finite.
pub fn gaussian_kde(xs: &[f64], bandwidth: Option<f64>) -> Vec<(f64, f64)> {
    if xs.is_empty() {
        return Vec::new();
    }
    let h = match bandwidth {
        Some(h) if h.is_finite() && h > 0.0 => h,
        _ => silverman_bandwidth(xs),
    };

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &x in xs {
        if x.is_finite() {
            lo = lo.min(x);
            hi = hi.max(x);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        lo -= 1.0;
        hi += 1.0;
    }

    let n = xs.len() as f64;
    let norm = 1.0 / (n * h * (2.0 * core::f64::consts::PI).sqrt());
    let step = (hi - lo) / (KDE_RESOLUTION - 1) as f64;
    (0..KDE_RESOLUTION)
        .map(|i| {
            let x = lo + step * i as f64;
            let sum: f64 = xs
                .iter()
                .filter(|v| v.is_finite())
                .map(|v| {
                    let z = (x - v) / h;
                    (-0.5 * z * z).exp()
                })
                .sum();
            (x, norm * sum)
        })
        .collect()
}

/// Pearson correlation of two equal-length series; 0 when either side is
/// empty or has no variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    let mx = mean(&xs[..n]);
    let my = mean(&ys[..n]);
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for i in 0..n {
        let dx = xs[i] - mx;
        let dy = ys[i] - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    let denom = (vx * vy).sqrt();
    if denom == 0.0 { 0.0 } else { cov / denom }
}

/// Pairwise Pearson correlation matrix over a set of series.
pub fn correlation_matrix(series: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let k = series.len();
    let mut out = alloc::vec![alloc::vec![0.0; k]; k];
    for i in 0..k {
        for j in 0..k {
            out[i][j] = if i == j {
                1.0
            } else {
                pearson(&series[i], &series[j])
            };
        }
    }
    out
}

/// Rolling arithmetic mean; `out[i]` covers `xs[i..i + window]`.
///
/// Returns an empty vector when the window is zero or longer than the data.
pub fn rolling_mean(xs: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || xs.len() < window {
        return Vec::new();
    }
    (0..=xs.len() - window)
        .map(|i| mean(&xs[i..i + window]))
        .collect()
}

/// Rolling population standard deviation; `out[i]` covers
/// `xs[i..i + window]`.
pub fn rolling_std_dev(xs: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || xs.len() < window {
        return Vec::new();
    }
    (0..=xs.len() - window)
        .map(|i| {
            let w = &xs[i..i + window];
            let m = mean(w);
            let ss: f64 = w.iter().map(|x| (x - m) * (x - m)).sum();
            (ss / window as f64).sqrt()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1.0e-9, "{a} != {b}");
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let sorted: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_close(percentile(&sorted, 0.0), 1.0);
        assert_close(percentile(&sorted, 100.0), 10.0);
        assert_close(percentile(&sorted, 50.0), 5.5);
        assert_close(percentile(&[], 50.0), 0.0);
        assert_close(percentile(&[42.0], 99.0), 42.0);
    }

    #[test]
    fn box_summary_of_one_through_ten() {
        let xs: Vec<f64> = (1..=10).map(f64::from).collect();
        let b = BoxSummary::from_data(&xs);
        assert_close(b.q1, 3.25);
        assert_close(b.median, 5.5);
        assert_close(b.q3, 7.75);
        assert_close(b.iqr, 4.5);
        assert_close(b.mean, 5.5);
        assert_close(b.min, 1.0);
        assert_close(b.max, 10.0);
        assert!(b.outliers.is_empty());
    }

    #[test]
    fn far_values_become_outliers() {
        let mut xs: Vec<f64> = (1..=9).map(f64::from).collect();
        xs.push(50.0);
        let b = BoxSummary::from_data(&xs);
        assert!(b.outliers.contains(&50.0));
        assert!(b.max < 50.0);
    }

    #[test]
    fn whiskers_collapse_when_iqr_is_zero() {
        let mut xs = alloc::vec![1.0; 9];
        xs.push(100.0);
        let b = BoxSummary::from_data(&xs);
        assert_close(b.max, 1.0);
        assert_eq!(b.outliers, alloc::vec![100.0]);
    }

    #[test]
    fn kde_covers_the_data_range_with_nonnegative_density() {
        let xs: Vec<f64> = (0..=100).map(f64::from).collect();
        let kde = gaussian_kde(&xs, None);
        assert_eq!(kde.len(), 100);
        assert_close(kde[0].0, 0.0);
        assert_close(kde[99].0, 100.0);
        for w in kde.windows(2) {
            assert!(w[1].0 > w[0].0, "evaluation values strictly increase");
        }
        for (_, d) in &kde {
            assert!(*d >= 0.0);
        }
    }

    #[test]
    fn kde_integrates_to_roughly_one() {
        let xs: Vec<f64> = (0..=100).map(f64::from).collect();
        let kde = gaussian_kde(&xs, None);
        let mut integral = 0.0;
        for w in kde.windows(2) {
            integral += 0.5 * (w[0].1 + w[1].1) * (w[1].0 - w[0].0);
        }
        assert!(
            (0.85..=1.05).contains(&integral),
            "trapezoid integral was {integral}"
        );
    }

    #[test]
    fn kde_single_value_is_a_finite_spike() {
        let kde = gaussian_kde(&[5.0], None);
        assert_eq!(kde.len(), 100);
        let peak = kde
            .iter()
            .map(|(_, d)| *d)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(peak.is_finite());
        assert!(peak > 0.0);
    }

    #[test]
    fn kde_empty_input_is_empty() {
        assert!(gaussian_kde(&[], None).is_empty());
    }

    #[test]
    fn pearson_detects_perfect_and_inverse_correlation() {
        let xs = alloc::vec![1.0, 2.0, 3.0, 4.0];
        let ys = alloc::vec![2.0, 4.0, 6.0, 8.0];
        let zs = alloc::vec![8.0, 6.0, 4.0, 2.0];
        assert_close(pearson(&xs, &ys), 1.0);
        assert_close(pearson(&xs, &zs), -1.0);
        assert_close(pearson(&xs, &[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn correlation_matrix_has_a_unit_diagonal() {
        let m = correlation_matrix(&[
            alloc::vec![1.0, 2.0, 3.0],
            alloc::vec![3.0, 2.0, 1.0],
        ]);
        assert_close(m[0][0], 1.0);
        assert_close(m[1][1], 1.0);
        assert_close(m[0][1], -1.0);
    }

    #[test]
    fn rolling_windows_align_to_their_start() {
        let xs = alloc::vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let means = rolling_mean(&xs, 3);
        assert_eq!(means.len(), 3);
        assert_close(means[0], 2.0);
        assert_close(means[2], 4.0);
        assert!(rolling_mean(&xs, 0).is_empty());
        assert!(rolling_mean(&xs, 9).is_empty());

        let sd = rolling_std_dev(&alloc::vec![2.0, 2.0, 2.0, 8.0], 3);
        assert_close(sd[0], 0.0);
        assert!(sd[1] > 0.0);
    }
}
