// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streamgraphs: stacked layers over a moving baseline.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use plottir_core::{Primitive, Style};

use crate::scale::LinearScale;
use crate::scale_color::default_palette;

/// The baseline algorithm for a streamgraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StreamBaseline {
    /// Baseline at `-total/2`: the stream hugs the horizontal center line.
    #[default]
    Silhouette,
    /// Flat baseline centering the thickest column.
    Center,
    /// Baseline minimizing weighted layer wiggle.
    Wiggle,
}

/// A streamgraph over shared x positions.
#[derive(Clone, Debug)]
pub struct StreamChart {
    xs: Vec<f64>,
    series: Vec<(String, Vec<f64>)>,
    baseline: StreamBaseline,
    colors: Vec<Color>,
}

impl StreamChart {
    /// Creates a streamgraph.
    pub fn new(xs: Vec<f64>, series: Vec<(String, Vec<f64>)>) -> Self {
        let colors = default_palette(series.len().max(1));
        Self {
            xs,
            series,
            baseline: StreamBaseline::Silhouette,
            colors,
        }
    }

    /// Sets the baseline algorithm.
    pub fn with_baseline(mut self, baseline: StreamBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets one color per series (cycling if short).
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    fn baseline_values(&self, totals: &[f64]) -> Vec<f64> {
        let n = totals.len();
        match self.baseline {
            StreamBaseline::Silhouette => totals.iter().map(|t| -0.5 * t).collect(),
            StreamBaseline::Center => {
                let max = totals.iter().copied().fold(0.0_f64, f64::max);
                alloc::vec![-0.5 * max; n]
            }
            StreamBaseline::Wiggle => {
                let mut y0 = alloc::vec![0.0; n];
                for j in 1..n {
                    let mut weighted = 0.0;
                    let mut below = 0.0;
                    for (_, values) in &self.series {
                        let df = values[j].max(0.0) - values[j - 1].max(0.0);
                        weighted += (below + 0.5 * df) * values[j].max(0.0);
                        below += df;
                    }
                    let step = if totals[j] > 0.0 {
                        weighted / totals[j]
                    } else {
                        0.0
                    };
                    y0[j] = y0[j - 1] - step;
                }
                y0
            }
        }
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Empty or mismatched input yields an empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let n = self.xs.len();
        if n == 0 || self.series.is_empty() {
            return Vec::new();
        }
        if self.series.iter().any(|(_, v)| v.len() != n) {
            return Vec::new();
        }

        let totals: Vec<f64> = (0..n)
            .map(|j| self.series.iter().map(|(_, v)| v[j].max(0.0)).sum())
            .collect();
        let baseline = self.baseline_values(&totals);

        // Layer boundaries from the baseline upward.
        let mut layers: Vec<Vec<f64>> = Vec::with_capacity(self.series.len() + 1);
        layers.push(baseline);
        for (_, values) in &self.series {
            let prev = &layers[layers.len() - 1];
            layers.push(
                prev.iter()
                    .zip(values)
                    .map(|(b, v)| b + v.max(0.0))
                    .collect(),
            );
        }

        let (x0, x1) = (
            self.xs.iter().copied().fold(f64::INFINITY, f64::min),
            self.xs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        );
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for layer in &layers {
            for v in layer {
                lo = lo.min(*v);
                hi = hi.max(*v);
            }
        }
        if !x0.is_finite() || !lo.is_finite() || lo == hi {
            return Vec::new();
        }

        let xs = LinearScale::new((x0, x1), (plottir_core::px(bounds.x0), plottir_core::px(bounds.x1)));
        let ys = LinearScale::new((lo, hi), (plottir_core::px(bounds.y1), plottir_core::px(bounds.y0)));

        let mut out = Vec::new();
        for i in 0..self.series.len() {
            let lower = &layers[i];
            let upper = &layers[i + 1];
            let mut points = Vec::with_capacity(2 * n);
            for (j, x) in self.xs.iter().enumerate() {
                points.push(Point::new(xs.forward(*x).value, ys.forward(upper[j]).value));
            }
            for (j, x) in self.xs.iter().enumerate().rev() {
                points.push(Point::new(xs.forward(*x).value, ys.forward(lower[j]).value));
            }
            out.push(Primitive::Polygon {
                points,
                style: Style::fill(self.colors[i % self.colors.len()].with_alpha(0.9)),
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn sample(baseline: StreamBaseline) -> StreamChart {
        StreamChart::new(
            alloc::vec![0.0, 1.0, 2.0, 3.0],
            alloc::vec![
                (String::from("a"), alloc::vec![1.0, 3.0, 2.0, 1.0]),
                (String::from("b"), alloc::vec![2.0, 1.0, 2.0, 2.0]),
            ],
        )
        .with_baseline(baseline)
    }

    #[test]
    fn each_series_becomes_one_polygon() {
        for baseline in [
            StreamBaseline::Silhouette,
            StreamBaseline::Center,
            StreamBaseline::Wiggle,
        ] {
            let prims = sample(baseline).primitives(Rect::new(0.0, 0.0, 300.0, 150.0));
            assert_eq!(prims.len(), 2, "baseline {baseline:?}");
        }
    }

    #[test]
    fn empty_and_mismatched_input_yield_empty_streams() {
        let empty = StreamChart::new(Vec::new(), Vec::new());
        assert!(empty.primitives(Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
        let mismatched = StreamChart::new(
            alloc::vec![0.0, 1.0],
            alloc::vec![(String::from("a"), alloc::vec![1.0])],
        );
        assert!(mismatched.primitives(Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
    }

    #[test]
    fn silhouette_centers_the_total_thickness() {
        let chart = sample(StreamBaseline::Silhouette);
        let totals = alloc::vec![3.0, 4.0, 4.0, 3.0];
        let baseline = chart.baseline_values(&totals);
        for (b, t) in baseline.iter().zip(&totals) {
            assert!((b + 0.5 * t).abs() < 1.0e-9);
        }
    }
}
