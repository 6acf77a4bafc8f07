// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Density plots: a filled KDE curve.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};
use crate::stats::gaussian_kde;

/// A density plot over raw sample values.
#[derive(Clone, Debug)]
pub struct DensityChart {
    values: Vec<f64>,
    bandwidth: Option<f64>,
    color: Color,
    tick_count: usize,
}

impl DensityChart {
    /// Creates a density plot with Silverman-selected bandwidth.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            bandwidth: None,
            color: css::DARK_CYAN,
            tick_count: 5,
        }
    }

    /// Overrides the KDE bandwidth.
    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        if bandwidth.is_finite() && bandwidth > 0.0 {
            self.bandwidth = Some(bandwidth);
        }
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let kde = gaussian_kde(&self.values, self.bandwidth);
        if kde.is_empty() {
            return Vec::new();
        }
        let x0 = kde[0].0;
        let x1 = kde[kde.len() - 1].0;
        let dmax = kde.iter().map(|(_, d)| *d).fold(0.0_f64, f64::max);
        let dmax = if dmax > 0.0 { dmax } else { 1.0 };
        let tick_count = self.tick_count;

        let x_axis = move |range| {
            AxisSpec::bottom(ContinuousScale::Linear(LinearScale::new((x0, x1), range)))
                .with_tick_count(tick_count)
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(LinearScale::new((0.0, dmax), range)))
                .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let xs = LinearScale::new((x0, x1), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)));
        let ys = LinearScale::new((0.0, dmax), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)));

        let mut path = BezPath::new();
        path.move_to((xs.forward(x0).value, ys.forward(0.0).value));
        for (x, d) in &kde {
            path.line_to((xs.forward(*x).value, ys.forward(*d).value));
        }
        path.line_to((xs.forward(x1).value, ys.forward(0.0).value));
        path.close_path();

        out.push(Primitive::Path {
            path: path.clone(),
            style: Style::fill(self.color.with_alpha(0.4)),
        });
        out.push(Primitive::Path {
            path,
            style: Style::stroke(self.color, 1.5),
        });
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_input_yields_an_empty_stream() {
        assert!(DensityChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 300.0, 200.0))
            .is_empty());
    }

    #[test]
    fn density_emits_fill_and_outline() {
        let values: Vec<f64> = (0..50).map(|i| f64::from(i % 10)).collect();
        let prims = DensityChart::new(values).primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let paths = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Path { .. }))
            .count();
        assert_eq!(paths, 2);
    }
}
