// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area charts: a single filled series or a zero-baseline stack.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use plottir_core::{Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};
use crate::scale_color::default_palette;

/// An area chart over shared x positions.
#[derive(Clone, Debug)]
pub struct AreaChart {
    xs: Vec<f64>,
    series: Vec<(String, Vec<f64>)>,
    colors: Vec<Color>,
    tick_count: usize,
}

impl AreaChart {
    /// A single-series area chart.
    pub fn new(xs: Vec<f64>, values: Vec<f64>) -> Self {
        Self::stacked(xs, alloc::vec![(String::new(), values)])
    }

    /// A stacked area chart; series stack in order, baseline at zero.
    pub fn stacked(xs: Vec<f64>, series: Vec<(String, Vec<f64>)>) -> Self {
        let colors = default_palette(series.len().max(1));
        Self {
            xs,
            series,
            colors,
            tick_count: 5,
        }
    }

    /// Sets one color per series (cycling if short).
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
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

        // Cumulative layers, clamped non-negative for stacking.
        let mut layers: Vec<Vec<f64>> = Vec::with_capacity(self.series.len() + 1);
        layers.push(alloc::vec![0.0; n]);
        for (_, values) in &self.series {
            let prev = &layers[layers.len() - 1];
            let next: Vec<f64> = prev
                .iter()
                .zip(values)
                .map(|(base, v)| base + v.max(0.0))
                .collect();
            layers.push(next);
        }

        let (x0, x1) = (
            self.xs.iter().copied().fold(f64::INFINITY, f64::min),
            self.xs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        );
        if !x0.is_finite() {
            return Vec::new();
        }
        let top = layers[layers.len() - 1]
            .iter()
            .copied()
            .fold(0.0_f64, f64::max);
        let vmax = if top > 0.0 { top } else { 1.0 };
        let tick_count = self.tick_count;

        let x_axis = move |range| {
            AxisSpec::bottom(ContinuousScale::Linear(LinearScale::new((x0, x1), range)))
                .with_tick_count(tick_count)
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((0.0, vmax), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let xs = LinearScale::new((x0, x1), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)));
        let ys = LinearScale::new((0.0, vmax), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        for (i, _) in self.series.iter().enumerate() {
            let lower = &layers[i];
            let upper = &layers[i + 1];
            let mut points = Vec::with_capacity(2 * n);
            for (j, x) in self.xs.iter().enumerate() {
                points.push(kurbo::Point::new(
                    xs.forward(*x).value,
                    ys.forward(upper[j]).value,
                ));
            }
            for (j, x) in self.xs.iter().enumerate().rev() {
                points.push(kurbo::Point::new(
                    xs.forward(*x).value,
                    ys.forward(lower[j]).value,
                ));
            }
            out.push(Primitive::Polygon {
                points,
                style: Style::fill(self.colors[i % self.colors.len()].with_alpha(0.85)),
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_input_yields_an_empty_stream() {
        let chart = AreaChart::new(Vec::new(), Vec::new());
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0)).is_empty());
    }

    #[test]
    fn stacked_layers_emit_one_polygon_per_series() {
        let chart = AreaChart::stacked(
            alloc::vec![0.0, 1.0, 2.0],
            alloc::vec![
                (String::from("a"), alloc::vec![1.0, 2.0, 1.0]),
                (String::from("b"), alloc::vec![1.0, 1.0, 1.0]),
            ],
        );
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let polys = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Polygon { .. }))
            .count();
        assert_eq!(polys, 2);
    }

    #[test]
    fn upper_layer_sits_above_the_lower_layer() {
        let chart = AreaChart::stacked(
            alloc::vec![0.0, 1.0],
            alloc::vec![
                (String::from("a"), alloc::vec![1.0, 1.0]),
                (String::from("b"), alloc::vec![1.0, 1.0]),
            ],
        );
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let tops: Vec<f64> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Polygon { points, .. } => {
                    Some(points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min))
                }
                _ => None,
            })
            .collect();
        assert_eq!(tops.len(), 2);
        assert!(tops[1] < tops[0], "second layer reaches higher");
    }
}
