// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar charts: single or stacked series, vertical or horizontal.

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
use crate::scale_discrete::BandScale;

/// A bar chart over labeled categories.
#[derive(Clone, Debug)]
pub struct BarChart {
    categories: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
    colors: Vec<Color>,
    horizontal: bool,
    tick_count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl BarChart {
    /// A single-series bar chart.
    pub fn new(categories: impl IntoIterator<Item = impl Into<String>>, values: Vec<f64>) -> Self {
        Self::stacked(categories, alloc::vec![(String::new(), values)])
    }

    /// A stacked bar chart; each series contributes one segment per
    /// category, stacked in series order.
    pub fn stacked(
        categories: impl IntoIterator<Item = impl Into<String>>,
        series: Vec<(String, Vec<f64>)>,
    ) -> Self {
        let colors = default_palette(series.len().max(1));
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
            colors,
            horizontal: false,
            tick_count: 5,
            padding_inner: 0.2,
            padding_outer: 0.1,
        }
    }

    /// Lays bars horizontally (categories along y).
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Sets one color per series (cycling if short).
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    /// Sets the approximate value-axis tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    fn stack_max(&self) -> f64 {
        let mut max = 0.0_f64;
        for j in 0..self.categories.len() {
            let total: f64 = self.series.iter().map(|(_, v)| v[j].max(0.0)).sum();
            max = max.max(total);
        }
        if max > 0.0 { max } else { 1.0 }
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Empty or mismatched input yields an empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        if self.categories.is_empty() || self.series.is_empty() {
            return Vec::new();
        }
        if self
            .series
            .iter()
            .any(|(_, v)| v.len() != self.categories.len())
        {
            return Vec::new();
        }

        let vmax = self.stack_max();
        let categories = self.categories.clone();
        let tick_count = self.tick_count;
        let (pi, po) = (self.padding_inner, self.padding_outer);

        let value_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((0.0, vmax), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let cats = categories.clone();
        let band_axis =
            move |range| AxisSpec::bottom(BandScale::new(cats.clone(), range).with_padding(pi, po));

        let (plot, mut out) = if self.horizontal {
            let value_axis = move |range| {
                AxisSpec::bottom(ContinuousScale::Linear(
                    LinearScale::new((0.0, vmax), range).nice(tick_count),
                ))
                .with_tick_count(tick_count)
            };
            let cats = categories.clone();
            let band_axis =
                move |range| AxisSpec::left(BandScale::new(cats.clone(), range).with_padding(pi, po));
            arrange_xy(bounds, &value_axis, &band_axis)
        } else {
            arrange_xy(bounds, &band_axis, &value_axis)
        };

        let (band, value) = if self.horizontal {
            (
                BandScale::new(self.categories.clone(), (plottir_core::px(plot.y0), plottir_core::px(plot.y1)))
                    .with_padding(pi, po),
                LinearScale::new((0.0, vmax), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)))
                    .nice(tick_count),
            )
        } else {
            (
                BandScale::new(self.categories.clone(), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)))
                    .with_padding(pi, po),
                LinearScale::new((0.0, vmax), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
                    .nice(tick_count),
            )
        };

        let bandwidth = band.bandwidth().value;
        for (j, cat) in self.categories.iter().enumerate() {
            let b0 = band.forward(cat).value;
            let mut cum = 0.0;
            for (i, (_, values)) in self.series.iter().enumerate() {
                let v = values[j].max(0.0);
                if v == 0.0 {
                    continue;
                }
                let a = value.forward(cum).value;
                let b = value.forward(cum + v).value;
                cum += v;
                let style = Style::fill(self.colors[i % self.colors.len()]);
                out.push(if self.horizontal {
                    Primitive::Rect {
                        x: a.min(b),
                        y: b0,
                        width: (b - a).abs(),
                        height: bandwidth,
                        style,
                    }
                } else {
                    Primitive::Rect {
                        x: b0,
                        y: a.min(b),
                        width: bandwidth,
                        height: (b - a).abs(),
                        style,
                    }
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn rects(prims: &[Primitive]) -> Vec<(f64, f64, f64, f64)> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_an_empty_stream() {
        let chart = BarChart::new(Vec::<String>::new(), Vec::new());
        assert!(chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0)).is_empty());
    }

    #[test]
    fn mismatched_series_lengths_yield_an_empty_stream() {
        let chart = BarChart::stacked(
            ["a", "b", "c"],
            alloc::vec![(String::from("s"), alloc::vec![1.0, 2.0])],
        );
        assert!(chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0)).is_empty());
    }

    #[test]
    fn bar_heights_are_proportional_to_values() {
        let chart = BarChart::new(["a", "b"], alloc::vec![1.0, 2.0]);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        let bars = rects(&prims);
        assert_eq!(bars.len(), 2);
        assert!((bars[1].3 / bars[0].3 - 2.0).abs() < 1.0e-6);
    }

    #[test]
    fn stacked_segments_share_the_category_slot() {
        let chart = BarChart::stacked(
            ["a"],
            alloc::vec![
                (String::from("s1"), alloc::vec![2.0]),
                (String::from("s2"), alloc::vec![3.0]),
            ],
        );
        let prims = chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        let bars = rects(&prims);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].0, bars[1].0);
        // Segments abut: the top of the lower equals the bottom of the upper.
        let (y0, h0) = (bars[0].1, bars[0].3);
        let (y1, h1) = (bars[1].1, bars[1].3);
        assert!((y1 + h1 - y0).abs() < 1.0e-6 || (y0 + h0 - y1).abs() < 1.0e-6);
    }

    #[test]
    fn horizontal_bars_grow_along_x() {
        let chart = BarChart::new(["a", "b"], alloc::vec![1.0, 3.0]).with_horizontal(true);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        let bars = rects(&prims);
        assert_eq!(bars.len(), 2);
        assert!((bars[1].2 / bars[0].2 - 3.0).abs() < 1.0e-6);
    }
}
