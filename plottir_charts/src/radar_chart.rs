// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar charts: series polygons over radial spokes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::scale_color::default_palette;

/// A radar chart: one spoke per axis, one polygon per series.
#[derive(Clone, Debug)]
pub struct RadarChart {
    axes: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
    colors: Vec<Color>,
    rings: usize,
}

impl RadarChart {
    /// Creates a radar chart.
    pub fn new(
        axes: impl IntoIterator<Item = impl Into<String>>,
        series: Vec<(String, Vec<f64>)>,
    ) -> Self {
        let colors = default_palette(series.len().max(1));
        Self {
            axes: axes.into_iter().map(Into::into).collect(),
            series,
            colors,
            rings: 4,
        }
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Requires at least three axes and matching per-series value counts;
    /// anything else yields an empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let n = self.axes.len();
        if n < 3 || self.series.is_empty() {
            return Vec::new();
        }
        if self.series.iter().any(|(_, v)| v.len() != n) {
            return Vec::new();
        }
        let vmax = self
            .series
            .iter()
            .flat_map(|(_, v)| v.iter().copied())
            .fold(0.0_f64, f64::max);
        let vmax = if vmax > 0.0 { vmax } else { 1.0 };

        let center = Point::new(bounds.x0 + 0.5 * bounds.width(), bounds.y0 + 0.5 * bounds.height());
        let radius = 0.42 * bounds.width().min(bounds.height());
        let angle = |k: usize| {
            2.0 * core::f64::consts::PI * k as f64 / n as f64 - core::f64::consts::FRAC_PI_2
        };
        let spoke = |k: usize, r: f64| {
            let a = angle(k);
            Point::new(center.x + r * a.cos(), center.y + r * a.sin())
        };

        let mut out = Vec::new();
        let grid = Style::stroke(css::BLACK.with_alpha(0.2), 1.0);

        for ring in 1..=self.rings {
            let r = radius * ring as f64 / self.rings as f64;
            out.push(Primitive::Polygon {
                points: (0..n).map(|k| spoke(k, r)).collect(),
                style: grid.clone(),
            });
        }
        for (k, name) in self.axes.iter().enumerate() {
            let tip = spoke(k, radius);
            out.push(Primitive::Line {
                x0: center.x,
                y0: center.y,
                x1: tip.x,
                y1: tip.y,
                style: grid.clone(),
            });
            let label = spoke(k, radius + 10.0);
            out.push(Primitive::Text {
                content: name.clone(),
                x: label.x,
                y: label.y,
                style: Style::text(css::BLACK, 10.0)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle),
            });
        }

        for (i, (_, values)) in self.series.iter().enumerate() {
            let color = self.colors[i % self.colors.len()];
            let points: Vec<Point> = values
                .iter()
                .enumerate()
                .map(|(k, v)| spoke(k, radius * (v.max(0.0) / vmax)))
                .collect();
            out.push(Primitive::Polygon {
                points,
                style: Style::fill(color.with_alpha(0.25)).with_stroke(color, 1.5),
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
    fn fewer_than_three_axes_yield_an_empty_stream() {
        let chart = RadarChart::new(["a", "b"], alloc::vec![(String::from("s"), alloc::vec![1.0, 2.0])]);
        assert!(chart.primitives(Rect::new(0.0, 0.0, 200.0, 200.0)).is_empty());
    }

    #[test]
    fn mismatched_axis_and_value_counts_yield_an_empty_stream() {
        let chart = RadarChart::new(
            ["a", "b", "c"],
            alloc::vec![(String::from("s"), alloc::vec![1.0, 2.0])],
        );
        assert!(chart.primitives(Rect::new(0.0, 0.0, 200.0, 200.0)).is_empty());
    }

    #[test]
    fn series_polygons_follow_the_grid_and_spokes() {
        let chart = RadarChart::new(
            ["a", "b", "c", "d"],
            alloc::vec![
                (String::from("s1"), alloc::vec![1.0, 2.0, 3.0, 4.0]),
                (String::from("s2"), alloc::vec![4.0, 3.0, 2.0, 1.0]),
            ],
        );
        let prims = chart.primitives(Rect::new(0.0, 0.0, 200.0, 200.0));
        let polygons = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Polygon { .. }))
            .count();
        // Four grid rings plus two series.
        assert_eq!(polygons, 6);
    }
}
