// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut charts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect, Shape};
use peniko::Color;
use plottir_core::{Primitive, Style};

use crate::scale_color::CategoricalColorScale;

/// A pie (or donut) chart over labeled values.
#[derive(Clone, Debug)]
pub struct PieChart {
    slices: Vec<(String, f64)>,
    /// Inner radius as a fraction of the outer radius (0 = pie).
    inner_fraction: f64,
    colors: Option<CategoricalColorScale>,
    tolerance: f64,
}

impl PieChart {
    /// Creates a pie chart.
    pub fn new(slices: Vec<(String, f64)>) -> Self {
        Self {
            slices,
            inner_fraction: 0.0,
            colors: None,
            tolerance: 0.1,
        }
    }

    /// Turns the pie into a donut with the given inner-radius fraction.
    pub fn with_inner_fraction(mut self, fraction: f64) -> Self {
        self.inner_fraction = fraction.clamp(0.0, 0.95);
        self
    }

    /// Overrides the slice color scale.
    pub fn with_colors(mut self, colors: CategoricalColorScale) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Slices with non-positive values are skipped; an all-empty input
    /// yields an empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let slices: Vec<(&String, f64)> = self
            .slices
            .iter()
            .filter(|(_, v)| v.is_finite() && *v > 0.0)
            .map(|(n, v)| (n, *v))
            .collect();
        let total: f64 = slices.iter().map(|(_, v)| v).sum();
        if slices.is_empty() || total <= 0.0 {
            return Vec::new();
        }

        let colors = match &self.colors {
            Some(c) => c.clone(),
            None => CategoricalColorScale::with_default_palette(
                slices.iter().map(|(n, _)| (*n).clone()),
            ),
        };

        let center = Point::new(bounds.x0 + 0.5 * bounds.width(), bounds.y0 + 0.5 * bounds.height());
        let outer = 0.5 * bounds.width().min(bounds.height());
        let inner = outer * self.inner_fraction;
        let circle = Circle::new(center, outer);

        let mut out = Vec::new();
        // Start at twelve o'clock, sweep clockwise.
        let mut cursor = -core::f64::consts::FRAC_PI_2;
        for (name, value) in &slices {
            let sweep = 2.0 * core::f64::consts::PI * value / total;
            let segment = circle.segment(inner, cursor, sweep);
            cursor += sweep;
            out.push(Primitive::Path {
                path: segment.path_elements(self.tolerance).collect(),
                style: Style::fill(self.slice_color(&colors, name)),
            });
        }
        out
    }

    fn slice_color(&self, colors: &CategoricalColorScale, name: &str) -> Color {
        colors.forward(name)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_and_zero_inputs_yield_empty_streams() {
        assert!(PieChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 200.0, 200.0))
            .is_empty());
        let zeros = PieChart::new(alloc::vec![(String::from("a"), 0.0)]);
        assert!(zeros.primitives(Rect::new(0.0, 0.0, 200.0, 200.0)).is_empty());
    }

    #[test]
    fn each_positive_slice_becomes_a_path() {
        let chart = PieChart::new(alloc::vec![
            (String::from("a"), 1.0),
            (String::from("b"), 2.0),
            (String::from("zero"), 0.0),
            (String::from("c"), 3.0),
        ]);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(prims.len(), 3);
    }

    #[test]
    fn donut_slices_leave_the_center_empty() {
        let chart = PieChart::new(alloc::vec![
            (String::from("a"), 1.0),
            (String::from("b"), 1.0),
        ])
        .with_inner_fraction(0.5);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 200.0, 200.0));
        for p in &prims {
            let Primitive::Path { path, .. } = p else {
                continue;
            };
            // No path point reaches the center.
            let bbox = path.bounding_box();
            let center = Point::new(100.0, 100.0);
            let touches_center = bbox.contains(center)
                && path
                    .elements()
                    .iter()
                    .filter_map(|el| el.end_point())
                    .any(|pt| (pt - center).hypot() < 25.0);
            assert!(!touches_center);
        }
    }
}
