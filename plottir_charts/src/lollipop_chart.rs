// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lollipop charts: a thin stem from the baseline topped with a dot.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};
use crate::scale_discrete::PointScale;

/// A lollipop chart over labeled categories.
#[derive(Clone, Debug)]
pub struct LollipopChart {
    categories: Vec<String>,
    values: Vec<f64>,
    color: Color,
    dot_radius: f64,
    tick_count: usize,
}

impl LollipopChart {
    /// Creates a lollipop chart.
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            values,
            color: css::SLATE_BLUE,
            dot_radius: 4.0,
            tick_count: 5,
        }
    }

    /// Sets the stem and dot color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Empty or mismatched input yields an empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        if self.categories.is_empty() || self.categories.len() != self.values.len() {
            return Vec::new();
        }
        let vmax = self.values.iter().copied().fold(0.0_f64, f64::max);
        let vmax = if vmax > 0.0 { vmax } else { 1.0 };
        let tick_count = self.tick_count;
        let cats = self.categories.clone();

        let x_axis =
            move |range| AxisSpec::bottom(PointScale::new(cats.clone(), range).with_padding(0.5));
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((0.0, vmax), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let xs = PointScale::new(self.categories.clone(), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)))
            .with_padding(0.5);
        let ys = LinearScale::new((0.0, vmax), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        let y_base = ys.forward(0.0).value;
        for (cat, v) in self.categories.iter().zip(&self.values) {
            let x = xs.forward(cat).value;
            let y = ys.forward(v.max(0.0)).value;
            out.push(Primitive::Line {
                x0: x,
                y0: y_base,
                x1: x,
                y1: y,
                style: Style::stroke(self.color, 2.0),
            });
            out.push(Primitive::Circle {
                cx: x,
                cy: y,
                r: self.dot_radius,
                style: Style::fill(self.color),
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
        let chart = LollipopChart::new(Vec::<String>::new(), Vec::new());
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0)).is_empty());
    }

    #[test]
    fn each_category_gets_a_stem_and_a_dot() {
        let chart = LollipopChart::new(["a", "b", "c"], alloc::vec![1.0, 3.0, 2.0]);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let stems = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Line { style, .. } if style.stroke_width == 2.0))
            .count();
        let dots = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(stems, 3);
        assert_eq!(dots, 3);
    }
}
