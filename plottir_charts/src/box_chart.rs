// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box plots: quartile boxes, Tukey whiskers and outlier dots per
//! category.

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
use crate::scale_discrete::BandScale;
use crate::stats::BoxSummary;

/// A box plot over labeled sample groups.
#[derive(Clone, Debug)]
pub struct BoxChart {
    groups: Vec<(String, Vec<f64>)>,
    fill: Color,
    stroke: Color,
    whisker_k: f64,
    tick_count: usize,
}

impl BoxChart {
    /// Creates a box plot.
    pub fn new(groups: Vec<(String, Vec<f64>)>) -> Self {
        Self {
            groups,
            fill: css::CORNFLOWER_BLUE,
            stroke: css::BLACK,
            whisker_k: 1.5,
            tick_count: 5,
        }
    }

    /// Sets the Tukey fence factor.
    pub fn with_whisker_k(mut self, k: f64) -> Self {
        if k.is_finite() && k >= 0.0 {
            self.whisker_k = k;
        }
        self
    }

    /// Sets the box fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Groups with no samples are skipped; an all-empty input yields an
    /// empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let summaries: Vec<(&String, BoxSummary)> = self
            .groups
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(name, v)| (name, BoxSummary::with_fences(v, self.whisker_k)))
            .collect();
        if summaries.is_empty() {
            return Vec::new();
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (_, s) in &summaries {
            lo = lo.min(s.min).min(s.outliers.first().copied().unwrap_or(s.min));
            hi = hi.max(s.max).max(s.outliers.last().copied().unwrap_or(s.max));
        }
        let categories: Vec<String> = summaries.iter().map(|(n, _)| (*n).clone()).collect();
        let tick_count = self.tick_count;
        let cats = categories.clone();

        let x_axis = move |range| {
            AxisSpec::bottom(BandScale::new(cats.clone(), range).with_padding(0.3, 0.2))
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((lo, hi), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let band = BandScale::new(categories.clone(), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)))
            .with_padding(0.3, 0.2);
        let ys = LinearScale::new((lo, hi), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        let bw = band.bandwidth().value;
        let rule = Style::stroke(self.stroke, 1.0);
        for (name, s) in &summaries {
            let x = band.forward(name).value;
            let cx = x + 0.5 * bw;
            let y = |v: f64| ys.forward(v).value;

            // Whisker stems and caps.
            for (a, b) in [(s.min, s.q1), (s.q3, s.max)] {
                out.push(Primitive::Line {
                    x0: cx,
                    y0: y(a),
                    x1: cx,
                    y1: y(b),
                    style: rule.clone(),
                });
            }
            for v in [s.min, s.max] {
                out.push(Primitive::Line {
                    x0: cx - 0.25 * bw,
                    y0: y(v),
                    x1: cx + 0.25 * bw,
                    y1: y(v),
                    style: rule.clone(),
                });
            }

            // Quartile box with median line.
            out.push(Primitive::Rect {
                x,
                y: y(s.q3),
                width: bw,
                height: (y(s.q1) - y(s.q3)).abs(),
                style: Style::fill(self.fill.with_alpha(0.7)).with_stroke(self.stroke, 1.0),
            });
            out.push(Primitive::Line {
                x0: x,
                y0: y(s.median),
                x1: x + bw,
                y1: y(s.median),
                style: Style::stroke(self.stroke, 1.5),
            });

            for v in &s.outliers {
                out.push(Primitive::Circle {
                    cx,
                    cy: y(*v),
                    r: 2.5,
                    style: Style::stroke(self.stroke, 1.0),
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

    #[test]
    fn empty_input_yields_an_empty_stream() {
        assert!(BoxChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 300.0, 200.0))
            .is_empty());
        let all_empty = BoxChart::new(alloc::vec![(String::from("g"), Vec::new())]);
        assert!(all_empty.primitives(Rect::new(0.0, 0.0, 300.0, 200.0)).is_empty());
    }

    #[test]
    fn outliers_render_as_circles() {
        let mut values: Vec<f64> = (1..=9).map(f64::from).collect();
        values.push(50.0);
        let chart = BoxChart::new(alloc::vec![(String::from("g"), values)]);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let circles = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(circles, 1);
    }

    #[test]
    fn each_group_gets_one_box() {
        let chart = BoxChart::new(alloc::vec![
            (String::from("a"), (1..=10).map(f64::from).collect()),
            (String::from("b"), (5..=15).map(f64::from).collect()),
        ]);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let boxes = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .count();
        assert_eq!(boxes, 2);
    }
}
