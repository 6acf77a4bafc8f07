// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line charts: straight or smoothed, with an optional area fill that can
//! use a minted linear gradient.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{GradientId, Paint, Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};

/// A single-series line chart over `(x, y)` points.
#[derive(Clone, Debug)]
pub struct LineChart {
    points: Vec<(f64, f64)>,
    color: Color,
    stroke_width: f64,
    smooth: bool,
    area: bool,
    gradient: bool,
    tick_count: usize,
}

impl LineChart {
    /// Creates a line chart; points are drawn in input order.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            color: css::CORNFLOWER_BLUE,
            stroke_width: 2.0,
            smooth: false,
            area: false,
            gradient: false,
            tick_count: 5,
        }
    }

    /// Sets the line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Smooths the line through segment midpoints.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Fills the area under the line with a translucent solid.
    pub fn with_area(mut self, area: bool) -> Self {
        self.area = area;
        self
    }

    /// Fills the area under the line with a vertical fade-out gradient
    /// (implies the area fill).
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        if gradient {
            self.area = true;
        }
        self
    }

    fn domains(&self) -> ((f64, f64), (f64, f64)) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for (px_, py_) in &self.points {
            if px_.is_finite() {
                x = (x.0.min(*px_), x.1.max(*px_));
            }
            if py_.is_finite() {
                y = (y.0.min(*py_), y.1.max(*py_));
            }
        }
        (x, y)
    }

    fn line_path(&self, xs: &LinearScale, ys: &LinearScale) -> BezPath {
        let mapped: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|(x, y)| (xs.forward(*x).value, ys.forward(*y).value))
            .collect();
        let mut p = BezPath::new();
        if mapped.is_empty() {
            return p;
        }
        p.move_to(mapped[0]);
        if self.smooth && mapped.len() > 2 {
            for i in 1..mapped.len() - 1 {
                let mid = (
                    0.5 * (mapped[i].0 + mapped[i + 1].0),
                    0.5 * (mapped[i].1 + mapped[i + 1].1),
                );
                p.quad_to(mapped[i], mid);
            }
            let last = mapped[mapped.len() - 1];
            p.line_to(last);
        } else {
            for pt in &mapped[1..] {
                p.line_to(*pt);
            }
        }
        p
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let ((x0, x1), (y0, y1)) = self.domains();
        if !x0.is_finite() || !y0.is_finite() {
            return Vec::new();
        }
        let tick_count = self.tick_count;

        let x_axis = move |range| {
            AxisSpec::bottom(ContinuousScale::Linear(LinearScale::new((x0, x1), range)))
                .with_tick_count(tick_count)
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((y0, y1), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let xs = LinearScale::new((x0, x1), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)));
        let ys = LinearScale::new((y0, y1), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        if self.area {
            let mut area = self.line_path(&xs, &ys);
            let first_x = xs.forward(self.points[0].0).value;
            let last_x = xs.forward(self.points[self.points.len() - 1].0).value;
            area.line_to((last_x, plot.y1));
            area.line_to((first_x, plot.y1));
            area.close_path();

            let fill = if self.gradient {
                let id = GradientId::mint();
                out.push(Primitive::LinearGradient {
                    id,
                    start: self.color.with_alpha(0.45),
                    end: self.color.with_alpha(0.0),
                    angle: 90.0,
                });
                Paint::Gradient(id)
            } else {
                Paint::Solid(self.color.with_alpha(0.25))
            };
            out.push(Primitive::Path {
                path: area,
                style: Style::fill(fill),
            });
        }

        out.push(Primitive::Path {
            path: self.line_path(&xs, &ys),
            style: Style::stroke(self.color, self.stroke_width),
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
        let chart = LineChart::new(Vec::new());
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0)).is_empty());
    }

    #[test]
    fn plain_chart_emits_a_single_stroked_path() {
        let chart = LineChart::new(alloc::vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)]);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let paths: Vec<&Primitive> = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Path { .. }))
            .collect();
        assert_eq!(paths.len(), 1);
        let Primitive::Path { style, .. } = paths[0] else {
            unreachable!();
        };
        assert!(style.stroke.is_some());
        assert!(style.fill.is_none());
    }

    #[test]
    fn gradient_area_mints_a_gradient_definition_first() {
        let chart =
            LineChart::new(alloc::vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)]).with_gradient(true);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));

        let gradient_pos = prims
            .iter()
            .position(|p| matches!(p, Primitive::LinearGradient { .. }))
            .expect("missing gradient definition");
        let Primitive::LinearGradient { id, .. } = &prims[gradient_pos] else {
            unreachable!();
        };
        let area_pos = prims
            .iter()
            .position(|p| match p {
                Primitive::Path { style, .. } => style.fill == Some(Paint::Gradient(*id)),
                _ => false,
            })
            .expect("missing gradient-filled area");
        assert!(gradient_pos < area_pos, "definition precedes its use");
    }

    #[test]
    fn two_charts_mint_distinct_gradient_ids() {
        let chart =
            LineChart::new(alloc::vec![(0.0, 0.0), (1.0, 1.0)]).with_gradient(true);
        let a = chart.clone().primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let b = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let id_of = |prims: &[Primitive]| {
            prims.iter().find_map(|p| match p {
                Primitive::LinearGradient { id, .. } => Some(*id),
                _ => None,
            })
        };
        assert_ne!(id_of(&a), id_of(&b));
    }
}
