// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter plots with six marker shapes, optionally connected in input
//! order.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};

/// Marker shapes for point-like charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    /// A filled circle.
    #[default]
    Circle,
    /// An axis-aligned filled square.
    Square,
    /// A filled square rotated 45 degrees.
    Diamond,
    /// An upward-pointing filled triangle.
    Triangle,
    /// A stroked X.
    Cross,
    /// A stroked plus sign.
    Plus,
}

impl Marker {
    /// Emits the marker centered at `(cx, cy)` with the given radius.
    pub(crate) fn primitive(self, cx: f64, cy: f64, r: f64, color: Color) -> Primitive {
        match self {
            Self::Circle => Primitive::Circle {
                cx,
                cy,
                r,
                style: Style::fill(color),
            },
            Self::Square => Primitive::Rect {
                x: cx - r,
                y: cy - r,
                width: 2.0 * r,
                height: 2.0 * r,
                style: Style::fill(color),
            },
            Self::Diamond => Primitive::Polygon {
                points: alloc::vec![
                    Point::new(cx, cy - r),
                    Point::new(cx + r, cy),
                    Point::new(cx, cy + r),
                    Point::new(cx - r, cy),
                ],
                style: Style::fill(color),
            },
            Self::Triangle => Primitive::Polygon {
                points: alloc::vec![
                    Point::new(cx, cy - r),
                    Point::new(cx + r, cy + r),
                    Point::new(cx - r, cy + r),
                ],
                style: Style::fill(color),
            },
            Self::Cross => {
                let mut p = BezPath::new();
                p.move_to((cx - r, cy - r));
                p.line_to((cx + r, cy + r));
                p.move_to((cx - r, cy + r));
                p.line_to((cx + r, cy - r));
                Primitive::Path {
                    path: p,
                    style: Style::stroke(color, 1.5),
                }
            }
            Self::Plus => {
                let mut p = BezPath::new();
                p.move_to((cx - r, cy));
                p.line_to((cx + r, cy));
                p.move_to((cx, cy - r));
                p.line_to((cx, cy + r));
                Primitive::Path {
                    path: p,
                    style: Style::stroke(color, 1.5),
                }
            }
        }
    }
}

/// A scatter plot over `(x, y)` points.
#[derive(Clone, Debug)]
pub struct ScatterChart {
    points: Vec<(f64, f64)>,
    marker: Marker,
    marker_size: f64,
    color: Color,
    connected: bool,
    tick_count: usize,
}

impl ScatterChart {
    /// Creates a scatter plot.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            marker: Marker::Circle,
            marker_size: 3.5,
            color: css::CRIMSON,
            connected: false,
            tick_count: 5,
        }
    }

    /// Sets the marker shape.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the marker radius.
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size.max(0.5);
        self
    }

    /// Sets the marker color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Connects the points with a line in input order.
    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let finite: Vec<(f64, f64)> = self
            .points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        if finite.is_empty() {
            return Vec::new();
        }
        let x0 = finite.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x1 = finite.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let y0 = finite.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y1 = finite.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let tick_count = self.tick_count;

        let x_axis = move |range| {
            AxisSpec::bottom(ContinuousScale::Linear(
                LinearScale::new((x0, x1), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((y0, y1), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let xs = LinearScale::new((x0, x1), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)))
            .nice(self.tick_count);
        let ys = LinearScale::new((y0, y1), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        if self.connected && finite.len() > 1 {
            let mut p = BezPath::new();
            for (i, (x, y)) in finite.iter().enumerate() {
                let pt = (xs.forward(*x).value, ys.forward(*y).value);
                if i == 0 {
                    p.move_to(pt);
                } else {
                    p.line_to(pt);
                }
            }
            out.push(Primitive::Path {
                path: p,
                style: Style::stroke(self.color.with_alpha(0.6), 1.5),
            });
        }

        for (x, y) in &finite {
            out.push(self.marker.primitive(
                xs.forward(*x).value,
                ys.forward(*y).value,
                self.marker_size,
                self.color,
            ));
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
        assert!(ScatterChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 200.0, 200.0))
            .is_empty());
    }

    #[test]
    fn each_point_gets_a_marker() {
        let chart = ScatterChart::new(alloc::vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 200.0, 200.0));
        let circles = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(circles, 3);
    }

    #[test]
    fn every_marker_shape_renders() {
        for marker in [
            Marker::Circle,
            Marker::Square,
            Marker::Diamond,
            Marker::Triangle,
            Marker::Cross,
            Marker::Plus,
        ] {
            let chart =
                ScatterChart::new(alloc::vec![(0.0, 0.0), (1.0, 1.0)]).with_marker(marker);
            let prims = chart.primitives(Rect::new(0.0, 0.0, 200.0, 200.0));
            assert!(!prims.is_empty(), "marker {marker:?} rendered nothing");
        }
    }

    #[test]
    fn connected_scatter_adds_a_polyline() {
        let base = ScatterChart::new(alloc::vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let plain = base.clone().primitives(Rect::new(0.0, 0.0, 200.0, 200.0));
        let connected = base
            .with_connected(true)
            .primitives(Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(connected.len(), plain.len() + 1);
    }
}
