// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error bars (three cap styles) and confidence bands.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};

/// How an error bar terminates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapStyle {
    /// A horizontal T-cap at each end.
    #[default]
    Flat,
    /// A small circle at each end.
    Dot,
    /// No cap, just the stem.
    None,
}

/// A chart of `(x, y, error)` points with symmetric error bars and an
/// optional confidence band.
#[derive(Clone, Debug)]
pub struct ErrorBarChart {
    points: Vec<(f64, f64, f64)>,
    cap: CapStyle,
    cap_width: f64,
    color: Color,
    band: bool,
    tick_count: usize,
}

impl ErrorBarChart {
    /// Creates an error-bar chart; errors are absolute half-widths.
    pub fn new(points: Vec<(f64, f64, f64)>) -> Self {
        Self {
            points,
            cap: CapStyle::Flat,
            cap_width: 8.0,
            color: css::CRIMSON,
            band: false,
            tick_count: 5,
        }
    }

    /// Sets the cap style.
    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }

    /// Also fills the `y ± error` envelope as a confidence band.
    pub fn with_band(mut self, band: bool) -> Self {
        self.band = band;
        self
    }

    /// Sets the stem and marker color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let finite: Vec<(f64, f64, f64)> = self
            .points
            .iter()
            .copied()
            .filter(|(x, y, e)| x.is_finite() && y.is_finite() && e.is_finite())
            .map(|(x, y, e)| (x, y, e.abs()))
            .collect();
        if finite.is_empty() {
            return Vec::new();
        }

        let x0 = finite.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x1 = finite.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let y0 = finite.iter().map(|p| p.1 - p.2).fold(f64::INFINITY, f64::min);
        let y1 = finite.iter().map(|p| p.1 + p.2).fold(f64::NEG_INFINITY, f64::max);
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

        if self.band && finite.len() > 1 {
            let mut points = Vec::with_capacity(2 * finite.len());
            for (x, y, e) in &finite {
                points.push(Point::new(xs.forward(*x).value, ys.forward(y + e).value));
            }
            for (x, y, e) in finite.iter().rev() {
                points.push(Point::new(xs.forward(*x).value, ys.forward(y - e).value));
            }
            out.push(Primitive::Polygon {
                points,
                style: Style::fill(self.color.with_alpha(0.15)),
            });
        }

        let rule = Style::stroke(self.color, 1.5);
        let half = 0.5 * self.cap_width;
        for (x, y, e) in &finite {
            let cx = xs.forward(*x).value;
            let top = ys.forward(y + e).value;
            let bottom = ys.forward(y - e).value;
            out.push(Primitive::Line {
                x0: cx,
                y0: bottom,
                x1: cx,
                y1: top,
                style: rule.clone(),
            });
            match self.cap {
                CapStyle::Flat => {
                    for cy in [top, bottom] {
                        out.push(Primitive::Line {
                            x0: cx - half,
                            y0: cy,
                            x1: cx + half,
                            y1: cy,
                            style: rule.clone(),
                        });
                    }
                }
                CapStyle::Dot => {
                    for cy in [top, bottom] {
                        out.push(Primitive::Circle {
                            cx,
                            cy,
                            r: 2.0,
                            style: Style::fill(self.color),
                        });
                    }
                }
                CapStyle::None => {}
            }
            out.push(Primitive::Circle {
                cx,
                cy: ys.forward(*y).value,
                r: 3.0,
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
        assert!(ErrorBarChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 300.0, 200.0))
            .is_empty());
    }

    #[test]
    fn cap_styles_change_the_primitive_mix() {
        let data = alloc::vec![(0.0, 1.0, 0.5), (1.0, 2.0, 0.25)];
        let flat = ErrorBarChart::new(data.clone()).primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let bare = ErrorBarChart::new(data.clone())
            .with_cap(CapStyle::None)
            .primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let dotted = ErrorBarChart::new(data)
            .with_cap(CapStyle::Dot)
            .primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        // Flat caps add two lines per point over the bare version.
        assert_eq!(flat.len(), bare.len() + 4);
        // Dot caps add two circles per point over the bare version.
        assert_eq!(dotted.len(), bare.len() + 4);
    }

    #[test]
    fn confidence_band_adds_one_polygon() {
        let data = alloc::vec![(0.0, 1.0, 0.5), (1.0, 2.0, 0.25), (2.0, 1.5, 0.4)];
        let plain = ErrorBarChart::new(data.clone()).primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let banded = ErrorBarChart::new(data)
            .with_band(true)
            .primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        assert_eq!(banded.len(), plain.len() + 1);
        assert!(banded.iter().any(|p| matches!(p, Primitive::Polygon { .. })));
    }
}
