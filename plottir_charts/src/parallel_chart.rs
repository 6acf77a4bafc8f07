// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallel-coordinates plots: one vertical axis per dimension, one
//! polyline per row.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::scale::LinearScale;
use crate::scale_color::default_palette;
use crate::scale_discrete::PointScale;

/// A parallel-coordinates plot.
#[derive(Clone, Debug)]
pub struct ParallelChart {
    axes: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl ParallelChart {
    /// Creates a parallel-coordinates plot; each row holds one value per
    /// axis.
    pub fn new(axes: impl IntoIterator<Item = impl Into<String>>, rows: Vec<Vec<f64>>) -> Self {
        Self {
            axes: axes.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Rows whose length differs from the axis count make the whole input
    /// malformed and yield an empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let dims = self.axes.len();
        if dims < 2 || self.rows.is_empty() {
            return Vec::new();
        }
        if self.rows.iter().any(|r| r.len() != dims) {
            return Vec::new();
        }

        // Per-dimension value scales.
        let label_h = 16.0;
        let plot = Rect::new(bounds.x0 + 20.0, bounds.y0 + label_h, bounds.x1 - 20.0, bounds.y1 - 8.0);
        let columns = PointScale::new(self.axes.clone(), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)));
        let scales: Vec<LinearScale> = (0..dims)
            .map(|d| {
                let lo = self.rows.iter().map(|r| r[d]).fold(f64::INFINITY, f64::min);
                let hi = self.rows.iter().map(|r| r[d]).fold(f64::NEG_INFINITY, f64::max);
                let (lo, hi) = if lo.is_finite() && hi.is_finite() {
                    (lo, hi)
                } else {
                    (0.0, 1.0)
                };
                LinearScale::new((lo, hi), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            })
            .collect();

        let mut out = Vec::new();
        let rule = Style::stroke(css::BLACK, 1.0);
        for name in &self.axes {
            let x = columns.forward(name).value;
            out.push(Primitive::Line {
                x0: x,
                y0: plot.y0,
                x1: x,
                y1: plot.y1,
                style: rule.clone(),
            });
            out.push(Primitive::Text {
                content: name.clone(),
                x,
                y: plot.y0 - 4.0,
                style: Style::text(css::BLACK, 10.0)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Alphabetic),
            });
        }

        let palette = default_palette(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let mut p = BezPath::new();
            for (d, (name, v)) in self.axes.iter().zip(row).enumerate() {
                let pt = (columns.forward(name).value, scales[d].forward(*v).value);
                if d == 0 {
                    p.move_to(pt);
                } else {
                    p.line_to(pt);
                }
            }
            out.push(Primitive::Path {
                path: p,
                style: Style::stroke(palette[i % palette.len()].with_alpha(0.7), 1.2),
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
    fn mismatched_rows_yield_an_empty_stream() {
        let chart = ParallelChart::new(["a", "b", "c"], alloc::vec![alloc::vec![1.0, 2.0]]);
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0)).is_empty());
    }

    #[test]
    fn each_row_becomes_one_polyline() {
        let chart = ParallelChart::new(
            ["a", "b", "c"],
            alloc::vec![
                alloc::vec![1.0, 5.0, 3.0],
                alloc::vec![2.0, 4.0, 1.0],
            ],
        );
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
        let polylines = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Path { .. }))
            .count();
        assert_eq!(polylines, 2);
        // One axis line and one label per dimension.
        let lines = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count();
        assert_eq!(lines, 3);
    }
}
