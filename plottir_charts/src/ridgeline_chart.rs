// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ridgeline plots: one overlapping KDE silhouette per labeled row.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Color;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::scale::LinearScale;
use crate::scale_color::default_palette;
use crate::stats::gaussian_kde;

/// A ridgeline plot over labeled sample rows.
#[derive(Clone, Debug)]
pub struct RidgelineChart {
    rows: Vec<(String, Vec<f64>)>,
    colors: Vec<Color>,
    /// How far a ridge may spill into the row above (1 = exactly one row).
    overlap: f64,
    label_width: f64,
}

impl RidgelineChart {
    /// Creates a ridgeline plot; rows render top to bottom in input order.
    pub fn new(rows: Vec<(String, Vec<f64>)>) -> Self {
        let colors = default_palette(rows.len().max(1));
        Self {
            rows,
            colors,
            overlap: 1.8,
            label_width: 60.0,
        }
    }

    /// Sets the ridge overlap factor (1 keeps rows disjoint).
    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap.max(1.0);
        self
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// Rows with empty samples are skipped; an all-empty input yields an
    /// empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let rows: Vec<(&String, Vec<(f64, f64)>)> = self
            .rows
            .iter()
            .map(|(name, values)| (name, gaussian_kde(values, None)))
            .filter(|(_, kde)| !kde.is_empty())
            .collect();
        if rows.is_empty() {
            return Vec::new();
        }

        // Shared x domain across all rows.
        let mut x0 = f64::INFINITY;
        let mut x1 = f64::NEG_INFINITY;
        let mut dmax = 0.0_f64;
        for (_, kde) in &rows {
            x0 = x0.min(kde[0].0);
            x1 = x1.max(kde[kde.len() - 1].0);
            dmax = dmax.max(kde.iter().map(|(_, d)| *d).fold(0.0, f64::max));
        }
        if dmax <= 0.0 {
            dmax = 1.0;
        }

        let plot = Rect::new(bounds.x0 + self.label_width, bounds.y0, bounds.x1, bounds.y1);
        let xs = LinearScale::new((x0, x1), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)));
        let row_h = plot.height() / rows.len() as f64;
        let ridge_h = row_h * self.overlap;

        let mut out = Vec::new();
        for (i, (name, kde)) in rows.iter().enumerate() {
            let base_y = plot.y0 + row_h * (i + 1) as f64;
            let mut path = BezPath::new();
            path.move_to((xs.forward(kde[0].0).value, base_y));
            for (x, d) in kde {
                path.line_to((xs.forward(*x).value, base_y - d / dmax * ridge_h));
            }
            path.line_to((xs.forward(kde[kde.len() - 1].0).value, base_y));
            path.close_path();

            let color = self.colors[i % self.colors.len()];
            out.push(Primitive::Path {
                path: path.clone(),
                style: Style::fill(color.with_alpha(0.7)),
            });
            out.push(Primitive::Path {
                path,
                style: Style::stroke(color, 1.0),
            });
            out.push(Primitive::Text {
                content: (*name).clone(),
                x: plot.x0 - 6.0,
                y: base_y,
                style: Style::text(peniko::color::palette::css::BLACK, 10.0)
                    .with_anchor(TextAnchor::End)
                    .with_baseline(TextBaseline::Middle),
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
        assert!(RidgelineChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 400.0, 300.0))
            .is_empty());
        let all_empty = RidgelineChart::new(alloc::vec![(String::from("a"), Vec::new())]);
        assert!(all_empty.primitives(Rect::new(0.0, 0.0, 400.0, 300.0)).is_empty());
    }

    #[test]
    fn each_row_gets_fill_outline_and_label() {
        let rows = alloc::vec![
            (String::from("r1"), alloc::vec![1.0, 2.0, 2.5, 3.0]),
            (String::from("r2"), alloc::vec![4.0, 5.0, 5.5]),
        ];
        let prims = RidgelineChart::new(rows).primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(prims.len(), 6);
        let labels = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Text { .. }))
            .count();
        assert_eq!(labels, 2);
    }
}
