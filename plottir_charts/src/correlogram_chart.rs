// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Correlograms: a Pearson correlation matrix rendered as a diverging
//! color grid.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::scale_color::DivergingColorScale;
use crate::stats::correlation_matrix;

/// A correlogram over named series or a precomputed matrix.
#[derive(Clone, Debug)]
pub struct CorrelogramChart {
    names: Vec<String>,
    matrix: Vec<Vec<f64>>,
    show_values: bool,
}

impl CorrelogramChart {
    /// Computes the correlation matrix from raw series.
    pub fn from_series(
        names: impl IntoIterator<Item = impl Into<String>>,
        series: &[Vec<f64>],
    ) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            matrix: correlation_matrix(series),
            show_values: true,
        }
    }

    /// Uses a precomputed correlation matrix.
    pub fn from_matrix(
        names: impl IntoIterator<Item = impl Into<String>>,
        matrix: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            matrix,
            show_values: true,
        }
    }

    /// Enables or disables the numeric cell labels.
    pub fn with_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// A non-square matrix, or a name count that does not match the matrix
    /// size, yields an empty stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let k = self.matrix.len();
        if k == 0 || self.names.len() != k {
            return Vec::new();
        }
        if self.matrix.iter().any(|row| row.len() != k) {
            return Vec::new();
        }

        let label_space = 50.0;
        let grid = Rect::new(
            bounds.x0 + label_space,
            bounds.y0 + label_space * 0.5,
            bounds.x1 - 8.0,
            bounds.y1 - label_space * 0.5,
        );
        let cell_w = grid.width() / k as f64;
        let cell_h = grid.height() / k as f64;
        let colors = DivergingColorScale::new((-1.0, 1.0), css::STEEL_BLUE, css::WHITE, css::CRIMSON)
            .clamped(true);

        let mut out = Vec::new();
        for (i, name) in self.names.iter().take(k).enumerate() {
            out.push(Primitive::Text {
                content: name.clone(),
                x: grid.x0 - 6.0,
                y: grid.y0 + (i as f64 + 0.5) * cell_h,
                style: Style::text(css::BLACK, 10.0)
                    .with_anchor(TextAnchor::End)
                    .with_baseline(TextBaseline::Middle),
            });
            out.push(Primitive::Text {
                content: name.clone(),
                x: grid.x0 + (i as f64 + 0.5) * cell_w,
                y: grid.y1 + 12.0,
                style: Style::text(css::BLACK, 10.0)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle),
            });
        }

        for (i, row) in self.matrix.iter().enumerate() {
            for (j, r) in row.iter().enumerate() {
                let x = grid.x0 + j as f64 * cell_w;
                let y = grid.y0 + i as f64 * cell_h;
                out.push(Primitive::Rect {
                    x,
                    y,
                    width: cell_w - 1.0,
                    height: cell_h - 1.0,
                    style: Style::fill(colors.forward(*r)),
                });
                if self.show_values {
                    out.push(Primitive::Text {
                        content: alloc::format!("{r:.2}"),
                        x: x + 0.5 * cell_w,
                        y: y + 0.5 * cell_h,
                        style: Style::text(css::BLACK, 9.0)
                            .with_anchor(TextAnchor::Middle)
                            .with_baseline(TextBaseline::Middle),
                    });
                }
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
    fn non_square_matrices_yield_an_empty_stream() {
        let chart = CorrelogramChart::from_matrix(
            ["a", "b"],
            alloc::vec![alloc::vec![1.0, 0.5], alloc::vec![0.5]],
        );
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 300.0)).is_empty());
    }

    #[test]
    fn name_count_must_match_the_matrix() {
        let chart = CorrelogramChart::from_matrix(
            ["a"],
            alloc::vec![alloc::vec![1.0, 0.0], alloc::vec![0.0, 1.0]],
        );
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 300.0)).is_empty());
    }

    #[test]
    fn each_cell_gets_a_colored_rect() {
        let chart = CorrelogramChart::from_series(
            ["a", "b"],
            &[alloc::vec![1.0, 2.0, 3.0], alloc::vec![3.0, 2.0, 1.0]],
        );
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 300.0));
        let cells = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .count();
        assert_eq!(cells, 4);
    }
}
