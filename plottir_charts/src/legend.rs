// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend primitive generation: a vertical list of color swatches with
//! text labels, optionally flowing into columns.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::layout::Size;
use crate::measure::TextMeasurer;

/// A simple legend row item.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill color.
    pub fill: Color,
}

impl LegendItem {
    /// Convenience constructor.
    pub fn new(label: impl Into<String>, fill: Color) -> Self {
        Self {
            label: label.into(),
            fill,
        }
    }
}

/// An unpositioned legend specification.
///
/// Use with a measure/arrange pass: [`LegendSwatchesSpec::measure`] for the
/// desired size, then [`LegendSwatchesSpec::at`] once the origin is known.
#[derive(Clone, Debug)]
pub struct LegendSwatchesSpec {
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns; items flow top-to-bottom, then left-to-right.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Color,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatchesSpec {
    /// Creates a legend specification with defaults.
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            columns: 1,
            column_gap: 12.0,
            font_size: 10.0,
            text_fill: css::BLACK,
            items,
        }
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the label color.
    pub fn with_text_fill(mut self, text_fill: Color) -> Self {
        self.text_fill = text_fill;
        self
    }

    /// Measures the desired legend size.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let columns = self.columns.max(1);
        let rows_per_col = self.items.len().div_ceil(columns);
        let row_height = self.swatch_size.max(self.font_size);

        let mut col_widths = alloc::vec![0.0_f64; columns];
        for (i, item) in self.items.iter().enumerate() {
            let col = i / rows_per_col;
            let (w, _h) = measurer.measure(&item.label, self.font_size);
            col_widths[col] = col_widths[col].max(self.swatch_size + self.label_dx + w);
        }

        let used_cols = self.items.len().div_ceil(rows_per_col.max(1)).min(columns);
        let width: f64 = col_widths.iter().sum::<f64>()
            + self.column_gap * used_cols.saturating_sub(1) as f64;
        let rows = rows_per_col.min(self.items.len());
        let height = rows as f64 * row_height + rows.saturating_sub(1) as f64 * self.row_gap;
        Size { width, height }
    }

    /// Creates a positioned legend at the given origin.
    pub fn at(&self, x: f64, y: f64) -> LegendSwatches {
        LegendSwatches {
            spec: self.clone(),
            x,
            y,
        }
    }
}

/// A positioned legend.
#[derive(Clone, Debug)]
pub struct LegendSwatches {
    spec: LegendSwatchesSpec,
    x: f64,
    y: f64,
}

impl LegendSwatches {
    /// Generates legend primitives (one swatch rect + one label per item).
    pub fn primitives(&self, measurer: &dyn TextMeasurer) -> Vec<Primitive> {
        let spec = &self.spec;
        let columns = spec.columns.max(1);
        let rows_per_col = spec.items.len().div_ceil(columns);
        let row_height = spec.swatch_size.max(spec.font_size);

        // Column x offsets from per-column content widths.
        let mut col_widths = alloc::vec![0.0_f64; columns];
        for (i, item) in spec.items.iter().enumerate() {
            let col = i / rows_per_col;
            let (w, _h) = measurer.measure(&item.label, spec.font_size);
            col_widths[col] = col_widths[col].max(spec.swatch_size + spec.label_dx + w);
        }

        let mut out = Vec::with_capacity(spec.items.len() * 2);
        for (i, item) in spec.items.iter().enumerate() {
            let col = i / rows_per_col;
            let row = i % rows_per_col;
            let x = self.x
                + col_widths[..col].iter().sum::<f64>()
                + col as f64 * spec.column_gap;
            let y = self.y + row as f64 * (row_height + spec.row_gap);

            out.push(Primitive::Rect {
                x,
                y: y + (row_height - spec.swatch_size) * 0.5,
                width: spec.swatch_size,
                height: spec.swatch_size,
                style: Style::fill(item.fill),
            });
            out.push(Primitive::Text {
                content: item.label.clone(),
                x: x + spec.swatch_size + spec.label_dx,
                y: y + row_height * 0.5,
                style: Style::text(spec.text_fill, spec.font_size)
                    .with_anchor(TextAnchor::Start)
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
    use crate::measure::HeuristicTextMeasurer;

    fn items() -> Vec<LegendItem> {
        alloc::vec![
            LegendItem::new("A", css::BLACK),
            LegendItem::new("BBBB", css::BLACK),
            LegendItem::new("CC", css::BLACK),
            LegendItem::new("DDDDDD", css::BLACK),
        ]
    }

    #[test]
    fn measure_accounts_for_columns() {
        let measurer = HeuristicTextMeasurer;
        let one = LegendSwatchesSpec::new(items()).measure(&measurer);
        let two = LegendSwatchesSpec::new(items())
            .with_columns(2)
            .measure(&measurer);
        assert!(two.width > one.width);
        assert!(two.height < one.height);
    }

    #[test]
    fn each_item_gets_a_swatch_and_a_label() {
        let measurer = HeuristicTextMeasurer;
        let legend = LegendSwatchesSpec::new(items()).at(10.0, 20.0);
        let prims = legend.primitives(&measurer);
        assert_eq!(prims.len(), 8);
        let rects = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .count();
        assert_eq!(rects, 4);
        let Primitive::Rect { x, .. } = &prims[0] else {
            panic!("expected the first primitive to be a swatch");
        };
        assert_eq!(*x, 10.0);
    }
}
