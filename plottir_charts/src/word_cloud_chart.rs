// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word clouds with spiral or row-flow placement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::scale::PowScale;
use crate::scale_color::CategoricalColorScale;

/// How words are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordPlacement {
    /// Walk an Archimedean spiral from the center until a free spot opens.
    #[default]
    Spiral,
    /// Flow words left-to-right into rows.
    Horizontal,
}

/// A word cloud over `(word, weight)` pairs.
#[derive(Clone, Debug)]
pub struct WordCloudChart {
    words: Vec<(String, f64)>,
    placement: WordPlacement,
    min_font: f64,
    max_font: f64,
}

impl WordCloudChart {
    /// Creates a word cloud; words render heaviest first.
    pub fn new(words: Vec<(String, f64)>) -> Self {
        Self {
            words,
            placement: WordPlacement::Spiral,
            min_font: 10.0,
            max_font: 42.0,
        }
    }

    /// Sets the placement strategy.
    pub fn with_placement(mut self, placement: WordPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let mut words: Vec<(&String, f64)> = self
            .words
            .iter()
            .filter(|(w, v)| !w.is_empty() && v.is_finite() && *v > 0.0)
            .map(|(w, v)| (w, *v))
            .collect();
        if words.is_empty() {
            return Vec::new();
        }
        words.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));

        let wmax = words[0].1;
        // Square-root sizing keeps word areas roughly proportional to
        // weight.
        let font_scale = PowScale::sqrt(
            (0.0, wmax),
            (
                plottir_core::px(self.min_font),
                plottir_core::px(self.max_font),
            ),
        );

        let measurer = HeuristicTextMeasurer;
        let colors = CategoricalColorScale::with_default_palette(
            words.iter().map(|(w, _)| (*w).clone()),
        );

        let mut placed: Vec<Rect> = Vec::new();
        let mut out = Vec::new();
        let center = (
            bounds.x0 + 0.5 * bounds.width(),
            bounds.y0 + 0.5 * bounds.height(),
        );
        let mut row_cursor = (bounds.x0, bounds.y0);
        let mut row_height = 0.0_f64;

        for (word, weight) in &words {
            let font = font_scale.forward(*weight).value;
            let (w, h) = measurer.measure(word, font);

            let rect = match self.placement {
                WordPlacement::Spiral => {
                    spiral_slot(center, (w, h), bounds, &placed)
                }
                WordPlacement::Horizontal => {
                    if row_cursor.0 + w > bounds.x1 {
                        row_cursor = (bounds.x0, row_cursor.1 + row_height + 2.0);
                        row_height = 0.0;
                    }
                    let r = Rect::new(
                        row_cursor.0,
                        row_cursor.1,
                        row_cursor.0 + w,
                        row_cursor.1 + h,
                    );
                    row_cursor.0 += w + 6.0;
                    row_height = row_height.max(h);
                    (r.y1 <= bounds.y1).then_some(r)
                }
            };
            let Some(rect) = rect else {
                continue; // no room left for this word
            };
            placed.push(rect);
            out.push(Primitive::Text {
                content: (*word).clone(),
                x: rect.x0 + 0.5 * rect.width(),
                y: rect.y0 + 0.5 * rect.height(),
                style: Style::text(colors.forward(word), font)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle),
            });
        }
        out
    }
}

fn overlaps(a: Rect, others: &[Rect]) -> bool {
    others.iter().any(|b| {
        a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
    })
}

/// Walks an Archimedean spiral outward until the word's rectangle fits
/// inside `bounds` without touching a placed rectangle.
fn spiral_slot(
    center: (f64, f64),
    size: (f64, f64),
    bounds: Rect,
    placed: &[Rect],
) -> Option<Rect> {
    let (w, h) = size;
    let mut t = 0.0_f64;
    while t < 120.0 * core::f64::consts::PI {
        let r = 2.0 * t;
        let x = center.0 + r * t.cos() - 0.5 * w;
        let y = center.1 + r * t.sin() - 0.5 * h;
        let rect = Rect::new(x, y, x + w, y + h);
        let inside = rect.x0 >= bounds.x0
            && rect.x1 <= bounds.x1
            && rect.y0 >= bounds.y0
            && rect.y1 <= bounds.y1;
        if inside && !overlaps(rect, placed) {
            return Some(rect);
        }
        t += 0.35;
    }
    None
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn words() -> Vec<(String, f64)> {
        alloc::vec![
            (String::from("plottir"), 30.0),
            (String::from("scale"), 18.0),
            (String::from("axis"), 12.0),
            (String::from("tick"), 7.0),
            (String::from("band"), 4.0),
        ]
    }

    #[test]
    fn empty_input_yields_an_empty_stream() {
        assert!(WordCloudChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 400.0, 300.0))
            .is_empty());
    }

    #[test]
    fn spiral_placement_keeps_words_disjoint() {
        let chart = WordCloudChart::new(words());
        let prims = chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(prims.len(), 5);
        // Rebuild the rectangles from the emitted text and sizes.
        let measurer = HeuristicTextMeasurer;
        let rects: Vec<Rect> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { content, x, y, style } => {
                    let (w, h) = measurer.measure(content, style.font_size);
                    Some(Rect::new(x - 0.5 * w, y - 0.5 * h, x + 0.5 * w, y + 0.5 * h))
                }
                _ => None,
            })
            .collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!overlaps(*a, &[*b]), "words overlap");
            }
        }
    }

    #[test]
    fn horizontal_placement_flows_in_rows() {
        let chart = WordCloudChart::new(words()).with_placement(WordPlacement::Horizontal);
        let prims = chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(prims.len(), 5);
        // Heaviest word first, so font sizes are non-increasing.
        let fonts: Vec<f64> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { style, .. } => Some(style.font_size),
                _ => None,
            })
            .collect();
        for w in fonts.windows(2) {
            assert!(w[0] >= w[1]);
        }
    }
}
