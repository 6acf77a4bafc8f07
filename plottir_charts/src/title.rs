// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! Titles participate in chart layout (they reserve a strip above the plot)
//! and render as one or two text primitives.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::measure::TextMeasurer;

/// A chart-level title with an optional subtitle.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Title text (unshaped).
    pub text: String,
    /// Optional subtitle text (unshaped).
    pub subtitle: Option<String>,
    /// Title font size.
    pub font_size: f64,
    /// Subtitle font size.
    pub subtitle_font_size: f64,
    /// Title fill color.
    pub fill: Color,
    /// Subtitle fill color.
    pub subtitle_fill: Color,
    /// Vertical padding above and below the text block.
    pub padding: f64,
    /// Vertical gap between title and subtitle.
    pub subtitle_gap: f64,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subtitle: None,
            font_size: 12.0,
            subtitle_font_size: 11.0,
            fill: css::BLACK,
            subtitle_fill: css::DIM_GRAY,
            padding: 6.0,
            subtitle_gap: 2.0,
        }
    }

    /// Sets the subtitle text.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Returns the strip height this title reserves in chart layout.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let pad = self.padding.max(0.0);
        let (_w, h) = measurer.measure(&self.text, self.font_size);
        let mut total = 2.0 * pad + h;
        if let Some(sub) = &self.subtitle {
            let (_w, sh) = measurer.measure(sub, self.subtitle_font_size);
            total += self.subtitle_gap.max(0.0) + sh;
        }
        total
    }

    /// Generates title primitives centered in the given strip.
    pub fn primitives(&self, strip: Rect) -> Vec<Primitive> {
        let cx = 0.5 * (strip.x0 + strip.x1);
        let mut out = Vec::new();
        let mut y = strip.y0 + self.padding.max(0.0);
        out.push(Primitive::Text {
            content: self.text.clone(),
            x: cx,
            y,
            style: Style::text(self.fill, self.font_size)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Hanging),
        });
        if let Some(sub) = &self.subtitle {
            y += self.font_size + self.subtitle_gap.max(0.0);
            out.push(Primitive::Text {
                content: sub.clone(),
                x: cx,
                y,
                style: Style::text(self.subtitle_fill, self.subtitle_font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Hanging),
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

    #[test]
    fn subtitle_increases_the_measured_strip() {
        let measurer = HeuristicTextMeasurer;
        let plain = TitleSpec::new("Title").measure(&measurer);
        let with_sub = TitleSpec::new("Title")
            .with_subtitle("Subtitle")
            .measure(&measurer);
        assert!(with_sub > plain);
    }

    #[test]
    fn title_text_is_centered_in_the_strip() {
        let title = TitleSpec::new("Hello");
        let prims = title.primitives(Rect::new(0.0, 0.0, 200.0, 30.0));
        assert_eq!(prims.len(), 1);
        let Primitive::Text { x, .. } = &prims[0] else {
            panic!("expected text");
        };
        assert_eq!(*x, 100.0);
    }
}
