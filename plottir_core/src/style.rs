// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style bundle carried by every primitive.

use peniko::Color;

use crate::gradient::GradientId;

/// Paint for a fill or stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// A solid color.
    Solid(Color),
    /// A reference to a previously emitted gradient definition.
    Gradient(GradientId),
}

impl From<Color> for Paint {
    fn from(value: Color) -> Self {
        Self::Solid(value)
    }
}

impl From<GradientId> for Paint {
    fn from(value: GradientId) -> Self {
        Self::Gradient(value)
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start of the text run.
    #[default]
    Start,
    /// Anchor at the middle of the text run.
    Middle,
    /// Anchor at the end of the text run.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The alphabetic baseline.
    #[default]
    Alphabetic,
    /// The vertical midpoint.
    Middle,
    /// The hanging baseline (text below the anchor point).
    Hanging,
}

/// Fill/stroke/text styling for a primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Fill paint, if any.
    pub fill: Option<Paint>,
    /// Stroke paint, if any.
    pub stroke: Option<Paint>,
    /// Stroke width in range units.
    pub stroke_width: f64,
    /// Overall opacity in `[0, 1]`.
    pub opacity: f64,
    /// Font size for text primitives.
    pub font_size: f64,
    /// Horizontal anchor for text primitives.
    pub anchor: TextAnchor,
    /// Baseline for text primitives.
    pub baseline: TextBaseline,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            opacity: 1.0,
            font_size: 10.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

impl Style {
    /// A fill-only style.
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            ..Self::default()
        }
    }

    /// A stroke-only style.
    pub fn stroke(paint: impl Into<Paint>, stroke_width: f64) -> Self {
        Self {
            stroke: Some(paint.into()),
            stroke_width,
            ..Self::default()
        }
    }

    /// A text style with the given fill and font size.
    pub fn text(paint: impl Into<Paint>, font_size: f64) -> Self {
        Self {
            fill: Some(paint.into()),
            font_size,
            ..Self::default()
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = Some(paint.into());
        self
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, paint: impl Into<Paint>, stroke_width: f64) -> Self {
        self.stroke = Some(paint.into());
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the overall opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }
}
