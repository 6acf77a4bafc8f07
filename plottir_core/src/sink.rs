// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output-sink interface.
//!
//! The toolkit builds primitives; it never serializes them. A sink is any
//! surface that can receive the primitive vocabulary: an SVG writer, a
//! terminal rasterizer, a test buffer. Calls arrive in paint order.

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::gradient::GradientId;
use crate::style::Style;

/// A surface that receives positioned primitives.
pub trait RenderSink {
    /// An axis-aligned rectangle.
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style);

    /// A circle.
    fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style);

    /// A straight line segment.
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, style: &Style);

    /// An arbitrary Bezier path.
    fn path(&mut self, path: &BezPath, style: &Style);

    /// A closed polygon.
    fn polygon(&mut self, points: &[Point], style: &Style);

    /// A text run anchored at `(x, y)`.
    fn text(&mut self, content: &str, x: f64, y: f64, style: &Style);

    /// A linear-gradient definition referenced by later fills.
    fn linear_gradient(&mut self, id: GradientId, start: Color, end: Color, angle: f64);
}
