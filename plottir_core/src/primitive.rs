// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned geometric primitives.
//!
//! Chart adapters produce an ordered stream of primitives; sinks replay the
//! stream into whatever surface they target. Paint order is the stream
//! order.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::gradient::GradientId;
use crate::sink::RenderSink;
use crate::style::Style;

/// A single positioned primitive.
#[derive(Clone, Debug)]
pub enum Primitive {
    /// An axis-aligned rectangle.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Styling.
        style: Style,
    },
    /// A circle.
    Circle {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
        /// Styling.
        style: Style,
    },
    /// A straight line segment.
    Line {
        /// Start x.
        x0: f64,
        /// Start y.
        y0: f64,
        /// End x.
        x1: f64,
        /// End y.
        y1: f64,
        /// Styling.
        style: Style,
    },
    /// An arbitrary Bezier path.
    Path {
        /// Path geometry.
        path: BezPath,
        /// Styling.
        style: Style,
    },
    /// A closed polygon.
    Polygon {
        /// Vertices in order.
        points: Vec<Point>,
        /// Styling.
        style: Style,
    },
    /// A text run.
    Text {
        /// The string content (unshaped).
        content: String,
        /// Anchor x.
        x: f64,
        /// Anchor y.
        y: f64,
        /// Styling.
        style: Style,
    },
    /// A linear-gradient definition that later primitives may reference.
    LinearGradient {
        /// The identifier referenced by [`crate::Paint::Gradient`].
        id: GradientId,
        /// Start color.
        start: Color,
        /// End color.
        end: Color,
        /// Gradient direction in degrees (0 points right, 90 points down).
        angle: f64,
    },
}

impl Primitive {
    /// Replays this primitive into a sink.
    pub fn emit_to(&self, sink: &mut dyn RenderSink) {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
                style,
            } => sink.rectangle(*x, *y, *width, *height, style),
            Self::Circle { cx, cy, r, style } => sink.circle(*cx, *cy, *r, style),
            Self::Line {
                x0,
                y0,
                x1,
                y1,
                style,
            } => sink.line(*x0, *y0, *x1, *y1, style),
            Self::Path { path, style } => sink.path(path, style),
            Self::Polygon { points, style } => sink.polygon(points, style),
            Self::Text {
                content,
                x,
                y,
                style,
            } => sink.text(content, *x, *y, style),
            Self::LinearGradient {
                id,
                start,
                end,
                angle,
            } => sink.linear_gradient(*id, *start, *end, *angle),
        }
    }
}

/// Replays a primitive stream into a sink, in order.
pub fn emit_all(primitives: &[Primitive], sink: &mut dyn RenderSink) {
    for p in primitives {
        p.emit_to(sink);
    }
}

/// A sink that collects primitives into an ordered buffer.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveBuffer {
    primitives: Vec<Primitive>,
}

impl PrimitiveBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected primitives.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Consumes the buffer, returning the collected primitives.
    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }
}

impl RenderSink for PrimitiveBuffer {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style) {
        self.primitives.push(Primitive::Rect {
            x,
            y,
            width,
            height,
            style: style.clone(),
        });
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        self.primitives.push(Primitive::Circle {
            cx,
            cy,
            r,
            style: style.clone(),
        });
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, style: &Style) {
        self.primitives.push(Primitive::Line {
            x0,
            y0,
            x1,
            y1,
            style: style.clone(),
        });
    }

    fn path(&mut self, path: &BezPath, style: &Style) {
        self.primitives.push(Primitive::Path {
            path: path.clone(),
            style: style.clone(),
        });
    }

    fn polygon(&mut self, points: &[Point], style: &Style) {
        self.primitives.push(Primitive::Polygon {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn text(&mut self, content: &str, x: f64, y: f64, style: &Style) {
        self.primitives.push(Primitive::Text {
            content: String::from(content),
            x,
            y,
            style: style.clone(),
        });
    }

    fn linear_gradient(&mut self, id: GradientId, start: Color, end: Color, angle: f64) {
        self.primitives.push(Primitive::LinearGradient {
            id,
            start,
            end,
            angle,
        });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn buffer_preserves_emission_order() {
        let mut buf = PrimitiveBuffer::new();
        buf.rectangle(0.0, 0.0, 10.0, 10.0, &Style::fill(css::TOMATO));
        buf.line(0.0, 0.0, 5.0, 5.0, &Style::stroke(css::BLACK, 1.0));
        buf.text("hi", 1.0, 2.0, &Style::text(css::BLACK, 10.0));

        let prims = buf.primitives();
        assert_eq!(prims.len(), 3);
        assert!(matches!(prims[0], Primitive::Rect { .. }));
        assert!(matches!(prims[1], Primitive::Line { .. }));
        assert!(matches!(prims[2], Primitive::Text { .. }));
    }

    #[test]
    fn emit_to_round_trips_through_a_second_buffer() {
        let mut first = PrimitiveBuffer::new();
        first.circle(3.0, 4.0, 2.0, &Style::fill(css::STEEL_BLUE));

        let mut second = PrimitiveBuffer::new();
        emit_all(first.primitives(), &mut second);
        assert_eq!(second.primitives().len(), 1);
        let Primitive::Circle { cx, cy, r, .. } = &second.primitives()[0] else {
            panic!("expected a circle");
        };
        assert_eq!((*cx, *cy, *r), (3.0, 4.0, 2.0));
    }
}
