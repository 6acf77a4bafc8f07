// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A terminal render sink.
//!
//! The surface exposes a pixel coordinate system of `2 * cols` by
//! `4 * rows` (the braille sub-pixel grid). Stroked primitives rasterize
//! into braille dots, filled rectangles into block shades, text into the
//! character layer. `render` assembles rows with ANSI color at the chosen
//! depth.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{BezPath, PathEl, Point};
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{GradientId, Paint, RenderSink, Style};

use crate::ansi::{ColorDepth, RESET, fg};
use crate::blocks::shade;
use crate::braille::BrailleGrid;

/// A character-cell surface implementing [`RenderSink`].
#[derive(Clone, Debug)]
pub struct TermSurface {
    cols: usize,
    rows: usize,
    braille: BrailleGrid,
    /// Per-cell stroke color for braille dots (last writer wins).
    stroke_colors: Vec<Option<Color>>,
    /// Block/text overlay; takes precedence over braille.
    chars: Vec<Option<(char, Color)>>,
    gradients: HashMap<GradientId, (Color, Color)>,
}

impl TermSurface {
    /// Creates a surface of `cols x rows` character cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            braille: BrailleGrid::new(cols, rows),
            stroke_colors: alloc::vec![None; cols * rows],
            chars: alloc::vec![None; cols * rows],
            gradients: HashMap::new(),
        }
    }

    /// Width of the pixel coordinate system (2 per column).
    pub fn pixel_width(&self) -> f64 {
        (2 * self.cols) as f64
    }

    /// Height of the pixel coordinate system (4 per row).
    pub fn pixel_height(&self) -> f64 {
        (4 * self.rows) as f64
    }

    fn paint_color(&self, paint: Option<Paint>) -> Option<Color> {
        match paint? {
            Paint::Solid(c) => Some(c),
            Paint::Gradient(id) => self
                .gradients
                .get(&id)
                .map(|(a, b)| plottir_core::mix(*a, *b, 0.5, plottir_core::GradientSpace::Rgb)),
        }
    }

    fn mark_cell(&mut self, x: i64, y: i64, color: Color) {
        self.braille.set(x, y);
        if x >= 0 && y >= 0 {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "checked non-negative cell coordinates"
            )]
            let (cx, cy) = ((x / 2) as usize, (y / 4) as usize);
            if cx < self.cols && cy < self.rows {
                self.stroke_colors[cy * self.cols + cx] = Some(color);
            }
        }
    }

    fn stroke_segment(&mut self, p0: Point, p1: Point, color: Color) {
        let round = |v: f64| -> i64 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "pixel coordinates are small integers"
            )]
            {
                (v + 0.5).clamp(-1.0e9, 1.0e9) as i64
            }
        };
        let (x0, y0, x1, y1) = (round(p0.x), round(p0.y), round(p1.x), round(p1.y));
        // Walk the line, recording the color per touched cell.
        let dx = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        for i in 0..=dx {
            let x = x0 + (x1 - x0) * i / dx;
            let y = y0 + (y1 - y0) * i / dx;
            self.mark_cell(x, y, color);
        }
        self.braille.line(x0, y0, x1, y1);
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color) {
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;
        kurbo::flatten(path.elements().iter().copied(), 0.3, |el| match el {
            PathEl::MoveTo(p) => {
                start = p;
                current = p;
            }
            PathEl::LineTo(p) => {
                self.stroke_segment(current, p, color);
                current = p;
            }
            PathEl::ClosePath => {
                self.stroke_segment(current, start, color);
                current = start;
            }
            _ => {}
        });
    }

    fn put_char(&mut self, cx: i64, cy: i64, ch: char, color: Color) {
        if cx < 0 || cy < 0 {
            return;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "checked non-negative cell coordinates"
        )]
        let (cx, cy) = (cx as usize, cy as usize);
        if cx < self.cols && cy < self.rows {
            self.chars[cy * self.cols + cx] = Some((ch, color));
        }
    }

    /// Renders the surface as text rows with ANSI color at the given
    /// depth.
    pub fn render(&self, depth: ColorDepth) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            let mut active: Option<Color> = None;
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                let (ch, color) = if let Some((ch, color)) = self.chars[idx] {
                    (ch, Some(color))
                } else if self.braille.cell_occupied(col, row) {
                    (self.braille.cell_char(col, row), self.stroke_colors[idx])
                } else {
                    (' ', None)
                };
                if color != active {
                    if let Some(c) = color {
                        out.push_str(&fg(c, depth));
                    } else if active.is_some() {
                        out.push_str(RESET);
                    }
                    active = color;
                }
                out.push(ch);
            }
            if active.is_some() {
                out.push_str(RESET);
            }
            out.push('\n');
        }
        out
    }

    /// Renders without any color sequences.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                let ch = if let Some((ch, _)) = self.chars[idx] {
                    ch
                } else if self.braille.cell_occupied(col, row) {
                    self.braille.cell_char(col, row)
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl RenderSink for TermSurface {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style) {
        let Some(color) = self.paint_color(style.fill) else {
            // Stroke-only rectangles rasterize as a braille outline.
            if let Some(stroke) = self.paint_color(style.stroke) {
                let mut p = BezPath::new();
                p.move_to((x, y));
                p.line_to((x + width, y));
                p.line_to((x + width, y + height));
                p.line_to((x, y + height));
                p.close_path();
                self.stroke_path(&p, stroke);
            }
            return;
        };
        let intensity = style.opacity.clamp(0.0, 1.0);
        let ch = shade(intensity);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "cell coordinates are small integers"
        )]
        let (c0, c1, r0, r1) = (
            (x / 2.0) as i64,
            ((x + width) / 2.0 - 0.5).max(0.0) as i64,
            (y / 4.0) as i64,
            ((y + height) / 4.0 - 0.25).max(0.0) as i64,
        );
        for cy in r0..=r1 {
            for cx in c0..=c1 {
                self.put_char(cx, cy, ch, color);
            }
        }
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        let color = self
            .paint_color(style.fill)
            .or_else(|| self.paint_color(style.stroke))
            .unwrap_or(css::WHITE);
        let circle = kurbo::Circle::new((cx, cy), r.max(0.5));
        let path: BezPath = kurbo::Shape::path_elements(&circle, 0.3).collect();
        self.stroke_path(&path, color);
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, style: &Style) {
        let color = self.paint_color(style.stroke).unwrap_or(css::WHITE);
        self.stroke_segment(Point::new(x0, y0), Point::new(x1, y1), color);
    }

    fn path(&mut self, path: &BezPath, style: &Style) {
        let color = self
            .paint_color(style.stroke)
            .or_else(|| self.paint_color(style.fill))
            .unwrap_or(css::WHITE);
        self.stroke_path(path, color);
    }

    fn polygon(&mut self, points: &[Point], style: &Style) {
        if points.len() < 2 {
            return;
        }
        let color = self
            .paint_color(style.stroke)
            .or_else(|| self.paint_color(style.fill))
            .unwrap_or(css::WHITE);
        for w in points.windows(2) {
            self.stroke_segment(w[0], w[1], color);
        }
        self.stroke_segment(points[points.len() - 1], points[0], color);
    }

    fn text(&mut self, content: &str, x: f64, y: f64, style: &Style) {
        let color = self.paint_color(style.fill).unwrap_or(css::WHITE);
        let len = content.chars().count() as i64;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "cell coordinates are small integers"
        )]
        let (mut cx, cy) = ((x / 2.0) as i64, (y / 4.0) as i64);
        match style.anchor {
            plottir_core::TextAnchor::Middle => cx -= len / 2,
            plottir_core::TextAnchor::End => cx -= len,
            plottir_core::TextAnchor::Start => {}
        }
        for (i, ch) in content.chars().enumerate() {
            self.put_char(cx + i as i64, cy, ch, color);
        }
    }

    fn linear_gradient(&mut self, id: GradientId, start: Color, end: Color, _angle: f64) {
        self.gradients.insert(id, (start, end));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use plottir_core::{Primitive, Style, emit_all};

    use super::*;

    #[test]
    fn lines_rasterize_into_braille_cells() {
        let mut surface = TermSurface::new(10, 4);
        surface.line(0.0, 0.0, 19.0, 15.0, &Style::stroke(css::WHITE, 1.0));
        let text = surface.render_plain();
        let braille = text
            .chars()
            .filter(|c| ('\u{2801}'..='\u{28ff}').contains(c))
            .count();
        assert!(braille > 0, "no braille cells in:\n{text}");
    }

    #[test]
    fn filled_rectangles_become_shade_blocks() {
        let mut surface = TermSurface::new(10, 4);
        surface.rectangle(0.0, 0.0, 8.0, 8.0, &Style::fill(css::RED));
        let text = surface.render_plain();
        assert!(text.contains('\u{2588}'), "missing full blocks in:\n{text}");
    }

    #[test]
    fn text_lands_in_the_character_layer() {
        let mut surface = TermSurface::new(10, 2);
        surface.text("hi", 0.0, 0.0, &Style::text(css::WHITE, 10.0));
        let text = surface.render_plain();
        assert!(text.contains("hi"));
    }

    #[test]
    fn truecolor_rendering_carries_rgb_sequences() {
        let mut surface = TermSurface::new(4, 1);
        surface.rectangle(0.0, 0.0, 8.0, 4.0, &Style::fill(css::RED));
        let out = surface.render(ColorDepth::TrueColor);
        assert!(out.contains("\x1b[38;2;255;0;0m"));
        assert!(out.contains(RESET));
    }

    #[test]
    fn gradient_fills_resolve_through_the_definition() {
        let mut surface = TermSurface::new(8, 2);
        let id = GradientId::mint();
        let prims = [
            Primitive::LinearGradient {
                id,
                start: css::BLACK,
                end: css::WHITE,
                angle: 90.0,
            },
            Primitive::Rect {
                x: 0.0,
                y: 0.0,
                width: 16.0,
                height: 8.0,
                style: Style::fill(plottir_core::Paint::Gradient(id)),
            },
        ];
        emit_all(&prims, &mut surface);
        let out = surface.render_plain();
        assert!(out.contains('\u{2588}'));
    }
}
