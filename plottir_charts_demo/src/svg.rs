// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal SVG sink for `plottir_charts_demo`.

use kurbo::{BezPath, Point};
use peniko::Color;
use plottir_core::{GradientId, Paint, RenderSink, Style, TextAnchor, TextBaseline};

/// Collects primitives into an SVG document body.
#[derive(Debug)]
pub(crate) struct SvgSink {
    width: f64,
    height: f64,
    defs: String,
    body: String,
}

impl SvgSink {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
        }
    }

    pub(crate) fn finish(self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn paint_attr(&self, name: &str, paint: Option<Paint>, opacity: f64) -> String {
        match paint {
            None => format!(r#" {name}="none""#),
            Some(Paint::Solid(color)) => {
                let mut attr = format!(r#" {name}="{}""#, hex_rgb(color));
                let alpha = f64::from(color.components[3]) * opacity;
                if alpha < 1.0 {
                    attr.push_str(&format!(r#" {name}-opacity="{alpha:.3}""#));
                }
                attr
            }
            Some(Paint::Gradient(id)) => format!(r#" {name}="url(#g{})""#, id.0),
        }
    }

    fn shape_attrs(&self, style: &Style) -> String {
        let mut out = self.paint_attr("fill", style.fill, style.opacity);
        if style.stroke.is_some() && style.stroke_width > 0.0 {
            out.push_str(&self.paint_attr("stroke", style.stroke, style.opacity));
            out.push_str(&format!(r#" stroke-width="{}""#, style.stroke_width));
        }
        out
    }
}

fn hex_rgb(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl RenderSink for SvgSink {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style) {
        self.body.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}"{}/>"#,
            self.shape_attrs(style)
        ));
        self.body.push('\n');
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        self.body.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}"{}/>"#,
            self.shape_attrs(style)
        ));
        self.body.push('\n');
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, style: &Style) {
        let mut attrs = self.paint_attr("stroke", style.stroke, style.opacity);
        attrs.push_str(&format!(r#" stroke-width="{}""#, style.stroke_width));
        self.body.push_str(&format!(
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}"{attrs}/>"#
        ));
        self.body.push('\n');
    }

    fn path(&mut self, path: &BezPath, style: &Style) {
        self.body.push_str(&format!(
            r#"<path d="{}"{}/>"#,
            path.to_svg(),
            self.shape_attrs(style)
        ));
        self.body.push('\n');
    }

    fn polygon(&mut self, points: &[Point], style: &Style) {
        let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
        self.body.push_str(&format!(
            r#"<polygon points="{}"{}/>"#,
            pts.join(" "),
            self.shape_attrs(style)
        ));
        self.body.push('\n');
    }

    fn text(&mut self, content: &str, x: f64, y: f64, style: &Style) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let baseline = match style.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
            TextBaseline::Hanging => "hanging",
        };
        self.body.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="{}" font-family="sans-serif" text-anchor="{anchor}" dominant-baseline="{baseline}"{}>{}</text>"#,
            style.font_size,
            self.paint_attr("fill", style.fill, style.opacity),
            escape_xml(content)
        ));
        self.body.push('\n');
    }

    fn linear_gradient(&mut self, id: GradientId, start: Color, end: Color, angle: f64) {
        // Map the angle to unit gradient vector endpoints.
        let rad = angle.to_radians();
        let (dx, dy) = (rad.cos(), rad.sin());
        let (x1, y1) = (0.5 - 0.5 * dx, 0.5 - 0.5 * dy);
        let (x2, y2) = (0.5 + 0.5 * dx, 0.5 + 0.5 * dy);
        self.defs.push_str(&format!(
            concat!(
                r#"<linearGradient id="g{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                r#"<stop offset="0" stop-color="{}" stop-opacity="{}"/>"#,
                r#"<stop offset="1" stop-color="{}" stop-opacity="{}"/>"#,
                "</linearGradient>\n",
            ),
            id.0,
            x1,
            y1,
            x2,
            y2,
            hex_rgb(start),
            f64::from(start.components[3]),
            hex_rgb(end),
            f64::from(end.components[3]),
        ));
    }
}
