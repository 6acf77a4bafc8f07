// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis primitive generation.
//!
//! An axis consumes a scale and an orientation and produces tick rules,
//! tick labels, an optional grid, the domain line and an optional title.
//! The axis never invents numbers: it asks the scale for ticks and maps
//! each tick through the scale, so the scale's range must already match
//! the plot rectangle the axis is drawn against.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::format::{format_log_tick, format_tick_with_step};
use crate::measure::TextMeasurer;
use crate::scale::{ContinuousScale, ScaleKind};
use crate::scale_discrete::{BandScale, PointScale};
use crate::time::{TimeBucket, format_time};

/// A color + width pair for stroked rules (domain lines, ticks, gridlines).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in range units.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill for tick labels.
    pub label_fill: Color,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill for the axis title.
    pub title_fill: Color,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            rule,
            label_fill: rule.color,
            label_font_size: 10.0,
            title_fill: rule.color,
            title_font_size: 11.0,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::BLACK.with_alpha(40.0 / 255.0), 1.0),
        }
    }
}

/// Axis placement relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis above the plot.
    Top,
    /// A horizontal axis below the plot.
    Bottom,
    /// A vertical axis to the left of the plot.
    Left,
    /// A vertical axis to the right of the plot.
    Right,
}

/// Any scale an axis can be driven by.
#[derive(Clone, Debug)]
pub enum AxisScale {
    /// A continuous scale (linear, log, pow, time).
    Continuous(ContinuousScale),
    /// A band scale; ticks sit at band centers.
    Band(BandScale),
    /// A point scale; ticks sit at the points.
    Point(PointScale),
}

impl From<ContinuousScale> for AxisScale {
    fn from(value: ContinuousScale) -> Self {
        Self::Continuous(value)
    }
}

impl From<BandScale> for AxisScale {
    fn from(value: BandScale) -> Self {
        Self::Band(value)
    }
}

impl From<PointScale> for AxisScale {
    fn from(value: PointScale) -> Self {
        Self::Point(value)
    }
}

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// The scale driving tick positions and labels.
    pub scale: AxisScale,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks (continuous scales only).
    pub tick_count: usize,
    /// Tick rule length; direction depends on `orient`.
    pub tick_size: f64,
    /// Whether to draw tick rules.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Extra padding between the ticks and tick labels.
    pub label_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional gridline styling; gridlines span the plot area.
    pub grid: Option<GridStyle>,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Distance from tick labels to the title.
    pub title_offset: f64,
    /// Optional tick label formatter `(value, step) -> label`.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("tick_padding", &self.tick_padding)
            .field("label_padding", &self.label_padding)
            .field("style", &self.style)
            .field("grid", &self.grid)
            .field("title", &self.title)
            .field("title_offset", &self.title_offset)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis specification with sensible defaults.
    pub fn new(scale: impl Into<AxisScale>, orient: AxisOrient) -> Self {
        let tick_padding = match orient {
            AxisOrient::Top | AxisOrient::Bottom => 8.0,
            AxisOrient::Left | AxisOrient::Right => 6.0,
        };
        Self {
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 5.0,
            ticks: true,
            labels: true,
            show_domain: true,
            tick_padding,
            label_padding: 0.0,
            style: AxisStyle::default(),
            grid: None,
            title: None,
            title_offset: 10.0,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(scale: impl Into<AxisScale>) -> Self {
        Self::new(scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `top` axis.
    pub fn top(scale: impl Into<AxisScale>) -> Self {
        Self::new(scale, AxisOrient::Top)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(scale: impl Into<AxisScale>) -> Self {
        Self::new(scale, AxisOrient::Left)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right(scale: impl Into<AxisScale>) -> Self {
        Self::new(scale, AxisOrient::Right)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set the tick rule length.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enable or disable tick rules.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the axis domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set tick padding.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        if let Some(f) = &self.tick_formatter {
            return (f)(v, step);
        }
        match &self.scale {
            AxisScale::Continuous(s) => match s.kind() {
                ScaleKind::Time => {
                    let bucket = match s {
                        ContinuousScale::Time(t) => t.ticks_with_bucket(self.tick_count).1,
                        _ => TimeBucket::Seconds,
                    };
                    format_time(v, bucket)
                }
                ScaleKind::Log => format_log_tick(v),
                _ => format_tick_with_step(v, step),
            },
            _ => format_tick_with_step(v, step),
        }
    }

    /// Returns `(position, label)` pairs in range coordinates.
    fn tick_items(&self) -> Vec<(f64, String)> {
        match &self.scale {
            AxisScale::Continuous(s) => {
                let ticks = s.ticks(self.tick_count);
                let step = min_tick_delta(&ticks);
                ticks
                    .iter()
                    .map(|v| (s.forward(*v).value, self.format_tick(*v, step)))
                    .collect()
            }
            AxisScale::Band(b) => b
                .domain()
                .iter()
                .map(|c| (b.center(c).value, c.clone()))
                .collect(),
            AxisScale::Point(p) => p
                .domain()
                .iter()
                .map(|c| (p.forward(c).value, c.clone()))
                .collect(),
        }
    }

    /// Range positions of the continuous domain endpoints, if any.
    fn domain_endpoints(&self) -> Option<(f64, f64)> {
        match &self.scale {
            AxisScale::Continuous(s) => {
                let (d0, d1) = s.domain();
                Some((s.forward(d0).value, s.forward(d1).value))
            }
            AxisScale::Band(_) | AxisScale::Point(_) => None,
        }
    }

    /// Measure the thickness this axis needs along its normal direction.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let tick_extent = if self.ticks { self.tick_size.abs() } else { 0.0 };
        let label_gap = self.tick_padding.max(0.0) + self.label_padding.max(0.0);
        let horizontal = matches!(self.orient, AxisOrient::Top | AxisOrient::Bottom);

        let mut label_extent = 0.0_f64;
        if self.labels {
            for (_pos, label) in self.tick_items() {
                let (w, h) = measurer.measure(&label, self.style.label_font_size);
                label_extent = label_extent.max(if horizontal { h } else { w });
            }
        }
        let label_thickness = if self.labels && label_extent > 0.0 {
            label_gap + label_extent
        } else {
            0.0
        };

        let mut out = tick_extent + label_thickness;
        if let Some(title) = &self.title {
            let (w, h) = measurer.measure(title, self.style.title_font_size);
            out += self.title_offset.max(0.0) + if horizontal { h } else { w };
        }
        out
    }

    /// Generate axis primitives for the given plot rectangle and the
    /// rectangle reserved for this axis (adjacent to `plot`).
    pub fn primitives(&self, plot: Rect, axis_rect: Rect) -> Vec<Primitive> {
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let label_gap = (self.tick_padding + self.label_padding).max(0.0);
        let horizontal = matches!(self.orient, AxisOrient::Top | AxisOrient::Bottom);
        let (lo, hi) = if horizontal {
            (plot.x0, plot.x1)
        } else {
            (plot.y0, plot.y1)
        };

        let items = self.tick_items();
        let eps = 1.0e-9;
        let in_plot = |p: f64| p >= lo - eps && p <= hi + eps;

        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            let stroke = Style::stroke(grid.stroke.color, grid.stroke.stroke_width);
            let mut grid_positions: Vec<f64> =
                items.iter().map(|(p, _)| *p).filter(|p| in_plot(*p)).collect();
            // Domain endpoints always get a grid line, even when the tick
            // generator skips them.
            if let Some((p0, p1)) = self.domain_endpoints() {
                for p in [p0, p1] {
                    if in_plot(p) && !grid_positions.iter().any(|g| (g - p).abs() <= eps) {
                        grid_positions.push(p);
                    }
                }
            }
            for p in grid_positions {
                out.push(if horizontal {
                    Primitive::Line {
                        x0: p,
                        y0: plot.y0,
                        x1: p,
                        y1: plot.y1,
                        style: stroke.clone(),
                    }
                } else {
                    Primitive::Line {
                        x0: plot.x0,
                        y0: p,
                        x1: plot.x1,
                        y1: p,
                        style: stroke.clone(),
                    }
                });
            }
        }

        let rule = Style::stroke(self.style.rule.color, self.style.rule.stroke_width);
        // The edge of the plot this axis hugs, and the outward direction.
        let (edge, dir) = match self.orient {
            AxisOrient::Top => (plot.y0, -1.0),
            AxisOrient::Bottom => (plot.y1, 1.0),
            AxisOrient::Left => (plot.x0, -1.0),
            AxisOrient::Right => (plot.x1, 1.0),
        };

        if self.show_domain {
            out.push(if horizontal {
                Primitive::Line {
                    x0: plot.x0,
                    y0: edge,
                    x1: plot.x1,
                    y1: edge,
                    style: rule.clone(),
                }
            } else {
                Primitive::Line {
                    x0: edge,
                    y0: plot.y0,
                    x1: edge,
                    y1: plot.y1,
                    style: rule.clone(),
                }
            });
        }

        let items_len = items.len();
        for (i, (p, label)) in items.into_iter().enumerate() {
            if !in_plot(p) {
                continue;
            }

            if self.ticks {
                out.push(if horizontal {
                    Primitive::Line {
                        x0: p,
                        y0: edge,
                        x1: p,
                        y1: edge + dir * tick_size,
                        style: rule.clone(),
                    }
                } else {
                    Primitive::Line {
                        x0: edge,
                        y0: p,
                        x1: edge + dir * tick_size,
                        y1: p,
                        style: rule.clone(),
                    }
                });
            }

            if self.labels {
                let style = Style::text(self.style.label_fill, self.style.label_font_size);
                let offset = tick_extent + label_gap;
                out.push(if horizontal {
                    // Clamp the first and last labels so they stay inside
                    // the plot span.
                    let (anchor, x) = if i == 0 {
                        (TextAnchor::Start, p.clamp(plot.x0, plot.x1))
                    } else if i + 1 == items_len {
                        (TextAnchor::End, p.clamp(plot.x0, plot.x1))
                    } else {
                        (TextAnchor::Middle, p)
                    };
                    let baseline = if dir > 0.0 {
                        TextBaseline::Hanging
                    } else {
                        TextBaseline::Alphabetic
                    };
                    Primitive::Text {
                        content: label,
                        x,
                        y: edge + dir * offset,
                        style: style.with_anchor(anchor).with_baseline(baseline),
                    }
                } else {
                    let anchor = if dir > 0.0 {
                        TextAnchor::Start
                    } else {
                        TextAnchor::End
                    };
                    Primitive::Text {
                        content: label,
                        x: edge + dir * offset,
                        y: p,
                        style: style.with_anchor(anchor).with_baseline(TextBaseline::Middle),
                    }
                });
            }
        }

        if let Some(title) = &self.title {
            let style = Style::text(self.style.title_fill, self.style.title_font_size);
            // The title sits in the strip at the outer edge of `axis_rect`,
            // which `measure` reserved beyond the tick labels.
            out.push(match self.orient {
                AxisOrient::Bottom => Primitive::Text {
                    content: title.clone(),
                    x: 0.5 * (plot.x0 + plot.x1),
                    y: axis_rect.y1,
                    style: style
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Alphabetic),
                },
                AxisOrient::Top => Primitive::Text {
                    content: title.clone(),
                    x: 0.5 * (plot.x0 + plot.x1),
                    y: axis_rect.y0,
                    style: style
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Hanging),
                },
                AxisOrient::Left => Primitive::Text {
                    content: title.clone(),
                    x: axis_rect.x0,
                    y: 0.5 * (plot.y0 + plot.y1),
                    style: style
                        .with_anchor(TextAnchor::Start)
                        .with_baseline(TextBaseline::Middle),
                },
                AxisOrient::Right => Primitive::Text {
                    content: title.clone(),
                    x: axis_rect.x1,
                    y: 0.5 * (plot.y0 + plot.y1),
                    style: style
                        .with_anchor(TextAnchor::End)
                        .with_baseline(TextBaseline::Middle),
                },
            });
        }

        out
    }
}

fn min_tick_delta(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}
