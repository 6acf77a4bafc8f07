// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weeks heatmaps: one cell per day, seven rows, one column per week.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::scale_color::SequentialColorScale;
use crate::time::Instant;

/// A calendar heatmap over `(day, value)` samples.
#[derive(Clone, Debug)]
pub struct WeeksHeatmapChart {
    days: Vec<(Instant, f64)>,
    low: Color,
    high: Color,
    cell_gap: f64,
}

impl WeeksHeatmapChart {
    /// Creates a weeks heatmap.
    pub fn new(days: Vec<(Instant, f64)>) -> Self {
        Self {
            days,
            low: css::HONEYDEW,
            high: css::DARK_GREEN,
            cell_gap: 2.0,
        }
    }

    /// Sets the color ramp endpoints.
    pub fn with_ramp(mut self, low: Color, high: Color) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let samples: Vec<(i64, f64)> = self
            .days
            .iter()
            .filter(|(t, v)| t.as_unix_seconds().is_finite() && v.is_finite())
            .map(|(t, v)| {
                let days = {
                    let d = (t.as_unix_seconds() / 86_400.0).floor().clamp(-9.0e15, 9.0e15);
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "clamped well inside the i64 range"
                    )]
                    {
                        d as i64
                    }
                };
                (days, *v)
            })
            .collect();
        if samples.is_empty() {
            return Vec::new();
        }

        let first_day = samples.iter().map(|(d, _)| *d).min().unwrap_or(0);
        // The epoch (1970-01-01) was a Thursday; weekday 0 is Sunday.
        let weekday = |d: i64| ((d + 4).rem_euclid(7)) as usize;
        let start = first_day - weekday(first_day) as i64;

        let last_day = samples.iter().map(|(d, _)| *d).max().unwrap_or(0);
        let weeks = ((last_day - start) / 7 + 1).max(1) as usize;

        let vmax = samples.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let colors = SequentialColorScale::new((0.0, if vmax > 0.0 { vmax } else { 1.0 }), self.low, self.high)
            .clamped(true);

        let cell_w = (bounds.width() - self.cell_gap * weeks as f64) / weeks as f64;
        let cell_h = (bounds.height() - self.cell_gap * 7.0) / 7.0;

        let mut out = Vec::new();
        for (day, value) in &samples {
            let week = ((day - start) / 7) as usize;
            let row = weekday(*day);
            let x = bounds.x0 + week as f64 * (cell_w + self.cell_gap);
            let y = bounds.y0 + row as f64 * (cell_h + self.cell_gap);
            out.push(Primitive::Rect {
                x,
                y,
                width: cell_w,
                height: cell_h,
                style: Style::fill(colors.forward(*value)),
            });
        }
        out
    }
}
