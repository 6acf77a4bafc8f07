// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histograms with automatic (Sturges) or fixed-width binning.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};

/// A histogram over raw sample values.
#[derive(Clone, Debug)]
pub struct HistogramChart {
    values: Vec<f64>,
    bin_width: Option<f64>,
    color: Color,
    tick_count: usize,
}

impl HistogramChart {
    /// Creates a histogram with automatic (Sturges) binning.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            bin_width: None,
            color: css::MEDIUM_SEA_GREEN,
            tick_count: 5,
        }
    }

    /// Uses a fixed bin width instead of automatic binning.
    pub fn with_bin_width(mut self, bin_width: f64) -> Self {
        if bin_width.is_finite() && bin_width > 0.0 {
            self.bin_width = Some(bin_width);
        }
        self
    }

    /// Sets the bar color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns `(bin_start, count)` pairs covering the data range.
    fn bins(&self) -> Vec<(f64, usize)> {
        let finite: Vec<f64> = self.values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Vec::new();
        }
        let lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = hi - lo;
        let width = match self.bin_width {
            Some(w) => w,
            None => {
                // Sturges: ceil(log2 n) + 1 bins.
                let k = (finite.len() as f64).log10() / 2.0_f64.log10();
                let bins = k.ceil() + 1.0;
                if span > 0.0 { span / bins } else { 1.0 }
            }
        };
        let count = if span > 0.0 {
            let c = (span / width).ceil();
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "positive and clamped to a sane bin count"
            )]
            {
                (c.clamp(1.0, 10_000.0)) as usize
            }
        } else {
            1
        };

        let mut bins = alloc::vec![0_usize; count];
        for v in &finite {
            let idx = if span > 0.0 {
                let i = ((v - lo) / width).floor();
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "clamped to the bin range"
                )]
                {
                    (i.clamp(0.0, (count - 1) as f64)) as usize
                }
            } else {
                0
            };
            bins[idx] += 1;
        }
        bins.into_iter()
            .enumerate()
            .map(|(i, c)| (lo + i as f64 * width, c))
            .collect()
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let bins = self.bins();
        if bins.is_empty() {
            return Vec::new();
        }
        let width = if bins.len() > 1 {
            bins[1].0 - bins[0].0
        } else {
            1.0
        };
        let x0 = bins[0].0;
        let x1 = bins[bins.len() - 1].0 + width;
        let cmax = bins.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f64;
        let tick_count = self.tick_count;

        let x_axis = move |range| {
            AxisSpec::bottom(ContinuousScale::Linear(LinearScale::new((x0, x1), range)))
                .with_tick_count(tick_count)
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((0.0, cmax), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let xs = LinearScale::new((x0, x1), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)));
        let ys = LinearScale::new((0.0, cmax), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        let y_base = ys.forward(0.0).value;
        for (start, count) in &bins {
            if *count == 0 {
                continue;
            }
            let bar_x0 = xs.forward(*start).value;
            let bar_x1 = xs.forward(start + width).value;
            let top = ys.forward(*count as f64).value;
            out.push(Primitive::Rect {
                x: bar_x0,
                y: top,
                width: (bar_x1 - bar_x0 - 1.0).max(1.0),
                height: y_base - top,
                style: Style::fill(self.color),
            });
        }
        out
    }
}
