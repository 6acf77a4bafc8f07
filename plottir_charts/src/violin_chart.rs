// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Violin plots: a mirrored KDE silhouette per category.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use plottir_core::{Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};
use crate::scale_discrete::BandScale;
use crate::scale_color::default_palette;
use crate::stats::gaussian_kde;

/// A violin plot over labeled sample groups.
#[derive(Clone, Debug)]
pub struct ViolinChart {
    groups: Vec<(String, Vec<f64>)>,
    colors: Vec<Color>,
    tick_count: usize,
}

impl ViolinChart {
    /// Creates a violin plot.
    pub fn new(groups: Vec<(String, Vec<f64>)>) -> Self {
        let colors = default_palette(groups.len().max(1));
        Self {
            groups,
            colors,
            tick_count: 5,
        }
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let kdes: Vec<(&String, Vec<(f64, f64)>)> = self
            .groups
            .iter()
            .map(|(name, values)| (name, gaussian_kde(values, None)))
            .filter(|(_, kde)| !kde.is_empty())
            .collect();
        if kdes.is_empty() {
            return Vec::new();
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut dmax = 0.0_f64;
        for (_, kde) in &kdes {
            lo = lo.min(kde[0].0);
            hi = hi.max(kde[kde.len() - 1].0);
            dmax = dmax.max(kde.iter().map(|(_, d)| *d).fold(0.0, f64::max));
        }
        if dmax <= 0.0 {
            dmax = 1.0;
        }
        let categories: Vec<String> = kdes.iter().map(|(n, _)| (*n).clone()).collect();
        let tick_count = self.tick_count;
        let cats = categories.clone();

        let x_axis = move |range| {
            AxisSpec::bottom(BandScale::new(cats.clone(), range).with_padding(0.2, 0.1))
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((lo, hi), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let band = BandScale::new(categories.clone(), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)))
            .with_padding(0.2, 0.1);
        let ys = LinearScale::new((lo, hi), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        let half = 0.5 * band.bandwidth().value;
        for (i, (name, kde)) in kdes.iter().enumerate() {
            let cx = band.center(name).value;
            let mut points = Vec::with_capacity(2 * kde.len());
            // Right flank downward, then left flank back up.
            for (v, d) in kde {
                points.push(Point::new(cx + d / dmax * half, ys.forward(*v).value));
            }
            for (v, d) in kde.iter().rev() {
                points.push(Point::new(cx - d / dmax * half, ys.forward(*v).value));
            }
            let color = self.colors[i % self.colors.len()];
            out.push(Primitive::Polygon {
                points,
                style: Style::fill(color.with_alpha(0.6)).with_stroke(color, 1.0),
            });
        }
        out
    }
}
