// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular barplots: bars bent into wedges around a ring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect, Shape};
use plottir_core::{Primitive, Style};

use crate::scale::{LinearScale, PowScale};
use crate::scale_color::CategoricalColorScale;

/// A circular barplot over labeled values.
#[derive(Clone, Debug)]
pub struct CircularBarChart {
    slices: Vec<(String, f64)>,
    /// Inner hole as a fraction of the outer radius.
    inner_fraction: f64,
    /// Use a square-root radial scale so areas track values.
    sqrt_radius: bool,
}

impl CircularBarChart {
    /// Creates a circular barplot.
    pub fn new(slices: Vec<(String, f64)>) -> Self {
        Self {
            slices,
            inner_fraction: 0.25,
            sqrt_radius: false,
        }
    }

    /// Uses a square-root radial scale instead of a linear one.
    pub fn with_sqrt_radius(mut self, sqrt_radius: bool) -> Self {
        self.sqrt_radius = sqrt_radius;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let slices: Vec<(&String, f64)> = self
            .slices
            .iter()
            .filter(|(_, v)| v.is_finite() && *v > 0.0)
            .map(|(n, v)| (n, *v))
            .collect();
        if slices.is_empty() {
            return Vec::new();
        }
        let vmax = slices.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let vmax = if vmax > 0.0 { vmax } else { 1.0 };

        let center = Point::new(bounds.x0 + 0.5 * bounds.width(), bounds.y0 + 0.5 * bounds.height());
        let outer = 0.48 * bounds.width().min(bounds.height());
        let inner = outer * self.inner_fraction;
        let radial_range = (plottir_core::px(inner), plottir_core::px(outer));
        let radial = |v: f64| {
            if self.sqrt_radius {
                PowScale::sqrt((0.0, vmax), radial_range).forward(v).value
            } else {
                LinearScale::new((0.0, vmax), radial_range).forward(v).value
            }
        };

        let colors = CategoricalColorScale::with_default_palette(
            slices.iter().map(|(n, _)| (*n).clone()),
        );
        let tau = 2.0 * core::f64::consts::PI;
        let step = tau / slices.len() as f64;
        let gap = step * 0.1;

        let mut out = Vec::new();
        for (i, (name, value)) in slices.iter().enumerate() {
            let r = radial(*value);
            let start = -core::f64::consts::FRAC_PI_2 + i as f64 * step;
            let circle = Circle::new(center, r);
            let segment = circle.segment(inner, start, step - gap);
            out.push(Primitive::Path {
                path: segment.path_elements(0.1).collect(),
                style: Style::fill(colors.forward(name)),
            });
        }
        out
    }
}
