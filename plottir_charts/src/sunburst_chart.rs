// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sunburst chart adapter over the radial partition layout.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect, Shape};
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

use crate::hierarchy::HierarchyNode;
use crate::partition::sunburst;
use crate::scale_color::CategoricalColorScale;

/// A sunburst chart over a hierarchy.
#[derive(Clone, Debug)]
pub struct SunburstChart {
    root: HierarchyNode,
    tolerance: f64,
}

impl SunburstChart {
    /// Creates a sunburst chart.
    pub fn new(root: HierarchyNode) -> Self {
        Self {
            root,
            tolerance: 0.1,
        }
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let radius = 0.48 * bounds.width().min(bounds.height());
        let arcs = sunburst(&self.root, radius);
        if arcs.is_empty() {
            return Vec::new();
        }
        let center = Point::new(bounds.x0 + 0.5 * bounds.width(), bounds.y0 + 0.5 * bounds.height());
        let colors = CategoricalColorScale::with_default_palette(
            self.root.children.iter().map(|c| c.name.clone()),
        );

        let mut out = Vec::new();
        let mut top_name = "";
        for arc in &arcs {
            if arc.depth == 1 {
                top_name = &arc.node.name;
            }
            let base = arc.node.color.unwrap_or_else(|| colors.forward(top_name));
            // Deeper rings fade toward white.
            let fill = plottir_core::mix(
                base,
                css::WHITE,
                0.18 * (arc.depth - 1) as f64,
                plottir_core::GradientSpace::Oklch,
            );
            let circle = Circle::new(center, arc.outer_radius);
            let segment = circle.segment(
                arc.inner_radius,
                arc.start_angle,
                arc.end_angle - arc.start_angle,
            );
            out.push(Primitive::Path {
                path: segment.path_elements(self.tolerance).collect(),
                style: Style::fill(fill).with_stroke(css::WHITE, 1.0),
            });
        }
        out
    }
}
