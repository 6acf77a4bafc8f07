// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circle-packing chart adapter.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

use crate::hierarchy::HierarchyNode;
use crate::pack::circle_pack;
use crate::scale_color::CategoricalColorScale;

/// A circle-packing chart over a hierarchy.
#[derive(Clone, Debug)]
pub struct PackChart {
    root: HierarchyNode,
}

impl PackChart {
    /// Creates a circle-packing chart.
    pub fn new(root: HierarchyNode) -> Self {
        Self { root }
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let radius = 0.48 * bounds.width().min(bounds.height());
        let circles = circle_pack(
            &self.root,
            bounds.x0 + 0.5 * bounds.width(),
            bounds.y0 + 0.5 * bounds.height(),
            radius,
        );
        if circles.is_empty() {
            return Vec::new();
        }
        let colors = CategoricalColorScale::with_default_palette(
            self.root.children.iter().map(|c| c.name.clone()),
        );

        let mut out = Vec::new();
        let mut top_name = "";
        for c in &circles {
            if c.depth == 1 {
                top_name = &c.node.name;
            }
            let style = if c.depth == 0 {
                Style::stroke(css::BLACK.with_alpha(0.3), 1.0)
            } else {
                let base = c.node.color.unwrap_or_else(|| colors.forward(top_name));
                Style::fill(base.with_alpha(if c.node.is_leaf() { 0.85 } else { 0.3 }))
            };
            out.push(Primitive::Circle {
                cx: c.cx,
                cy: c.cy,
                r: c.r,
                style,
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn zero_weight_hierarchies_yield_an_empty_stream() {
        let chart = PackChart::new(HierarchyNode::parent(
            "root",
            alloc::vec![HierarchyNode::leaf("a", 0.0)],
        ));
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 300.0)).is_empty());
    }

    #[test]
    fn one_circle_per_node_including_the_root() {
        let root = HierarchyNode::parent(
            "root",
            alloc::vec![HierarchyNode::leaf("a", 4.0), HierarchyNode::leaf("b", 1.0)],
        );
        let prims = PackChart::new(root).primitives(Rect::new(0.0, 0.0, 300.0, 300.0));
        let circles = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(circles, 3);
    }
}
