// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dendrogram chart adapter.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::dendrogram::dendrogram;
use crate::hierarchy::HierarchyNode;

/// A dendrogram chart over a cluster tree.
#[derive(Clone, Debug)]
pub struct DendrogramChart {
    root: HierarchyNode,
    leaf_labels: bool,
}

impl DendrogramChart {
    /// Creates a dendrogram chart.
    pub fn new(root: HierarchyNode) -> Self {
        Self {
            root,
            leaf_labels: true,
        }
    }

    /// Enables or disables the leaf labels.
    pub fn with_leaf_labels(mut self, leaf_labels: bool) -> Self {
        self.leaf_labels = leaf_labels;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let label_h = if self.leaf_labels { 16.0 } else { 0.0 };
        let plot = Rect::new(bounds.x0, bounds.y0, bounds.x1, bounds.y1 - label_h);
        let layout = dendrogram(&self.root, plot);
        if layout.points.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for seg in &layout.segments {
            out.push(Primitive::Line {
                x0: seg.p0.x,
                y0: seg.p0.y,
                x1: seg.p1.x,
                y1: seg.p1.y,
                style: Style::stroke(css::BLACK, 1.0),
            });
        }
        if self.leaf_labels {
            for p in layout.points.iter().filter(|p| p.node.is_leaf()) {
                out.push(Primitive::Text {
                    content: p.node.name.clone(),
                    x: p.pos.x,
                    y: plot.y1 + 4.0,
                    style: Style::text(css::BLACK, 10.0)
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Hanging),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn single_leaf_trees_draw_no_connectors() {
        let chart = DendrogramChart::new(HierarchyNode::leaf("x", 0.0)).with_leaf_labels(false);
        assert!(chart.primitives(Rect::new(0.0, 0.0, 200.0, 100.0)).is_empty());
    }

    #[test]
    fn connectors_and_labels_are_emitted() {
        let root = HierarchyNode::parent(
            "top",
            alloc::vec![HierarchyNode::leaf("a", 0.0), HierarchyNode::leaf("b", 0.0)],
        )
        .with_weight(1.0);
        let prims = DendrogramChart::new(root).primitives(Rect::new(0.0, 0.0, 200.0, 100.0));
        let lines = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count();
        let labels = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Text { .. }))
            .count();
        // One horizontal run plus two drops.
        assert_eq!(lines, 3);
        assert_eq!(labels, 2);
    }
}
