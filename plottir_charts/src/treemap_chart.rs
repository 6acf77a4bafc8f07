// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The treemap chart adapter over the squarified layout.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::hierarchy::HierarchyNode;
use crate::scale_color::CategoricalColorScale;
use crate::treemap::treemap;

/// A treemap chart over a hierarchy.
#[derive(Clone, Debug)]
pub struct TreemapChart {
    root: HierarchyNode,
    padding: f64,
    labels: bool,
}

impl TreemapChart {
    /// Creates a treemap chart.
    pub fn new(root: HierarchyNode) -> Self {
        Self {
            root,
            padding: 2.0,
            labels: true,
        }
    }

    /// Sets the per-leaf padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Enables or disables leaf labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let cells = treemap(&self.root, bounds, self.padding);
        if cells.is_empty() {
            return Vec::new();
        }
        // Top-level children pick the palette; descendants inherit.
        let colors = CategoricalColorScale::with_default_palette(
            self.root.children.iter().map(|c| c.name.clone()),
        );

        let mut out = Vec::new();
        let mut branch: Vec<&str> = Vec::new();
        for cell in cells.iter().filter(|c| c.depth >= 1) {
            if cell.depth == 1 {
                branch.clear();
                branch.push(&cell.node.name);
            }
            if !cell.node.is_leaf() {
                continue;
            }
            let top = if cell.depth == 1 {
                &cell.node.name
            } else {
                branch.last().copied().unwrap_or(&cell.node.name)
            };
            let fill = cell.node.color.unwrap_or_else(|| colors.forward(top));
            out.push(Primitive::Rect {
                x: cell.rect.x0,
                y: cell.rect.y0,
                width: cell.rect.width(),
                height: cell.rect.height(),
                style: Style::fill(fill).with_stroke(css::WHITE, 1.0),
            });
            if self.labels && cell.rect.width() > 30.0 && cell.rect.height() > 14.0 {
                out.push(Primitive::Text {
                    content: cell.node.name.clone(),
                    x: cell.rect.x0 + 0.5 * cell.rect.width(),
                    y: cell.rect.y0 + 0.5 * cell.rect.height(),
                    style: Style::text(css::WHITE, 10.0)
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Middle),
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
    fn empty_hierarchies_yield_an_empty_stream() {
        let chart = TreemapChart::new(HierarchyNode::parent("root", Vec::new()));
        assert!(chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0)).is_empty());
    }

    #[test]
    fn leaves_render_as_rectangles() {
        let root = HierarchyNode::parent(
            "root",
            alloc::vec![
                HierarchyNode::leaf("a", 4.0),
                HierarchyNode::leaf("b", 2.0),
                HierarchyNode::leaf("c", 1.0),
            ],
        );
        let prims = TreemapChart::new(root)
            .with_labels(false)
            .primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        let rects = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .count();
        assert_eq!(rects, 3);
    }
}
