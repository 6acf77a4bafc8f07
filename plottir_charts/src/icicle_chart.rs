// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The icicle chart adapter over the rectangular partition layout.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::hierarchy::HierarchyNode;
use crate::partition::{IcicleOrient, icicle};
use crate::scale_color::CategoricalColorScale;

/// An icicle chart over a hierarchy.
#[derive(Clone, Debug)]
pub struct IcicleChart {
    root: HierarchyNode,
    orient: IcicleOrient,
    labels: bool,
}

impl IcicleChart {
    /// Creates an icicle chart.
    pub fn new(root: HierarchyNode) -> Self {
        Self {
            root,
            orient: IcicleOrient::Horizontal,
            labels: true,
        }
    }

    /// Sets the strip direction.
    pub fn with_orient(mut self, orient: IcicleOrient) -> Self {
        self.orient = orient;
        self
    }

    /// Enables or disables cell labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let cells = icicle(&self.root, bounds, self.orient);
        if cells.is_empty() {
            return Vec::new();
        }
        let colors = CategoricalColorScale::with_default_palette(
            self.root.children.iter().map(|c| c.name.clone()),
        );

        let mut out = Vec::new();
        let mut top_name = "";
        for cell in &cells {
            if cell.depth == 1 {
                top_name = &cell.node.name;
            }
            let base = cell.node.color.unwrap_or_else(|| colors.forward(top_name));
            let fill = plottir_core::mix(
                base,
                css::WHITE,
                0.18 * (cell.depth - 1) as f64,
                plottir_core::GradientSpace::Oklch,
            );
            out.push(Primitive::Rect {
                x: cell.rect.x0,
                y: cell.rect.y0,
                width: cell.rect.width(),
                height: cell.rect.height(),
                style: Style::fill(fill).with_stroke(css::WHITE, 1.0),
            });
            if self.labels && cell.rect.width() > 30.0 && cell.rect.height() > 12.0 {
                out.push(Primitive::Text {
                    content: cell.node.name.clone(),
                    x: cell.rect.x0 + 0.5 * cell.rect.width(),
                    y: cell.rect.y0 + 0.5 * cell.rect.height(),
                    style: Style::text(css::BLACK, 10.0)
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
    fn leaf_roots_yield_an_empty_stream() {
        let chart = IcicleChart::new(HierarchyNode::leaf("only", 3.0));
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 200.0)).is_empty());
    }

    #[test]
    fn cells_render_for_both_orientations() {
        let root = HierarchyNode::parent(
            "root",
            alloc::vec![HierarchyNode::leaf("a", 1.0), HierarchyNode::leaf("b", 3.0)],
        );
        for orient in [IcicleOrient::Horizontal, IcicleOrient::Vertical] {
            let prims = IcicleChart::new(root.clone())
                .with_orient(orient)
                .with_labels(false)
                .primitives(Rect::new(0.0, 0.0, 300.0, 200.0));
            assert_eq!(prims.len(), 2, "orient {orient:?}");
        }
    }
}
