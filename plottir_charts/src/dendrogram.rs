// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dendrogram placement.
//!
//! Leaves get sequentially spaced x positions; every node's y comes from
//! its height attribute (the node weight) normalized against the tree
//! maximum, so the root sits at the top and zero-height leaves at the
//! bottom. Internal nodes sit at the mean x of their children. Connectors
//! are orthogonal: a horizontal run at the parent's height with vertical
//! drops to each child.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use smallvec::SmallVec;

use crate::hierarchy::HierarchyNode;

/// A positioned dendrogram node.
#[derive(Clone, Copy, Debug)]
pub struct DendrogramPoint<'a> {
    /// The originating hierarchy node.
    pub node: &'a HierarchyNode,
    /// Position of the node.
    pub pos: Point,
}

/// A laid-out dendrogram: node positions plus orthogonal connectors.
#[derive(Clone, Debug)]
pub struct DendrogramLayout<'a> {
    /// One entry per node, leaves and internals alike.
    pub points: Vec<DendrogramPoint<'a>>,
    /// Connector segments in draw order.
    pub segments: Vec<Line>,
}

/// Lays out `root` inside `bounds`.
pub fn dendrogram<'a>(root: &'a HierarchyNode, bounds: Rect) -> DendrogramLayout<'a> {
    let mut layout = DendrogramLayout {
        points: Vec::new(),
        segments: Vec::new(),
    };
    let leaves = root.leaf_count();
    if leaves == 0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return layout;
    }
    let max_height = max_weight(root).max(1.0e-12);
    let slot = bounds.width() / leaves as f64;
    let mut next_leaf = 0_usize;
    place(root, bounds, slot, max_height, &mut next_leaf, &mut layout);
    layout
}

fn max_weight(node: &HierarchyNode) -> f64 {
    node.children
        .iter()
        .map(max_weight)
        .fold(node.weight, f64::max)
}

/// Places `node` and returns its x position.
fn place<'a>(
    node: &'a HierarchyNode,
    bounds: Rect,
    slot: f64,
    max_height: f64,
    next_leaf: &mut usize,
    layout: &mut DendrogramLayout<'a>,
) -> f64 {
    let y = bounds.y0 + (1.0 - node.weight / max_height) * bounds.height();
    if node.is_leaf() {
        let x = bounds.x0 + (*next_leaf as f64 + 0.5) * slot;
        *next_leaf += 1;
        layout.points.push(DendrogramPoint {
            node,
            pos: Point::new(x, y),
        });
        return x;
    }

    let mut child_anchors: SmallVec<[(f64, f64); 4]> = SmallVec::new();
    for child in &node.children {
        let child_x = place(child, bounds, slot, max_height, next_leaf, layout);
        let child_y = bounds.y0 + (1.0 - child.weight / max_height) * bounds.height();
        child_anchors.push((child_x, child_y));
    }

    let x = child_anchors.iter().map(|(cx, _)| cx).sum::<f64>() / child_anchors.len() as f64;
    layout.points.push(DendrogramPoint {
        node,
        pos: Point::new(x, y),
    });

    let min_x = child_anchors.iter().map(|(cx, _)| *cx).fold(f64::INFINITY, f64::min);
    let max_x = child_anchors
        .iter()
        .map(|(cx, _)| *cx)
        .fold(f64::NEG_INFINITY, f64::max);
    layout
        .segments
        .push(Line::new((min_x, y), (max_x, y)));
    for (cx, cy) in child_anchors {
        layout.segments.push(Line::new((cx, y), (cx, cy)));
    }
    x
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn cluster() -> HierarchyNode {
        // A two-merge cluster tree: heights 2.0 and 1.0, leaves at 0.
        HierarchyNode::parent(
            "top",
            alloc::vec![
                HierarchyNode::parent(
                    "inner",
                    alloc::vec![HierarchyNode::leaf("a", 0.0), HierarchyNode::leaf("b", 0.0)],
                )
                .with_weight(1.0),
                HierarchyNode::leaf("c", 0.0),
            ],
        )
        .with_weight(2.0)
    }

    #[test]
    fn leaves_are_sequentially_spaced_at_the_bottom() {
        let root = cluster();
        let layout = dendrogram(&root, Rect::new(0.0, 0.0, 90.0, 100.0));
        let xs: Vec<f64> = ["a", "b", "c"]
            .iter()
            .map(|n| {
                layout
                    .points
                    .iter()
                    .find(|p| p.node.name == *n)
                    .expect("missing leaf")
                    .pos
                    .x
            })
            .collect();
        assert_eq!(xs, alloc::vec![15.0, 45.0, 75.0]);
        for name in ["a", "b", "c"] {
            let p = layout.points.iter().find(|p| p.node.name == name).expect("leaf");
            assert_eq!(p.pos.y, 100.0);
        }
    }

    #[test]
    fn internal_nodes_sit_at_the_mean_of_their_children() {
        let root = cluster();
        let layout = dendrogram(&root, Rect::new(0.0, 0.0, 90.0, 100.0));
        let inner = layout
            .points
            .iter()
            .find(|p| p.node.name == "inner")
            .expect("missing inner");
        assert_eq!(inner.pos.x, 30.0);
        // Height 1.0 of max 2.0 puts it at the vertical midpoint.
        assert_eq!(inner.pos.y, 50.0);
        let top = layout.points.iter().find(|p| p.node.name == "top").expect("missing top");
        assert_eq!(top.pos.y, 0.0);
    }

    #[test]
    fn connectors_are_orthogonal() {
        let root = cluster();
        let layout = dendrogram(&root, Rect::new(0.0, 0.0, 90.0, 100.0));
        assert!(!layout.segments.is_empty());
        for seg in &layout.segments {
            let horizontal = (seg.p0.y - seg.p1.y).abs() < 1.0e-9;
            let vertical = (seg.p0.x - seg.p1.x).abs() < 1.0e-9;
            assert!(horizontal || vertical, "diagonal connector");
        }
    }
}
