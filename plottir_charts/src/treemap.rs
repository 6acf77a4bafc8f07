// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The squarified treemap layout.
//!
//! Children are laid greedily into strips along the shorter remaining edge
//! of the parent rectangle; a strip keeps absorbing the next (heaviest)
//! child while its worst aspect ratio improves. Strip slots partition the
//! parent exactly; leaf rectangles are additionally shrunk by the padding.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::hierarchy::HierarchyNode;

/// A positioned treemap cell with a back-reference to its node.
#[derive(Clone, Copy, Debug)]
pub struct TreemapRect<'a> {
    /// The originating hierarchy node.
    pub node: &'a HierarchyNode,
    /// Depth below the root (the root itself is 0).
    pub depth: usize,
    /// The cell rectangle.
    pub rect: Rect,
}

/// Squarified treemap layout of `root` into `bounds`.
///
/// Emits one rectangle per node in pre-order (parents before children).
/// Zero-weight subtrees emit nothing; an empty or zero-weight root yields
/// an empty layout.
pub fn treemap<'a>(root: &'a HierarchyNode, bounds: Rect, padding: f64) -> Vec<TreemapRect<'a>> {
    let mut out = Vec::new();
    if root.value() <= 0.0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return out;
    }
    out.push(TreemapRect {
        node: root,
        depth: 0,
        rect: bounds,
    });
    layout_children(root, bounds, 0, padding, &mut out);
    out
}

/// Worst aspect ratio of a strip with weight `w` along length `l`, with
/// residual breadth `b` over residual total `t`.
fn strip_worst(l: f64, w: f64, t: f64, b: f64) -> f64 {
    let a = l * w;
    let c = t * b;
    if a <= 0.0 || c <= 0.0 {
        return f64::INFINITY;
    }
    (a / c).max(c / a)
}

fn shrink(rect: Rect, padding: f64) -> Rect {
    let p = padding.max(0.0);
    let px = p.min(0.5 * rect.width());
    let py = p.min(0.5 * rect.height());
    Rect::new(rect.x0 + px, rect.y0 + py, rect.x1 - px, rect.y1 - py)
}

fn layout_children<'a>(
    node: &'a HierarchyNode,
    rect: Rect,
    depth: usize,
    padding: f64,
    out: &mut Vec<TreemapRect<'a>>,
) {
    let mut items: Vec<&HierarchyNode> = node.children.iter().filter(|c| c.value() > 0.0).collect();
    if items.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        b.value()
            .partial_cmp(&a.value())
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut remaining: f64 = items.iter().map(|c| c.value()).sum();
    let mut residual = rect;
    let mut i = 0;

    while i < items.len() && remaining > 0.0 {
        // The strip runs along the shorter remaining edge.
        let across_width = residual.width() <= residual.height();
        let l = residual.width().min(residual.height());
        let b = residual.width().max(residual.height());

        let mut strip_weight = items[i].value();
        let mut j = i + 1;
        let mut worst = strip_worst(l, strip_weight, remaining, b);
        while j < items.len() {
            let candidate = strip_weight + items[j].value();
            let candidate_worst = strip_worst(l, candidate, remaining, b);
            if candidate_worst < worst {
                strip_weight = candidate;
                worst = candidate_worst;
                j += 1;
            } else {
                break;
            }
        }

        let thickness = b * strip_weight / remaining;
        let mut offset = 0.0;
        for item in &items[i..j] {
            let len = l * item.value() / strip_weight;
            let slot = if across_width {
                Rect::new(
                    residual.x0 + offset,
                    residual.y0,
                    residual.x0 + offset + len,
                    residual.y0 + thickness,
                )
            } else {
                Rect::new(
                    residual.x0,
                    residual.y0 + offset,
                    residual.x0 + thickness,
                    residual.y0 + offset + len,
                )
            };
            offset += len;

            let cell = if item.is_leaf() {
                shrink(slot, padding)
            } else {
                slot
            };
            out.push(TreemapRect {
                node: item,
                depth: depth + 1,
                rect: cell,
            });
            layout_children(item, slot, depth + 1, padding, out);
        }

        residual = if across_width {
            Rect::new(residual.x0, residual.y0 + thickness, residual.x1, residual.y1)
        } else {
            Rect::new(residual.x0 + thickness, residual.y0, residual.x1, residual.y1)
        };
        remaining -= strip_weight;
        i = j;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::hierarchy::HierarchyNode;

    fn flat(weights: &[f64]) -> HierarchyNode {
        HierarchyNode::parent(
            "root",
            weights
                .iter()
                .enumerate()
                .map(|(i, w)| HierarchyNode::leaf(alloc::format!("n{i}"), *w))
                .collect(),
        )
    }

    fn overlap(a: Rect, b: Rect) -> f64 {
        let w = (a.x1.min(b.x1) - a.x0.max(b.x0)).max(0.0);
        let h = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
        w * h
    }

    #[test]
    fn children_partition_the_parent_rectangle() {
        let root = flat(&[6.0, 3.0, 2.0, 1.0]);
        let bounds = Rect::new(0.0, 0.0, 120.0, 80.0);
        let cells = treemap(&root, bounds, 0.0);
        // Root plus four leaves.
        assert_eq!(cells.len(), 5);

        let leaves: Vec<&TreemapRect<'_>> = cells.iter().filter(|c| c.depth == 1).collect();
        let area: f64 = leaves.iter().map(|c| c.rect.area()).sum();
        assert!((area - bounds.area()).abs() < 1.0e-6);

        for (i, a) in leaves.iter().enumerate() {
            for b in &leaves[i + 1..] {
                assert!(overlap(a.rect, b.rect) < 1.0e-6, "cells overlap");
            }
            assert!(a.rect.x0 >= bounds.x0 - 1.0e-9 && a.rect.x1 <= bounds.x1 + 1.0e-9);
            assert!(a.rect.y0 >= bounds.y0 - 1.0e-9 && a.rect.y1 <= bounds.y1 + 1.0e-9);
        }
    }

    #[test]
    fn cell_areas_are_proportional_to_weights() {
        let root = flat(&[4.0, 2.0, 2.0]);
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let cells = treemap(&root, bounds, 0.0);
        let big = cells
            .iter()
            .find(|c| c.node.name == "n0")
            .expect("missing n0");
        assert!((big.rect.area() - 5000.0).abs() < 1.0e-6);
    }

    #[test]
    fn zero_weight_subtrees_emit_nothing() {
        let root = flat(&[0.0, 0.0]);
        assert!(treemap(&root, Rect::new(0.0, 0.0, 10.0, 10.0), 0.0).is_empty());

        let mixed = flat(&[5.0, 0.0]);
        let cells = treemap(&mixed, Rect::new(0.0, 0.0, 10.0, 10.0), 0.0);
        assert!(cells.iter().all(|c| c.node.name != "n1"));
    }

    #[test]
    fn padding_shrinks_leaf_cells() {
        let root = flat(&[1.0]);
        let cells = treemap(&root, Rect::new(0.0, 0.0, 100.0, 100.0), 4.0);
        let leaf = cells.iter().find(|c| c.depth == 1).expect("missing leaf");
        assert_eq!(leaf.rect, Rect::new(4.0, 4.0, 96.0, 96.0));
    }

    #[test]
    fn nested_children_stay_inside_their_parent() {
        let root = HierarchyNode::parent(
            "root",
            alloc::vec![
                HierarchyNode::parent(
                    "group",
                    alloc::vec![
                        HierarchyNode::leaf("x", 3.0),
                        HierarchyNode::leaf("y", 1.0),
                    ],
                ),
                HierarchyNode::leaf("z", 4.0),
            ],
        );
        let cells = treemap(&root, Rect::new(0.0, 0.0, 200.0, 100.0), 0.0);
        let group = cells
            .iter()
            .find(|c| c.node.name == "group")
            .expect("missing group");
        for name in ["x", "y"] {
            let cell = cells.iter().find(|c| c.node.name == name).expect("missing child");
            assert!(cell.rect.x0 >= group.rect.x0 - 1.0e-9);
            assert!(cell.rect.x1 <= group.rect.x1 + 1.0e-9);
            assert!(cell.rect.y0 >= group.rect.y0 - 1.0e-9);
            assert!(cell.rect.y1 <= group.rect.y1 + 1.0e-9);
            assert_eq!(cell.depth, 2);
        }
    }
}
