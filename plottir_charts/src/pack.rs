// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle packing.
//!
//! Radii are proportional to the square root of aggregate weight. Placement
//! is deliberately simple: the heaviest child sits at the parent's center
//! and the rest are arranged on a ring around it, scaled so the ring stays
//! inside the parent. The placement is visibly suboptimal beyond roughly
//! eight children; that is the accepted behavior.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::hierarchy::HierarchyNode;

/// A positioned circle with a back-reference to its node.
#[derive(Clone, Copy, Debug)]
pub struct PackCircle<'a> {
    /// The originating hierarchy node.
    pub node: &'a HierarchyNode,
    /// Depth below the root (the root itself is 0).
    pub depth: usize,
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Radius.
    pub r: f64,
}

/// Packs `root` into a circle at `(cx, cy)` with the given radius.
///
/// Emits the root circle plus one circle per positive-weight descendant,
/// in pre-order. Zero aggregate weight yields an empty layout.
pub fn circle_pack<'a>(
    root: &'a HierarchyNode,
    cx: f64,
    cy: f64,
    radius: f64,
) -> Vec<PackCircle<'a>> {
    let mut out = Vec::new();
    if root.value() <= 0.0 || radius <= 0.0 {
        return out;
    }
    out.push(PackCircle {
        node: root,
        depth: 0,
        cx,
        cy,
        r: radius,
    });
    pack_children(root, 0, cx, cy, radius, &mut out);
    out
}

fn pack_children<'a>(
    node: &'a HierarchyNode,
    depth: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    out: &mut Vec<PackCircle<'a>>,
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

    // Unit radii proportional to the square root of weight.
    let units: Vec<f64> = items.iter().map(|c| c.value().sqrt()).collect();
    let u0 = units[0];

    // Scale so the center circle and every ring member fit inside the
    // parent, with a small margin.
    let mut scale = radius / u0;
    for u in &units[1..] {
        scale = scale.min(radius / (u0 + 2.0 * u));
    }
    scale *= 0.9;

    let ring = units.len() - 1;
    for (k, (item, u)) in items.iter().zip(&units).enumerate() {
        let r = u * scale;
        let (x, y) = if k == 0 {
            (cx, cy)
        } else {
            let angle = 2.0 * core::f64::consts::PI * (k - 1) as f64 / ring as f64;
            let d = (u0 + u) * scale;
            (cx + d * angle.cos(), cy + d * angle.sin())
        };
        out.push(PackCircle {
            node: item,
            depth: depth + 1,
            cx: x,
            cy: y,
            r,
        });
        pack_children(item, depth + 1, x, y, r, out);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn children_stay_inside_the_parent_circle() {
        let root = HierarchyNode::parent(
            "root",
            alloc::vec![
                HierarchyNode::leaf("a", 9.0),
                HierarchyNode::leaf("b", 4.0),
                HierarchyNode::leaf("c", 1.0),
            ],
        );
        let circles = circle_pack(&root, 50.0, 50.0, 40.0);
        assert_eq!(circles.len(), 4);
        for c in circles.iter().filter(|c| c.depth == 1) {
            let d = dist((c.cx, c.cy), (50.0, 50.0));
            assert!(d + c.r <= 40.0 + 1.0e-9, "child escapes the parent");
        }
    }

    #[test]
    fn heaviest_child_sits_at_the_center() {
        let root = HierarchyNode::parent(
            "root",
            alloc::vec![HierarchyNode::leaf("small", 1.0), HierarchyNode::leaf("big", 16.0)],
        );
        let circles = circle_pack(&root, 0.0, 0.0, 10.0);
        let big = circles.iter().find(|c| c.node.name == "big").expect("missing big");
        assert_eq!((big.cx, big.cy), (0.0, 0.0));
        let small = circles.iter().find(|c| c.node.name == "small").expect("missing small");
        assert!(small.r < big.r);
        assert!((big.r / small.r - 4.0).abs() < 1.0e-9);
    }

    #[test]
    fn zero_weight_roots_pack_nothing() {
        let root = HierarchyNode::parent("root", alloc::vec![HierarchyNode::leaf("a", 0.0)]);
        assert!(circle_pack(&root, 0.0, 0.0, 10.0).is_empty());
    }
}
