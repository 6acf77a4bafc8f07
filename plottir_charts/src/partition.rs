// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sunburst and icicle partition layouts.
//!
//! Both share the same weight recursion: within a parent's extent, each
//! child occupies a sub-extent proportional to its aggregate weight. The
//! sunburst maps depth to concentric rings and extent to angle; the icicle
//! maps depth to parallel strips and extent to length. The root itself
//! emits nothing; its children occupy the innermost ring / first strip.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::hierarchy::HierarchyNode;

/// A positioned sunburst wedge, center-relative.
#[derive(Clone, Copy, Debug)]
pub struct SunburstArc<'a> {
    /// The originating hierarchy node.
    pub node: &'a HierarchyNode,
    /// Depth below the root (children of the root are 1).
    pub depth: usize,
    /// Inner ring radius.
    pub inner_radius: f64,
    /// Outer ring radius.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

/// Radial partition of `root` into rings of thickness `radius / height`.
///
/// The root's children share the full circle; zero-weight subtrees emit
/// nothing. A leaf root (or zero total weight) yields an empty layout.
pub fn sunburst<'a>(root: &'a HierarchyNode, radius: f64) -> Vec<SunburstArc<'a>> {
    let mut out = Vec::new();
    let levels = root.height();
    if levels == 0 || root.value() <= 0.0 || radius <= 0.0 {
        return out;
    }
    let thickness = radius / levels as f64;
    sunburst_recurse(
        root,
        0,
        0.0,
        2.0 * core::f64::consts::PI,
        thickness,
        &mut out,
    );
    out
}

fn sunburst_recurse<'a>(
    node: &'a HierarchyNode,
    depth: usize,
    a0: f64,
    a1: f64,
    thickness: f64,
    out: &mut Vec<SunburstArc<'a>>,
) {
    let total = node.value();
    if total <= 0.0 {
        return;
    }
    let mut cursor = a0;
    for child in &node.children {
        let value = child.value();
        if value <= 0.0 {
            continue;
        }
        let sweep = (a1 - a0) * value / total;
        out.push(SunburstArc {
            node: child,
            depth: depth + 1,
            inner_radius: depth as f64 * thickness,
            outer_radius: (depth + 1) as f64 * thickness,
            start_angle: cursor,
            end_angle: cursor + sweep,
        });
        sunburst_recurse(child, depth + 1, cursor, cursor + sweep, thickness, out);
        cursor += sweep;
    }
}

/// Icicle strip direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IcicleOrient {
    /// Depth grows downward; extents run along x.
    #[default]
    Horizontal,
    /// Depth grows rightward; extents run along y.
    Vertical,
}

/// A positioned icicle cell.
#[derive(Clone, Copy, Debug)]
pub struct IcicleRect<'a> {
    /// The originating hierarchy node.
    pub node: &'a HierarchyNode,
    /// Depth below the root (children of the root are 1).
    pub depth: usize,
    /// The cell rectangle.
    pub rect: Rect,
}

/// Rectangular partition of `root` into `bounds`.
pub fn icicle<'a>(
    root: &'a HierarchyNode,
    bounds: Rect,
    orient: IcicleOrient,
) -> Vec<IcicleRect<'a>> {
    let mut out = Vec::new();
    let levels = root.height();
    if levels == 0 || root.value() <= 0.0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return out;
    }
    let thickness = match orient {
        IcicleOrient::Horizontal => bounds.height() / levels as f64,
        IcicleOrient::Vertical => bounds.width() / levels as f64,
    };
    let (lo, hi) = match orient {
        IcicleOrient::Horizontal => (bounds.x0, bounds.x1),
        IcicleOrient::Vertical => (bounds.y0, bounds.y1),
    };
    icicle_recurse(root, 0, lo, hi, thickness, bounds, orient, &mut out);
    out
}

fn icicle_recurse<'a>(
    node: &'a HierarchyNode,
    depth: usize,
    lo: f64,
    hi: f64,
    thickness: f64,
    bounds: Rect,
    orient: IcicleOrient,
    out: &mut Vec<IcicleRect<'a>>,
) {
    let total = node.value();
    if total <= 0.0 {
        return;
    }
    let mut cursor = lo;
    for child in &node.children {
        let value = child.value();
        if value <= 0.0 {
            continue;
        }
        let span = (hi - lo) * value / total;
        let rect = match orient {
            IcicleOrient::Horizontal => Rect::new(
                cursor,
                bounds.y0 + depth as f64 * thickness,
                cursor + span,
                bounds.y0 + (depth + 1) as f64 * thickness,
            ),
            IcicleOrient::Vertical => Rect::new(
                bounds.x0 + depth as f64 * thickness,
                cursor,
                bounds.x0 + (depth + 1) as f64 * thickness,
                cursor + span,
            ),
        };
        out.push(IcicleRect {
            node: child,
            depth: depth + 1,
            rect,
        });
        icicle_recurse(child, depth + 1, cursor, cursor + span, thickness, bounds, orient, out);
        cursor += span;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn tree() -> HierarchyNode {
        HierarchyNode::parent(
            "root",
            alloc::vec![
                HierarchyNode::parent(
                    "a",
                    alloc::vec![HierarchyNode::leaf("a1", 2.0), HierarchyNode::leaf("a2", 2.0)],
                ),
                HierarchyNode::leaf("b", 4.0),
            ],
        )
    }

    #[test]
    fn wedge_sweeps_sum_to_the_parent_sweep() {
        let root = tree();
        let arcs = sunburst(&root, 100.0);
        let tau = 2.0 * core::f64::consts::PI;

        let top_sweep: f64 = arcs
            .iter()
            .filter(|a| a.depth == 1)
            .map(|a| a.end_angle - a.start_angle)
            .sum();
        assert!((top_sweep - tau).abs() < 1.0e-9);

        let a = arcs.iter().find(|x| x.node.name == "a").expect("missing a");
        let inner_sweep: f64 = arcs
            .iter()
            .filter(|x| x.depth == 2)
            .map(|x| x.end_angle - x.start_angle)
            .sum();
        assert!((inner_sweep - (a.end_angle - a.start_angle)).abs() < 1.0e-9);
    }

    #[test]
    fn rings_are_concentric_per_depth() {
        let root = tree();
        let arcs = sunburst(&root, 100.0);
        for arc in &arcs {
            assert!((arc.outer_radius - arc.inner_radius - 50.0).abs() < 1.0e-9);
            assert_eq!(arc.inner_radius, (arc.depth - 1) as f64 * 50.0);
        }
    }

    #[test]
    fn leaf_root_yields_an_empty_sunburst() {
        let root = HierarchyNode::leaf("only", 5.0);
        assert!(sunburst(&root, 100.0).is_empty());
    }

    #[test]
    fn icicle_strips_partition_the_width() {
        let root = tree();
        let bounds = Rect::new(0.0, 0.0, 80.0, 40.0);
        let cells = icicle(&root, bounds, IcicleOrient::Horizontal);

        let top: Vec<&IcicleRect<'_>> = cells.iter().filter(|c| c.depth == 1).collect();
        let width: f64 = top.iter().map(|c| c.rect.width()).sum();
        assert!((width - 80.0).abs() < 1.0e-9);
        for c in &top {
            assert_eq!(c.rect.y0, 0.0);
            assert_eq!(c.rect.y1, 20.0);
        }

        let b = cells.iter().find(|c| c.node.name == "b").expect("missing b");
        assert!((b.rect.width() - 40.0).abs() < 1.0e-9);
    }

    #[test]
    fn vertical_icicle_swaps_the_axes() {
        let root = tree();
        let bounds = Rect::new(0.0, 0.0, 40.0, 80.0);
        let cells = icicle(&root, bounds, IcicleOrient::Vertical);
        let top: Vec<&IcicleRect<'_>> = cells.iter().filter(|c| c.depth == 1).collect();
        let height: f64 = top.iter().map(|c| c.rect.height()).sum();
        assert!((height - 80.0).abs() < 1.0e-9);
        for c in &top {
            assert_eq!(c.rect.x0, 0.0);
            assert_eq!(c.rect.x1, 20.0);
        }
    }
}
