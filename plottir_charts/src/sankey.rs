// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Sankey layered layout.
//!
//! Nodes and links are plain parallel sequences; there is no pointer graph.
//! Column assignment is an iterated longest-path relaxation that terminates
//! even on cyclic link sets because column indices are bounded by the node
//! count. Within a column, nodes stack in lexicographic name order with
//! heights proportional to `max(total-in, total-out)`; links become cubic
//! Bezier ribbons with control points at the horizontal midpoint.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Rect};

/// A named Sankey node.
#[derive(Clone, Debug)]
pub struct SankeyNode {
    /// Display name, also the in-column sort key.
    pub name: String,
}

impl SankeyNode {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A directed flow between two nodes, by index.
#[derive(Clone, Copy, Debug)]
pub struct SankeyLink {
    /// Source node index.
    pub source: usize,
    /// Target node index.
    pub target: usize,
    /// Non-negative flow value.
    pub value: f64,
}

impl SankeyLink {
    /// Convenience constructor; negative values clamp to 0.
    pub fn new(source: usize, target: usize, value: f64) -> Self {
        Self {
            source,
            target,
            value: value.max(0.0),
        }
    }
}

/// A positioned node.
#[derive(Clone, Copy, Debug)]
pub struct SankeyNodeLayout {
    /// Index into the input node sequence.
    pub index: usize,
    /// Assigned column.
    pub column: usize,
    /// The node rectangle.
    pub rect: Rect,
}

/// A routed link ribbon.
#[derive(Clone, Debug)]
pub struct SankeyLinkLayout {
    /// Index into the input link sequence.
    pub index: usize,
    /// Source node index.
    pub source: usize,
    /// Target node index.
    pub target: usize,
    /// Ribbon thickness (at least 1 for visibility).
    pub thickness: f64,
    /// Top attachment y on the source's right edge.
    pub source_y: f64,
    /// Top attachment y on the target's left edge.
    pub target_y: f64,
    /// The closed ribbon outline.
    pub path: BezPath,
}

/// A fully laid-out Sankey diagram.
#[derive(Clone, Debug, Default)]
pub struct SankeyLayout {
    /// Positioned nodes, in input order.
    pub nodes: Vec<SankeyNodeLayout>,
    /// Routed links, in input order of the links that survived validation.
    pub links: Vec<SankeyLinkLayout>,
}

/// Lays out a Sankey diagram inside `bounds`.
///
/// Links referencing out-of-range nodes are dropped. Empty input yields an
/// empty layout. Flow conservation is not required; cycles are accepted.
pub fn sankey_layout(
    nodes: &[SankeyNode],
    links: &[SankeyLink],
    bounds: Rect,
    node_width: f64,
    node_padding: f64,
) -> SankeyLayout {
    let n = nodes.len();
    if n == 0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return SankeyLayout::default();
    }
    let links: Vec<(usize, SankeyLink)> = links
        .iter()
        .enumerate()
        .filter(|(_, l)| l.source < n && l.target < n)
        .map(|(i, l)| (i, *l))
        .collect();

    let columns = assign_columns(n, &links);
    let ncols = columns.iter().copied().max().unwrap_or(0) + 1;

    // Flow totals; a node's height tracks its heavier side.
    let mut total_in = alloc::vec![0.0_f64; n];
    let mut total_out = alloc::vec![0.0_f64; n];
    for (_, l) in &links {
        total_out[l.source] += l.value.max(0.0);
        total_in[l.target] += l.value.max(0.0);
    }
    let flow: Vec<f64> = (0..n).map(|i| total_in[i].max(total_out[i])).collect();

    // One pixel of value resolution per column: the scale is the tightest
    // column's available height over its flow sum.
    let padding = node_padding.max(0.0);
    let mut scale = f64::INFINITY;
    for col in 0..ncols {
        let members: Vec<usize> = (0..n).filter(|i| columns[*i] == col).collect();
        let sum: f64 = members.iter().map(|i| flow[*i]).sum();
        if sum > 0.0 {
            let avail = bounds.height() - padding * members.len().saturating_sub(1) as f64;
            scale = scale.min(avail / sum);
        }
    }
    if !scale.is_finite() || scale <= 0.0 {
        scale = 1.0;
    }

    // Node placement: columns left to right, lexicographic within a column,
    // each stack centered vertically.
    let node_width = node_width.max(1.0);
    let col_step = if ncols > 1 {
        (bounds.width() - node_width) / (ncols - 1) as f64
    } else {
        0.0
    };
    let mut rects = alloc::vec![Rect::ZERO; n];
    for col in 0..ncols {
        let mut members: Vec<usize> = (0..n).filter(|i| columns[*i] == col).collect();
        members.sort_by(|a, b| nodes[*a].name.cmp(&nodes[*b].name));

        let x0 = if ncols > 1 {
            bounds.x0 + col as f64 * col_step
        } else {
            bounds.x0 + 0.5 * (bounds.width() - node_width)
        };
        let stack_h: f64 = members.iter().map(|i| flow[*i] * scale).sum::<f64>()
            + padding * members.len().saturating_sub(1) as f64;
        let mut y = bounds.y0 + 0.5 * (bounds.height() - stack_h);
        for i in members {
            let h = flow[i] * scale;
            rects[i] = Rect::new(x0, y, x0 + node_width, y + h);
            y += h + padding;
        }
    }

    // Link attachment offsets: outgoing sorted by target column/name,
    // incoming by source column/name, offsets accumulating per node.
    let thickness = |l: &SankeyLink| {
        let height = flow[l.source] * scale;
        let t = if total_out[l.source] > 0.0 {
            height * l.value / total_out[l.source]
        } else {
            0.0
        };
        t.max(1.0)
    };

    let mut order: Vec<usize> = (0..links.len()).collect();
    let mut source_y = alloc::vec![0.0_f64; links.len()];
    order.sort_by(|a, b| {
        let la = &links[*a].1;
        let lb = &links[*b].1;
        (columns[la.target], &nodes[la.target].name, *a)
            .cmp(&(columns[lb.target], &nodes[lb.target].name, *b))
    });
    let mut out_cursor = alloc::vec![0.0_f64; n];
    for k in &order {
        let l = &links[*k].1;
        source_y[*k] = rects[l.source].y0 + out_cursor[l.source];
        out_cursor[l.source] += thickness(l);
    }

    let mut target_y = alloc::vec![0.0_f64; links.len()];
    order.sort_by(|a, b| {
        let la = &links[*a].1;
        let lb = &links[*b].1;
        (columns[la.source], &nodes[la.source].name, *a)
            .cmp(&(columns[lb.source], &nodes[lb.source].name, *b))
    });
    let mut in_cursor = alloc::vec![0.0_f64; n];
    for k in &order {
        let l = &links[*k].1;
        target_y[*k] = rects[l.target].y0 + in_cursor[l.target];
        in_cursor[l.target] += thickness(l);
    }

    let link_layouts = links
        .iter()
        .enumerate()
        .map(|(k, (index, l))| {
            let th = thickness(l);
            let sy = source_y[k];
            let ty = target_y[k];
            let sx = rects[l.source].x1;
            let tx = rects[l.target].x0;
            SankeyLinkLayout {
                index: *index,
                source: l.source,
                target: l.target,
                thickness: th,
                source_y: sy,
                target_y: ty,
                path: ribbon(sx, sy, tx, ty, th),
            }
        })
        .collect();

    SankeyLayout {
        nodes: (0..n)
            .map(|i| SankeyNodeLayout {
                index: i,
                column: columns[i],
                rect: rects[i],
            })
            .collect(),
        links: link_layouts,
    }
}

/// Longest-path-from-any-source column assignment by iterated relaxation.
fn assign_columns(n: usize, links: &[(usize, SankeyLink)]) -> Vec<usize> {
    let mut has_incoming = alloc::vec![false; n];
    for (_, l) in links {
        has_incoming[l.target] = true;
    }
    let mut col: Vec<Option<usize>> = (0..n)
        .map(|i| if has_incoming[i] { None } else { Some(0) })
        .collect();

    // Column indices are bounded by the node count, so even cyclic link
    // sets stop changing within n passes.
    for _ in 0..n {
        let mut changed = false;
        for (_, l) in links {
            if let Some(cs) = col[l.source] {
                let candidate = (cs + 1).min(n - 1);
                if col[l.target].is_none_or(|ct| candidate > ct) {
                    col[l.target] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    col.into_iter().map(|c| c.unwrap_or(0)).collect()
}

/// A closed ribbon between two vertical edges, with cubic top and bottom
/// curves whose control points sit at the horizontal midpoint.
fn ribbon(sx: f64, sy: f64, tx: f64, ty: f64, thickness: f64) -> BezPath {
    let xm = 0.5 * (sx + tx);
    let mut p = BezPath::new();
    p.move_to((sx, sy));
    p.curve_to((xm, sy), (xm, ty), (tx, ty));
    p.line_to((tx, ty + thickness));
    p.curve_to((xm, ty + thickness), (xm, sy + thickness), (sx, sy + thickness));
    p.close_path();
    p
}
