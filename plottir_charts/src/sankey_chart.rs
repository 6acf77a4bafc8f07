// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Sankey chart adapter over the layered layout.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style, TextAnchor, TextBaseline};

use crate::sankey::{SankeyLink, SankeyNode, sankey_layout};
use crate::scale_color::CategoricalColorScale;

/// A Sankey diagram.
#[derive(Clone, Debug)]
pub struct SankeyChart {
    nodes: Vec<SankeyNode>,
    links: Vec<SankeyLink>,
    node_width: f64,
    node_padding: f64,
    labels: bool,
}

impl SankeyChart {
    /// Creates a Sankey chart.
    pub fn new(nodes: Vec<SankeyNode>, links: Vec<SankeyLink>) -> Self {
        Self {
            nodes,
            links,
            node_width: 14.0,
            node_padding: 8.0,
            labels: true,
        }
    }

    /// Enables or disables node labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let layout = sankey_layout(
            &self.nodes,
            &self.links,
            bounds,
            self.node_width,
            self.node_padding,
        );
        if layout.nodes.is_empty() {
            return Vec::new();
        }
        let colors = CategoricalColorScale::with_default_palette(
            self.nodes.iter().map(|n| n.name.clone()),
        );

        let mut out = Vec::new();
        // Ribbons first so node bars overpaint their attachment edges.
        for link in &layout.links {
            let color = colors.forward(&self.nodes[link.source].name);
            out.push(Primitive::Path {
                path: link.path.clone(),
                style: Style::fill(color.with_alpha(0.35)),
            });
        }
        for node in &layout.nodes {
            if node.rect.height() <= 0.0 {
                continue;
            }
            let name = &self.nodes[node.index].name;
            out.push(Primitive::Rect {
                x: node.rect.x0,
                y: node.rect.y0,
                width: node.rect.width(),
                height: node.rect.height(),
                style: Style::fill(colors.forward(name)),
            });
            if self.labels {
                let right_of = node.rect.x1 + 4.0 < bounds.x1 - 40.0;
                out.push(Primitive::Text {
                    content: name.clone(),
                    x: if right_of { node.rect.x1 + 4.0 } else { node.rect.x0 - 4.0 },
                    y: node.rect.y0 + 0.5 * node.rect.height(),
                    style: Style::text(css::BLACK, 10.0)
                        .with_anchor(if right_of { TextAnchor::Start } else { TextAnchor::End })
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
    fn empty_input_yields_an_empty_stream() {
        let chart = SankeyChart::new(Vec::new(), Vec::new());
        assert!(chart.primitives(Rect::new(0.0, 0.0, 400.0, 300.0)).is_empty());
    }

    #[test]
    fn ribbons_paint_before_node_bars() {
        let nodes = alloc::vec![
            SankeyNode::new("a"),
            SankeyNode::new("b"),
            SankeyNode::new("c"),
        ];
        let links = alloc::vec![SankeyLink::new(0, 1, 3.0), SankeyLink::new(0, 2, 1.0)];
        let prims = SankeyChart::new(nodes, links)
            .with_labels(false)
            .primitives(Rect::new(0.0, 0.0, 400.0, 300.0));

        let first_rect = prims
            .iter()
            .position(|p| matches!(p, Primitive::Rect { .. }))
            .expect("missing node bars");
        let last_path = prims
            .iter()
            .rposition(|p| matches!(p, Primitive::Path { .. }))
            .expect("missing ribbons");
        assert!(last_path < first_rect);
        let rects = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .count();
        assert_eq!(rects, 3);
    }
}
