// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hierarchy data model shared by treemap, sunburst, icicle, circle
//! packing and dendrogram layouts.
//!
//! Nodes own their children; layouts never need parent back-pointers (depth
//! and accumulators are passed down the recursion instead).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;

/// A named node with a non-negative weight, ordered children, an optional
/// display color and an opaque metadata bag.
#[derive(Clone, Debug)]
pub struct HierarchyNode {
    /// Display name.
    pub name: String,
    /// Own weight. For internal nodes this also serves as the dendrogram
    /// height attribute; aggregate weights always come from the leaves.
    pub weight: f64,
    /// Ordered children.
    pub children: Vec<HierarchyNode>,
    /// Optional display color.
    pub color: Option<Color>,
    /// Opaque metadata.
    pub meta: HashMap<String, String>,
}

impl HierarchyNode {
    /// Creates a leaf with the given weight (negative weights clamp to 0).
    pub fn leaf(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight: weight.max(0.0),
            children: Vec::new(),
            color: None,
            meta: HashMap::new(),
        }
    }

    /// Creates an internal node over the given children.
    pub fn parent(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            weight: 0.0,
            children,
            color: None,
            meta: HashMap::new(),
        }
    }

    /// Sets the own weight (used as the dendrogram height for internal
    /// nodes).
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight.max(0.0);
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Attaches a metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Aggregate weight: the sum of the aggregate weights of the leaves,
    /// computed on demand.
    pub fn value(&self) -> f64 {
        if self.children.is_empty() {
            self.weight.max(0.0)
        } else {
            self.children.iter().map(Self::value).sum()
        }
    }

    /// Number of levels below this node (0 for a leaf).
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.height())
            .max()
            .unwrap_or(0)
    }

    /// Number of leaves below this node (1 for a leaf).
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn sample() -> HierarchyNode {
        HierarchyNode::parent(
            "root",
            alloc::vec![
                HierarchyNode::parent(
                    "a",
                    alloc::vec![HierarchyNode::leaf("a1", 3.0), HierarchyNode::leaf("a2", 2.0)],
                ),
                HierarchyNode::leaf("b", 5.0),
            ],
        )
    }

    #[test]
    fn aggregate_weight_sums_the_leaves() {
        let root = sample();
        assert_eq!(root.value(), 10.0);
        assert_eq!(root.children[0].value(), 5.0);
    }

    #[test]
    fn internal_weight_does_not_affect_the_aggregate() {
        let root = sample().with_weight(1000.0);
        assert_eq!(root.value(), 10.0);
    }

    #[test]
    fn height_and_leaf_count() {
        let root = sample();
        assert_eq!(root.height(), 2);
        assert_eq!(root.leaf_count(), 3);
        assert_eq!(HierarchyNode::leaf("x", 1.0).height(), 0);
    }

    #[test]
    fn negative_weights_clamp_to_zero() {
        assert_eq!(HierarchyNode::leaf("x", -4.0).value(), 0.0);
    }
}
