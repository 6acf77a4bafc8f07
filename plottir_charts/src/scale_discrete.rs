// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical scales: ordinal, band and point.
//!
//! All three map an ordered sequence of opaque category identifiers; they
//! differ in what a category becomes. Ordinal picks an element from a
//! parallel output sequence (cycling), band allocates a width-bearing
//! interval, point a zero-width position. Insertion order is meaningful;
//! lookups go through a hash index.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use hashbrown::HashMap;
use plottir_core::UnitValue;

use crate::scale::ScaleKind;

fn build_index(categories: &[String]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(categories.len());
    for (i, c) in categories.iter().enumerate() {
        // First occurrence wins; later duplicates keep the original slot.
        index.entry(c.clone()).or_insert(i);
    }
    index
}

/// Maps categories to elements of a parallel output sequence.
///
/// The output sequence cycles when the domain is longer; unknown categories
/// yield the configured fallback.
#[derive(Clone, Debug)]
pub struct OrdinalScale<T> {
    categories: Vec<String>,
    index: HashMap<String, usize>,
    outputs: Vec<T>,
    fallback: Option<T>,
}

impl<T: Clone> OrdinalScale<T> {
    /// Creates an ordinal scale over the given categories and outputs.
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        outputs: Vec<T>,
    ) -> Self {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let index = build_index(&categories);
        Self {
            categories,
            index,
            outputs,
            fallback: None,
        }
    }

    /// Sets the value returned for unknown categories.
    pub fn with_fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Returns the domain categories in insertion order.
    pub fn domain(&self) -> &[String] {
        &self.categories
    }

    /// Returns the output sequence.
    pub fn range(&self) -> &[T] {
        &self.outputs
    }

    /// Returns [`ScaleKind::Ordinal`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::Ordinal
    }

    /// Returns the position of a category, or `None` when unknown.
    pub fn index(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    /// Maps a category to its output, cycling modulo the output length.
    ///
    /// Unknown categories (and an empty output sequence) yield the fallback.
    pub fn forward(&self, category: &str) -> Option<T> {
        match self.index(category) {
            Some(i) if !self.outputs.is_empty() => {
                Some(self.outputs[i % self.outputs.len()].clone())
            }
            _ => self.fallback.clone(),
        }
    }

    /// Fractional position of a category: `index / (N - 1)`, 0.5 for a
    /// single category, 0 for unknown categories.
    pub fn forward_normalized(&self, category: &str) -> f64 {
        let Some(i) = self.index(category) else {
            return 0.0;
        };
        let n = self.categories.len();
        if n <= 1 {
            0.5
        } else {
            i as f64 / (n - 1) as f64
        }
    }
}

/// Partitions a range into equal-width bands with inner/outer padding.
#[derive(Clone, Debug)]
pub struct BandScale {
    categories: Vec<String>,
    index: HashMap<String, usize>,
    range: (UnitValue, UnitValue),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
}

impl BandScale {
    /// Creates a band scale with zero padding and centered alignment.
    ///
    /// Panics if the range endpoints carry different unit tags.
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        range: (UnitValue, UnitValue),
    ) -> Self {
        assert_eq!(range.0.unit, range.1.unit, "range unit tags must match");
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let index = build_index(&categories);
        Self {
            categories,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
        }
    }

    /// Sets inner (between bands) and outer (before/after) padding, in band
    /// units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Sets where residual space goes when rounding (0 = start, 1 = end).
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables rounding of step/bandwidth to whole pixels.
    pub fn rounded(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Returns the domain categories in insertion order.
    pub fn domain(&self) -> &[String] {
        &self.categories
    }

    /// Returns the range.
    pub fn range(&self) -> (UnitValue, UnitValue) {
        self.range
    }

    /// Returns [`ScaleKind::Band`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::Band
    }

    /// Returns the position of a category, or `None` when unknown.
    pub fn index(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    /// `(start, step, bandwidth, reversed, lo)` for the current settings.
    fn layout(&self) -> (f64, f64, f64, bool, f64) {
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let reversed = r1 < r0;
        let (lo, hi) = if reversed { (r1, r0) } else { (r0, r1) };
        let span = hi - lo;
        let n = self.categories.len() as f64;
        let slots = n - self.padding_inner + 2.0 * self.padding_outer;
        let mut step = span / slots.max(1.0);
        if self.round {
            step = step.floor();
        }
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            bandwidth = bandwidth.floor();
        }
        let residual = span - step * slots;
        let mut start = lo + step * self.padding_outer + residual * self.align;
        if self.round {
            start = start.round();
        }
        (start, step, bandwidth, reversed, lo)
    }

    /// Returns the distance between band starts.
    pub fn step(&self) -> UnitValue {
        let (_, step, _, _, _) = self.layout();
        UnitValue::new(step, self.range.0.unit)
    }

    /// Returns the width of one band.
    pub fn bandwidth(&self) -> UnitValue {
        let (_, _, bandwidth, _, _) = self.layout();
        UnitValue::new(bandwidth, self.range.0.unit)
    }

    /// Maps a category to the start of its band.
    ///
    /// Unknown categories map to the range start.
    pub fn forward(&self, category: &str) -> UnitValue {
        let Some(i) = self.index(category) else {
            return self.range.0;
        };
        let (start, step, _, reversed, _) = self.layout();
        let n = self.categories.len();
        let slot = if reversed { n - 1 - i } else { i };
        UnitValue::new(start + step * slot as f64, self.range.0.unit)
    }

    /// Maps a category to the center of its band.
    pub fn center(&self, category: &str) -> UnitValue {
        let pos = self.forward(category);
        UnitValue::new(pos.value + 0.5 * self.bandwidth().value, pos.unit)
    }

    /// Fractional position of a band start within the range.
    pub fn forward_normalized(&self, category: &str) -> f64 {
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let denom = if r1 - r0 == 0.0 { 1.0 } else { r1 - r0 };
        (self.forward(category).value - r0) / denom
    }
}

/// Maps categories to equally spaced zero-width positions.
#[derive(Clone, Debug)]
pub struct PointScale {
    categories: Vec<String>,
    index: HashMap<String, usize>,
    range: (UnitValue, UnitValue),
    padding: f64,
    align: f64,
}

impl PointScale {
    /// Creates a point scale with zero padding and centered alignment.
    ///
    /// Panics if the range endpoints carry different unit tags.
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        range: (UnitValue, UnitValue),
    ) -> Self {
        assert_eq!(range.0.unit, range.1.unit, "range unit tags must match");
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let index = build_index(&categories);
        Self {
            categories,
            index,
            range,
            padding: 0.0,
            align: 0.5,
        }
    }

    /// Sets the outer padding in step units.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Sets where a solitary point lands along the range (0 = start, 1 = end).
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    /// Returns the domain categories in insertion order.
    pub fn domain(&self) -> &[String] {
        &self.categories
    }

    /// Returns the range.
    pub fn range(&self) -> (UnitValue, UnitValue) {
        self.range
    }

    /// Returns [`ScaleKind::Point`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::Point
    }

    /// Returns the position of a category, or `None` when unknown.
    pub fn index(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    /// Returns the distance between adjacent points.
    pub fn step(&self) -> UnitValue {
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let span = (r1 - r0).abs();
        let n = self.categories.len() as f64;
        let denom = (n - 1.0 + 2.0 * self.padding).max(1.0);
        UnitValue::new(span / denom, self.range.0.unit)
    }

    /// Maps a category to its position.
    ///
    /// Unknown categories map to the range start.
    pub fn forward(&self, category: &str) -> UnitValue {
        let Some(i) = self.index(category) else {
            return self.range.0;
        };
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let reversed = r1 < r0;
        let (lo, hi) = if reversed { (r1, r0) } else { (r0, r1) };
        let n = self.categories.len();
        if n == 1 {
            return UnitValue::new(lo + (hi - lo) * self.align, self.range.0.unit);
        }
        let step = self.step().value;
        let slot = if reversed { n - 1 - i } else { i };
        UnitValue::new(
            lo + self.padding * step + step * slot as f64,
            self.range.0.unit,
        )
    }

    /// Fractional position of a point within the range.
    pub fn forward_normalized(&self, category: &str) -> f64 {
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let denom = if r1 - r0 == 0.0 { 1.0 } else { r1 - r0 };
        (self.forward(category).value - r0) / denom
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use plottir_core::px;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1.0e-9, "{a} != {b}");
    }

    #[test]
    fn ordinal_cycles_over_a_shorter_output_sequence() {
        let s = OrdinalScale::new(["a", "b", "c", "d"], alloc::vec![10, 20, 30]);
        assert_eq!(s.forward("a"), Some(10));
        assert_eq!(s.forward("d"), Some(10));
        assert_eq!(s.index("c"), Some(2));
        assert_eq!(s.index("zzz"), None);
    }

    #[test]
    fn ordinal_unknown_categories_use_the_fallback() {
        let s = OrdinalScale::new(["a"], alloc::vec![1]).with_fallback(99);
        assert_eq!(s.forward("nope"), Some(99));
        let bare = OrdinalScale::new(["a"], alloc::vec![1]);
        assert_eq!(bare.forward("nope"), None);
    }

    #[test]
    fn ordinal_normalized_positions() {
        let s = OrdinalScale::new(["a", "b", "c"], alloc::vec![0]);
        assert_close(s.forward_normalized("a"), 0.0);
        assert_close(s.forward_normalized("b"), 0.5);
        assert_close(s.forward_normalized("c"), 1.0);
        let single = OrdinalScale::new(["only"], alloc::vec![0]);
        assert_close(single.forward_normalized("only"), 0.5);
    }

    #[test]
    fn band_maps_the_reference_scenario() {
        let s = BandScale::new(["A", "B", "C"], (px(0.0), px(300.0)));
        assert_close(s.forward("A").value, 0.0);
        assert_close(s.forward("B").value, 100.0);
        assert_close(s.forward("C").value, 200.0);
        assert_close(s.bandwidth().value, 100.0);
    }

    #[test]
    fn band_span_identity_holds_with_padding() {
        let s = BandScale::new(["a", "b", "c", "d"], (px(0.0), px(100.0)))
            .with_padding(0.2, 0.1);
        let n = 4.0;
        let step = s.step().value;
        let identity = n * step - 0.2 * step + 2.0 * 0.1 * step;
        assert_close(identity, 100.0);
        assert_close(s.bandwidth().value, step * 0.8);
    }

    #[test]
    fn band_reversed_range_mirrors_positions() {
        let s = BandScale::new(["A", "B", "C"], (px(300.0), px(0.0)));
        assert_close(s.forward("A").value, 200.0);
        assert_close(s.forward("C").value, 0.0);
        assert_close(s.bandwidth().value, 100.0);
    }

    #[test]
    fn band_rounding_floors_step_and_distributes_residual() {
        let s = BandScale::new(["a", "b", "c"], (px(0.0), px(100.0)))
            .rounded(true)
            .with_align(0.5);
        let step = s.step().value;
        assert_close(step, 33.0);
        // 1px of residual, half in front.
        assert_close(s.forward("a").value, 1.0);
    }

    #[test]
    fn point_positions_are_separated_by_exactly_one_step() {
        let s = PointScale::new(["a", "b", "c", "d"], (px(0.0), px(90.0)));
        let step = s.step().value;
        assert_close(step, 30.0);
        let xs: Vec<f64> = ["a", "b", "c", "d"]
            .iter()
            .map(|c| s.forward(c).value)
            .collect();
        for w in xs.windows(2) {
            assert_close(w[1] - w[0], step);
        }
        assert_close(xs[0], 0.0);
        assert_close(xs[3], 90.0);
    }

    #[test]
    fn point_padding_insets_the_endpoints() {
        let s = PointScale::new(["a", "b"], (px(0.0), px(100.0))).with_padding(0.5);
        let step = s.step().value;
        assert_close(step, 50.0);
        assert_close(s.forward("a").value, 25.0);
        assert_close(s.forward("b").value, 75.0);
    }

    #[test]
    fn point_single_category_uses_alignment() {
        let s = PointScale::new(["solo"], (px(0.0), px(100.0)));
        assert_close(s.forward("solo").value, 50.0);
        let left = PointScale::new(["solo"], (px(0.0), px(100.0))).with_align(0.0);
        assert_close(left.forward("solo").value, 0.0);
    }

    #[test]
    fn unknown_categories_map_to_the_range_start() {
        let band = BandScale::new(["a"], (px(7.0), px(100.0)));
        assert_close(band.forward("zzz").value, 7.0);
        let point = PointScale::new(["a"], (px(7.0), px(100.0)));
        assert_close(point.forward("zzz").value, 7.0);
    }
}
