// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color scales: sequential, diverging and categorical.
//!
//! Continuous color scales map a numeric domain onto a color ramp by
//! interpolating anchor colors in a chosen space (OKLCH by default).
//! Categorical color scales cycle a palette over category indices.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{GradientSpace, mix};

use crate::scale::ScaleKind;

/// A two-anchor continuous color scale.
#[derive(Clone)]
pub struct SequentialColorScale {
    domain: (f64, f64),
    start: Color,
    end: Color,
    space: GradientSpace,
    clamp: bool,
    warp: Option<Arc<dyn Fn(f64) -> f64>>,
}

impl core::fmt::Debug for SequentialColorScale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SequentialColorScale")
            .field("domain", &self.domain)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("space", &self.space)
            .field("clamp", &self.clamp)
            .field("warp", &self.warp.is_some())
            .finish()
    }
}

impl SequentialColorScale {
    /// Creates a sequential color scale interpolating `start → end`.
    pub fn new(domain: (f64, f64), start: Color, end: Color) -> Self {
        let domain = if domain.0.is_finite() && domain.1.is_finite() {
            domain
        } else {
            (0.0, 1.0)
        };
        Self {
            domain,
            start,
            end,
            space: GradientSpace::Oklch,
            clamp: false,
            warp: None,
        }
    }

    /// Sets the interpolation space.
    pub fn with_space(mut self, space: GradientSpace) -> Self {
        self.space = space;
        self
    }

    /// Enables or disables clamping of out-of-domain queries.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Injects a parameter-remapping function applied before color
    /// interpolation (e.g. a gamma curve).
    pub fn with_warp(mut self, warp: impl Fn(f64) -> f64 + 'static) -> Self {
        self.warp = Some(Arc::new(warp));
        self
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the anchor colors.
    pub fn range(&self) -> (Color, Color) {
        (self.start, self.end)
    }

    /// Returns [`ScaleKind::SequentialColor`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::SequentialColor
    }

    /// The (warped) interpolation parameter for `v`.
    pub fn forward_normalized(&self, v: f64) -> f64 {
        if v.is_nan() {
            return 0.0;
        }
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        let mut t = if denom == 0.0 { 0.0 } else { (v - d0) / denom };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        match &self.warp {
            Some(w) => (w)(t),
            None => t,
        }
    }

    /// Maps a domain value to a color.
    pub fn forward(&self, v: f64) -> Color {
        if v.is_nan() {
            return self.start;
        }
        mix(self.start, self.end, self.forward_normalized(v), self.space)
    }
}

/// A three-anchor continuous color scale split at a midpoint.
#[derive(Clone, Debug)]
pub struct DivergingColorScale {
    domain: (f64, f64),
    mid: f64,
    anchors: (Color, Color, Color),
    space: GradientSpace,
    clamp: bool,
}

impl DivergingColorScale {
    /// Creates a diverging scale with the midpoint at the domain centroid.
    pub fn new(domain: (f64, f64), start: Color, middle: Color, end: Color) -> Self {
        let domain = if domain.0.is_finite() && domain.1.is_finite() {
            domain
        } else {
            (0.0, 1.0)
        };
        Self {
            domain,
            mid: 0.5 * (domain.0 + domain.1),
            anchors: (start, middle, end),
            space: GradientSpace::Oklch,
            clamp: false,
        }
    }

    /// Moves the midpoint away from the domain centroid.
    pub fn with_midpoint(mut self, mid: f64) -> Self {
        if mid.is_finite() {
            self.mid = mid;
        }
        self
    }

    /// Sets the interpolation space.
    pub fn with_space(mut self, space: GradientSpace) -> Self {
        self.space = space;
        self
    }

    /// Enables or disables clamping of the final parameter.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the midpoint.
    pub fn midpoint(&self) -> f64 {
        self.mid
    }

    /// Returns [`ScaleKind::DivergingColor`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::DivergingColor
    }

    /// The interpolation parameter for `v`: `[0, 0.5)` below the midpoint,
    /// `[0.5, 1]` at or above it.
    pub fn forward_normalized(&self, v: f64) -> f64 {
        if v.is_nan() {
            return 0.0;
        }
        let (d0, d1) = self.domain;
        let mut t = if v < self.mid {
            let denom = if self.mid - d0 == 0.0 { 1.0 } else { self.mid - d0 };
            0.5 * (v - d0) / denom
        } else {
            let denom = if d1 - self.mid == 0.0 { 1.0 } else { d1 - self.mid };
            0.5 + 0.5 * (v - self.mid) / denom
        };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        t
    }

    /// Maps a domain value to a color.
    pub fn forward(&self, v: f64) -> Color {
        if v.is_nan() {
            return self.anchors.0;
        }
        let t = self.forward_normalized(v);
        if t < 0.5 {
            mix(self.anchors.0, self.anchors.1, t * 2.0, self.space)
        } else {
            mix(self.anchors.1, self.anchors.2, (t - 0.5) * 2.0, self.space)
        }
    }
}

/// A palette-cycling categorical color scale.
#[derive(Clone, Debug)]
pub struct CategoricalColorScale {
    categories: Vec<String>,
    index: HashMap<String, usize>,
    palette: Vec<Color>,
    unknown: Color,
}

impl CategoricalColorScale {
    /// Creates a categorical color scale over the given palette.
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        palette: Vec<Color>,
    ) -> Self {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(categories.len());
        for (i, c) in categories.iter().enumerate() {
            index.entry(c.clone()).or_insert(i);
        }
        Self {
            categories,
            index,
            palette,
            unknown: Color::from_rgb8(128, 128, 128),
        }
    }

    /// Creates a categorical color scale using the built-in series palette.
    pub fn with_default_palette(
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(categories, default_palette(8))
    }

    /// Sets the color returned for unknown categories.
    pub fn with_unknown(mut self, unknown: Color) -> Self {
        self.unknown = unknown;
        self
    }

    /// Returns the domain categories in insertion order.
    pub fn domain(&self) -> &[String] {
        &self.categories
    }

    /// Returns the palette.
    pub fn range(&self) -> &[Color] {
        &self.palette
    }

    /// Returns [`ScaleKind::CategoricalColor`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::CategoricalColor
    }

    /// Returns the position of a category, or `None` when unknown.
    pub fn index(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    /// Maps a category to a palette color, cycling modulo the palette
    /// length; unknown categories yield the unknown color.
    pub fn forward(&self, category: &str) -> Color {
        match self.index(category) {
            Some(i) if !self.palette.is_empty() => self.palette[i % self.palette.len()],
            _ => self.unknown,
        }
    }
}

/// Returns the default series palette, repeating if `count` exceeds it.
pub(crate) fn default_palette(count: usize) -> Vec<Color> {
    const PALETTE: [Color; 8] = [
        css::CORNFLOWER_BLUE,
        css::ORANGE,
        css::MEDIUM_SEA_GREEN,
        css::CRIMSON,
        css::GOLDENROD,
        css::SLATE_BLUE,
        css::DARK_CYAN,
        css::HOT_PINK,
    ];
    (0..count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn sequential_hits_both_anchors() {
        let s = SequentialColorScale::new((0.0, 100.0), css::BLACK, css::WHITE);
        assert_eq!(s.forward(0.0).to_rgba8(), css::BLACK.to_rgba8());
        assert_eq!(s.forward(100.0).to_rgba8(), css::WHITE.to_rgba8());
    }

    #[test]
    fn sequential_warp_remaps_the_parameter() {
        let plain = SequentialColorScale::new((0.0, 1.0), css::BLACK, css::WHITE);
        let warped = SequentialColorScale::new((0.0, 1.0), css::BLACK, css::WHITE)
            .with_warp(|t| t * t);
        assert!((warped.forward_normalized(0.5) - 0.25).abs() < 1.0e-9);
        assert!((plain.forward_normalized(0.5) - 0.5).abs() < 1.0e-9);
    }

    #[test]
    fn sequential_nan_maps_to_the_start_anchor() {
        let s = SequentialColorScale::new((0.0, 1.0), css::TOMATO, css::TEAL);
        assert_eq!(s.forward(f64::NAN).to_rgba8(), css::TOMATO.to_rgba8());
    }

    #[test]
    fn diverging_splits_at_the_midpoint() {
        let s = DivergingColorScale::new((-1.0, 1.0), css::BLUE, css::WHITE, css::RED);
        assert_eq!(s.forward(-1.0).to_rgba8(), css::BLUE.to_rgba8());
        assert_eq!(s.forward(0.0).to_rgba8(), css::WHITE.to_rgba8());
        assert_eq!(s.forward(1.0).to_rgba8(), css::RED.to_rgba8());
        assert!((s.forward_normalized(-0.5) - 0.25).abs() < 1.0e-9);
        assert!((s.forward_normalized(0.5) - 0.75).abs() < 1.0e-9);
    }

    #[test]
    fn diverging_custom_midpoint_shifts_the_split() {
        let s = DivergingColorScale::new((0.0, 10.0), css::BLUE, css::WHITE, css::RED)
            .with_midpoint(2.0);
        assert_eq!(s.forward(2.0).to_rgba8(), css::WHITE.to_rgba8());
        assert!(s.forward_normalized(1.0) < 0.5);
    }

    #[test]
    fn categorical_cycles_and_grays_out_unknowns() {
        let s = CategoricalColorScale::new(["a", "b", "c"], default_palette(2));
        assert_eq!(s.forward("a").to_rgba8(), css::CORNFLOWER_BLUE.to_rgba8());
        assert_eq!(s.forward("c").to_rgba8(), css::CORNFLOWER_BLUE.to_rgba8());
        let gray = s.forward("zzz").to_rgba8();
        assert_eq!((gray.r, gray.g, gray.b), (128, 128, 128));
    }

    #[test]
    fn kinds_identify_the_variants() {
        let seq = SequentialColorScale::new((0.0, 1.0), css::BLACK, css::WHITE);
        let div = DivergingColorScale::new((0.0, 1.0), css::BLACK, css::GRAY, css::WHITE);
        let cat = CategoricalColorScale::with_default_palette(["a"]);
        assert_eq!(seq.kind(), ScaleKind::SequentialColor);
        assert_eq!(div.kind(), ScaleKind::DivergingColor);
        assert_eq!(cat.kind(), ScaleKind::CategoricalColor);
    }
}
