// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color parsing, mixing and gradient sampling.
//!
//! This is a thin layer over `peniko::color`. Charts treat color arithmetic
//! as a black box: parse a color, mix two colors in a chosen space, sample a
//! gradient, read a luminance. OKLCH is the default space for perceptual
//! gradients; plain sRGB is available where component-wise mixing is wanted.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::{AlphaColor, LinearSrgb, Oklch, Srgb, parse_color};

/// The interpolation space used by [`mix`] and [`gradient_samples`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientSpace {
    /// Component-wise sRGB interpolation.
    Rgb,
    /// Perceptual OKLCH interpolation (hue along the shorter arc).
    #[default]
    Oklch,
}

/// Parses a hex string (`#rgb`, `#rrggbb`, `#rrggbbaa`) or a CSS color name.
///
/// Returns `None` when the string is not a recognizable color.
pub fn parse(s: &str) -> Option<Color> {
    parse_color(s).ok().map(|c| c.to_alpha_color::<Srgb>())
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        alloc::format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        alloc::format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// Returns the relative luminance of a color in `[0, 1]`.
pub fn luminance(color: Color) -> f64 {
    let lin: AlphaColor<LinearSrgb> = color.convert();
    let [r, g, b, _] = lin.components;
    f64::from(0.2126 * r + 0.7152 * g + 0.0722 * b)
}

/// Mixes two colors with parameter `t` in `[0, 1]`.
pub fn mix(a: Color, b: Color, t: f64, space: GradientSpace) -> Color {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "mix parameters are clamped to [0, 1] and fit f32 comfortably"
    )]
    let t = t.clamp(0.0, 1.0) as f32;
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    match space {
        GradientSpace::Rgb => {
            let ca = a.components;
            let cb = b.components;
            Color::new([
                ca[0] + t * (cb[0] - ca[0]),
                ca[1] + t * (cb[1] - ca[1]),
                ca[2] + t * (cb[2] - ca[2]),
                ca[3] + t * (cb[3] - ca[3]),
            ])
        }
        GradientSpace::Oklch => {
            let ca: AlphaColor<Oklch> = a.convert();
            let cb: AlphaColor<Oklch> = b.convert();
            let [l0, c0, mut h0, a0] = ca.components;
            let [l1, c1, mut h1, a1] = cb.components;
            // Near-achromatic endpoints have no meaningful hue; adopt the
            // other endpoint's hue so the gradient doesn't spin.
            const ACHROMATIC: f32 = 1.0e-4;
            if c0 < ACHROMATIC {
                h0 = h1;
            }
            if c1 < ACHROMATIC {
                h1 = h0;
            }
            let mut dh = (h1 - h0) % 360.0;
            if dh > 180.0 {
                dh -= 360.0;
            } else if dh < -180.0 {
                dh += 360.0;
            }
            let mixed = AlphaColor::<Oklch>::new([
                l0 + t * (l1 - l0),
                c0 + t * (c1 - c0),
                h0 + t * dh,
                a0 + t * (a1 - a0),
            ]);
            mixed.convert()
        }
    }
}

/// Returns `n` colors sampled evenly from the gradient `a → b`.
///
/// `n == 0` yields an empty sequence; `n == 1` yields just `a`.
pub fn gradient_samples(a: Color, b: Color, n: usize, space: GradientSpace) -> Vec<Color> {
    match n {
        0 => Vec::new(),
        1 => alloc::vec![a],
        _ => (0..n)
            .map(|i| mix(a, b, i as f64 / (n - 1) as f64, space))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn parse_accepts_hex_and_names() {
        let red = parse("#ff0000").expect("hex should parse");
        assert_eq!(red.to_rgba8().r, 255);
        assert_eq!(red.to_rgba8().g, 0);

        let named = parse("rebeccapurple").expect("css name should parse");
        assert_eq!(to_hex(named), "#663399");

        assert!(parse("not-a-color").is_none());
    }

    #[test]
    fn hex_round_trips_opaque_colors() {
        assert_eq!(to_hex(css::BLACK), "#000000");
        assert_eq!(to_hex(css::WHITE), "#ffffff");
    }

    #[test]
    fn mix_hits_both_endpoints() {
        for space in [GradientSpace::Rgb, GradientSpace::Oklch] {
            let at0 = mix(css::TOMATO, css::TEAL, 0.0, space);
            let at1 = mix(css::TOMATO, css::TEAL, 1.0, space);
            assert_eq!(at0.to_rgba8(), css::TOMATO.to_rgba8());
            assert_eq!(at1.to_rgba8(), css::TEAL.to_rgba8());
        }
    }

    #[test]
    fn luminance_orders_black_gray_white() {
        let black = luminance(css::BLACK);
        let gray = luminance(Color::from_rgb8(128, 128, 128));
        let white = luminance(css::WHITE);
        assert!(black < gray);
        assert!(gray < white);
        assert!((black - 0.0).abs() < 1e-6);
        assert!((white - 1.0).abs() < 1e-6);
    }

    #[test]
    fn gradient_samples_cover_the_requested_count() {
        let samples = gradient_samples(css::BLACK, css::WHITE, 5, GradientSpace::Rgb);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].to_rgba8(), css::BLACK.to_rgba8());
        assert_eq!(samples[4].to_rgba8(), css::WHITE.to_rgba8());
        assert!(gradient_samples(css::BLACK, css::WHITE, 0, GradientSpace::Rgb).is_empty());
    }
}
