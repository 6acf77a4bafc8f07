// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ANSI color sequences at three capability levels.
//!
//! Truecolor emits `CSI 38;2;R;G;B m`. The 256-color path down-converts
//! through the 6x6x6 color cube plus the 24-step gray ramp; the 16-color
//! path picks the Euclidean-nearest entry of the fixed base palette.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Terminal color capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorDepth {
    /// The 16-color base palette.
    Ansi16,
    /// The 256-color cube + gray ramp.
    Ansi256,
    /// 24-bit truecolor.
    #[default]
    TrueColor,
}

/// The fixed 16-color palette used for nearest-color matching
/// (standard VGA-ish values).
const PALETTE_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
];

/// Maps RGB to the nearest 16-color palette index (0-15).
pub fn to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let mut best = 0_u8;
    let mut best_d = i32::MAX;
    for (i, (pr, pg, pb)) in PALETTE_16.iter().enumerate() {
        let dr = i32::from(r) - i32::from(*pr);
        let dg = i32::from(g) - i32::from(*pg);
        let db = i32::from(b) - i32::from(*pb);
        let d = dr * dr + dg * dg + db * db;
        if d < best_d {
            best_d = d;
            #[allow(clippy::cast_possible_truncation, reason = "palette has 16 entries")]
            {
                best = i as u8;
            }
        }
    }
    best
}

/// Maps RGB to a 256-color index: grays go to the 24-step ramp
/// (232-255), everything else to the 6x6x6 cube (16-231).
pub fn to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16; // cube black
        }
        if r > 248 {
            return 231; // cube white
        }
        return 232 + (r - 8) / 10;
    }
    let q = |c: u8| -> u8 {
        let level = (u16::from(c) * 5 + 127) / 255;
        #[allow(clippy::cast_possible_truncation, reason = "cube levels are 0..=5")]
        {
            level as u8
        }
    };
    16 + 36 * q(r) + 6 * q(g) + q(b)
}

/// Returns the foreground escape sequence for `color` at the given depth.
pub fn fg(color: Color, depth: ColorDepth) -> String {
    let rgba = color.to_rgba8();
    match depth {
        ColorDepth::TrueColor => {
            alloc::format!("\x1b[38;2;{};{};{}m", rgba.r, rgba.g, rgba.b)
        }
        ColorDepth::Ansi256 => {
            alloc::format!("\x1b[38;5;{}m", to_ansi256(rgba.r, rgba.g, rgba.b))
        }
        ColorDepth::Ansi16 => {
            let idx = to_ansi16(rgba.r, rgba.g, rgba.b);
            let code = if idx < 8 { 30 + u16::from(idx) } else { 90 + u16::from(idx) - 8 };
            alloc::format!("\x1b[{code}m")
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn truecolor_emits_the_rgb_sequence() {
        assert_eq!(fg(css::RED, ColorDepth::TrueColor), "\x1b[38;2;255;0;0m");
        assert_eq!(fg(css::BLACK, ColorDepth::TrueColor), "\x1b[38;2;0;0;0m");
    }

    #[test]
    fn grays_use_the_gray_ramp() {
        assert_eq!(to_ansi256(128, 128, 128), 232 + 12);
        assert_eq!(to_ansi256(0, 0, 0), 16);
        assert_eq!(to_ansi256(255, 255, 255), 231);
    }

    #[test]
    fn saturated_colors_use_the_cube() {
        // Pure red: cube coordinate (5, 0, 0).
        assert_eq!(to_ansi256(255, 0, 0), 16 + 36 * 5);
        // Pure blue: cube coordinate (0, 0, 5).
        assert_eq!(to_ansi256(0, 0, 255), 16 + 5);
    }

    #[test]
    fn sixteen_color_matching_is_euclidean_nearest() {
        assert_eq!(to_ansi16(0, 0, 0), 0);
        assert_eq!(to_ansi16(255, 255, 255), 15);
        assert_eq!(to_ansi16(250, 80, 80), 9); // bright red
        assert_eq!(fg(css::WHITE, ColorDepth::Ansi16), "\x1b[97m");
    }
}
