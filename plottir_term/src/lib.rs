// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terminal rasterization for `plottir` primitive streams.
//!
//! Line work is rendered into braille cells (a 2x4 sub-pixel grid per
//! character), filled regions into block-shade characters, and colors into
//! ANSI escape sequences at 16-color, 256-color or 24-bit depth depending
//! on terminal capability.

#![no_std]

extern crate alloc;

mod ansi;
mod blocks;
mod braille;
mod surface;

pub use ansi::{ColorDepth, RESET, fg, to_ansi16, to_ansi256};
pub use blocks::{SHADES, shade};
pub use braille::BrailleGrid;
pub use surface::TermSurface;
