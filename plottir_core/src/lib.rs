// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared primitives for the `plottir` chart toolkit.
//!
//! This crate is the bottom layer of the workspace:
//! - **Unit values** tag magnitudes with the visual unit they are expressed in.
//! - **Primitives** are the positioned geometry charts emit (rectangles,
//!   paths, text, gradients) together with a small style bundle.
//! - **Sinks** consume primitive streams; serialization (SVG, terminal
//!   cells) lives downstream of this crate.
//! - **Color utilities** wrap `peniko::color` for parsing, mixing and
//!   gradient sampling in sRGB or OKLCH.
//!
//! Everything here is pure except the gradient-identifier counter, a single
//! process-wide atomic used to keep gradient definitions unique within an
//! output document.

#![no_std]

extern crate alloc;

mod colorspace;
mod gradient;
mod primitive;
mod sink;
mod style;
mod unit;

pub use colorspace::{GradientSpace, gradient_samples, luminance, mix, parse, to_hex};
pub use gradient::GradientId;
pub use primitive::{Primitive, PrimitiveBuffer, emit_all};
pub use sink::RenderSink;
pub use style::{Paint, Style, TextAnchor, TextBaseline};
pub use unit::{Unit, UnitValue, px};
