// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.
//!
//! Axes pick label precision from the tick step so adjacent labels always
//! read distinctly: a step of `2.5` formats with one decimal, `0.25` with
//! two, whole-number steps with none.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using a precision derived from the tick step.
///
/// A zero or non-finite step falls back to Rust's shortest float display
/// (`1` rather than `1.0`).
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    if !step.is_finite() || step == 0.0 {
        return alloc::format!("{v}");
    }
    let decimals = step_decimals(step.abs());
    alloc::format!("{v:.decimals$}")
}

/// Returns the decimal count needed to represent `step` exactly (capped at 9).
fn step_decimals(step: f64) -> usize {
    let mut decimals = 0_usize;
    let mut scaled = step;
    while decimals < 9 {
        let nearest = scaled.round();
        if (scaled - nearest).abs() < 1.0e-9 * scaled.abs().max(1.0) {
            break;
        }
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Formats a log-scale tick value.
///
/// Magnitudes at or beyond `10^4` / `10^-3` use scientific notation
/// (`2e5`, `1e-3`); everything in between uses the plain display.
pub fn format_log_tick(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return alloc::format!("{v}");
    }
    let mag = v.abs();
    if mag >= 1.0e4 || mag <= 1.0e-3 {
        let k = {
            let e = mag.log10().floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
            #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
            {
                e as i32
            }
        };
        let mut k = k;
        let mut mantissa = v / 10_f64.powi(k);
        // Rounding can push the mantissa to the next decade (9.9999... -> 10).
        let rounded = (mantissa * 1.0e6).round() / 1.0e6;
        if rounded.abs() >= 10.0 {
            mantissa = rounded / 10.0;
            k += 1;
        } else {
            mantissa = rounded;
        }
        alloc::format!("{mantissa}e{k}")
    } else {
        alloc::format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn whole_steps_format_without_decimals() {
        assert_eq!(format_tick_with_step(0.0, 25.0), "0");
        assert_eq!(format_tick_with_step(50.0, 25.0), "50");
        assert_eq!(format_tick_with_step(1000.0, 250.0), "1000");
    }

    #[test]
    fn fractional_steps_add_just_enough_decimals() {
        assert_eq!(format_tick_with_step(2.5, 2.5), "2.5");
        assert_eq!(format_tick_with_step(0.25, 0.25), "0.25");
        assert_eq!(format_tick_with_step(0.0, 0.5), "0.0");
    }

    #[test]
    fn zero_step_falls_back_to_shortest_display() {
        assert_eq!(format_tick_with_step(1.0, 0.0), "1");
        assert_eq!(format_tick_with_step(1000.0, 0.0), "1000");
    }

    #[test]
    fn log_ticks_switch_to_scientific_at_the_extremes() {
        assert_eq!(format_log_tick(10000.0), "1e4");
        assert_eq!(format_log_tick(200000.0), "2e5");
        assert_eq!(format_log_tick(0.001), "1e-3");
        assert_eq!(format_log_tick(1000.0), "1000");
        assert_eq!(format_log_tick(5.0), "5");
    }
}
