// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for cartesian chart adapters: measure the axes, carve
//! the plot rectangle out of the chart bounds, emit the axis primitives.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use plottir_core::{Primitive, UnitValue, px};

use crate::axis::AxisSpec;
use crate::layout::{ChartLayout, ChartLayoutSpec};
use crate::measure::HeuristicTextMeasurer;

/// Outer padding applied by adapters around the whole chart.
pub(crate) const CHART_PADDING: f64 = 8.0;

/// Measures two axis builders against dummy ranges, arranges the plot, and
/// returns the plot rectangle plus the finished axis primitives.
///
/// `build_x` receives the x range `(plot.x0, plot.x1)`, `build_y` the
/// (flipped) y range `(plot.y1, plot.y0)`.
pub(crate) fn arrange_xy(
    bounds: Rect,
    build_x: &dyn Fn((UnitValue, UnitValue)) -> AxisSpec,
    build_y: &dyn Fn((UnitValue, UnitValue)) -> AxisSpec,
) -> (Rect, Vec<Primitive>) {
    let measurer = HeuristicTextMeasurer;
    let dummy = (px(0.0), px(1.0));
    let bottom_h = build_x(dummy).measure(&measurer);
    let left_w = build_y(dummy).measure(&measurer);

    let layout = ChartLayout::arrange(&ChartLayoutSpec {
        view: bounds,
        outer_padding: CHART_PADDING,
        axis_left: Some(left_w),
        axis_bottom: Some(bottom_h),
        ..ChartLayoutSpec::default()
    });
    let plot = layout.plot;

    let x_axis = build_x((px(plot.x0), px(plot.x1)));
    let y_axis = build_y((px(plot.y1), px(plot.y0)));

    let mut prims = Vec::new();
    if let Some(rect) = layout.axis_left {
        prims.extend(y_axis.primitives(plot, rect));
    }
    if let Some(rect) = layout.axis_bottom {
        prims.extend(x_axis.primitives(plot, rect));
    }
    (plot, prims)
}
