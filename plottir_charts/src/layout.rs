// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for charts.
//!
//! Measure: guides (axes, legends, titles) report desired thicknesses.
//! Arrange: the plot rectangle is placed inside the view with margins
//! reserved for each guide. Chart adapters use this to translate an outer
//! bounds rectangle into a plot rectangle plus guide rectangles.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in range units.
    pub width: f64,
    /// Height in range units.
    pub height: f64,
}

/// Legend placement relative to the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendOrient {
    /// Outside, to the left of the plot.
    Left,
    /// Outside, to the right of the plot.
    #[default]
    Right,
    /// Outside, above the plot.
    Top,
    /// Outside, below the plot.
    Bottom,
}

/// Legend placement options (orientation + offset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendPlacement {
    /// Which side of the plot the legend occupies.
    pub orient: LegendOrient,
    /// Gap between the axes block and the legend.
    pub offset: f64,
}

impl Default for LegendPlacement {
    fn default() -> Self {
        Self {
            orient: LegendOrient::Right,
            offset: 18.0,
        }
    }
}

/// Layout inputs for a single chart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// The outer view bounds the chart must fit inside.
    pub view: Rect,
    /// Padding applied inside the view on all sides.
    pub outer_padding: f64,
    /// Optional title strip height, reserved above everything else.
    pub title_top: Option<f64>,
    /// Optional left axis thickness.
    pub axis_left: Option<f64>,
    /// Optional right axis thickness.
    pub axis_right: Option<f64>,
    /// Optional top axis thickness.
    pub axis_top: Option<f64>,
    /// Optional bottom axis thickness.
    pub axis_bottom: Option<f64>,
    /// Optional legend, given by its desired size and placement.
    pub legend: Option<(Size, LegendPlacement)>,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// Reserved rectangle for the chart title (if any).
    pub title_top: Option<Rect>,
    /// The plot rectangle.
    pub plot: Rect,
    /// Reserved rectangle for the left axis (if any).
    pub axis_left: Option<Rect>,
    /// Reserved rectangle for the right axis (if any).
    pub axis_right: Option<Rect>,
    /// Reserved rectangle for the top axis (if any).
    pub axis_top: Option<Rect>,
    /// Reserved rectangle for the bottom axis (if any).
    pub axis_bottom: Option<Rect>,
    /// Legend rectangle (if any).
    pub legend: Option<Rect>,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let pad = spec.outer_padding.max(0.0);
        let title_h = spec.title_top.unwrap_or(0.0).max(0.0);
        let left = spec.axis_left.unwrap_or(0.0).max(0.0);
        let right = spec.axis_right.unwrap_or(0.0).max(0.0);
        let top = spec.axis_top.unwrap_or(0.0).max(0.0);
        let bottom = spec.axis_bottom.unwrap_or(0.0).max(0.0);

        let mut margin_left = pad + left;
        let mut margin_right = pad + right;
        let mut margin_top = pad + title_h + top;
        let mut margin_bottom = pad + bottom;

        if let Some((size, placement)) = spec.legend {
            let offset = placement.offset.max(0.0);
            match placement.orient {
                LegendOrient::Left => margin_left += size.width.max(0.0) + offset,
                LegendOrient::Right => margin_right += size.width.max(0.0) + offset,
                LegendOrient::Top => margin_top += size.height.max(0.0) + offset,
                LegendOrient::Bottom => margin_bottom += size.height.max(0.0) + offset,
            }
        }

        let view = spec.view;
        let plot = Rect::new(
            view.x0 + margin_left,
            view.y0 + margin_top,
            (view.x1 - margin_right).max(view.x0 + margin_left),
            (view.y1 - margin_bottom).max(view.y0 + margin_top),
        );

        let axis_left = (left > 0.0).then(|| Rect::new(plot.x0 - left, plot.y0, plot.x0, plot.y1));
        let axis_right =
            (right > 0.0).then(|| Rect::new(plot.x1, plot.y0, plot.x1 + right, plot.y1));
        let axis_top = (top > 0.0).then(|| Rect::new(plot.x0, plot.y0 - top, plot.x1, plot.y0));
        let axis_bottom =
            (bottom > 0.0).then(|| Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + bottom));

        let legend = spec.legend.map(|(size, placement)| {
            let w = size.width.max(0.0);
            let h = size.height.max(0.0);
            let offset = placement.offset.max(0.0);
            match placement.orient {
                LegendOrient::Right => {
                    let x0 = plot.x1 + right + offset;
                    Rect::new(x0, plot.y0, x0 + w, plot.y0 + h)
                }
                LegendOrient::Left => {
                    let x1 = plot.x0 - left - offset;
                    Rect::new(x1 - w, plot.y0, x1, plot.y0 + h)
                }
                LegendOrient::Top => {
                    let y1 = plot.y0 - top - offset;
                    Rect::new(plot.x0, y1 - h, plot.x0 + w, y1)
                }
                LegendOrient::Bottom => {
                    let y0 = plot.y1 + bottom + offset;
                    Rect::new(plot.x0, y0, plot.x0 + w, y0 + h)
                }
            }
        });

        let title_top = (title_h > 0.0).then(|| {
            Rect::new(view.x0, view.y0 + pad, view.x1, view.y0 + pad + title_h)
        });

        Self {
            view,
            title_top,
            plot,
            axis_left,
            axis_right,
            axis_top,
            axis_bottom,
            legend,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn title_and_axes_reserve_space_around_the_plot() {
        let spec = ChartLayoutSpec {
            view: Rect::new(0.0, 0.0, 200.0, 120.0),
            outer_padding: 10.0,
            title_top: Some(20.0),
            axis_left: Some(30.0),
            axis_bottom: Some(18.0),
            ..ChartLayoutSpec::default()
        };

        let layout = ChartLayout::arrange(&spec);
        let title = layout.title_top.expect("missing title rect");
        assert_eq!((title.y0, title.y1), (10.0, 30.0));
        assert_eq!(layout.plot.y0, 10.0 + 20.0);
        assert_eq!(layout.plot.x0, 10.0 + 30.0);
        assert_eq!(layout.plot.y1, 120.0 - 10.0 - 18.0);

        let left = layout.axis_left.expect("missing left axis rect");
        assert_eq!(left.x1, layout.plot.x0);
        assert_eq!(left.width(), 30.0);
    }

    #[test]
    fn legend_margin_comes_out_of_the_plot() {
        let base = ChartLayoutSpec {
            view: Rect::new(0.0, 0.0, 300.0, 100.0),
            ..ChartLayoutSpec::default()
        };
        let with_legend = ChartLayoutSpec {
            legend: Some((
                Size {
                    width: 60.0,
                    height: 40.0,
                },
                LegendPlacement::default(),
            )),
            ..base
        };

        let plain = ChartLayout::arrange(&base);
        let legended = ChartLayout::arrange(&with_legend);
        assert!(legended.plot.x1 < plain.plot.x1);
        let legend = legended.legend.expect("missing legend rect");
        assert!(legend.x0 >= legended.plot.x1);
    }

    #[test]
    fn degenerate_views_never_produce_negative_plots() {
        let spec = ChartLayoutSpec {
            view: Rect::new(0.0, 0.0, 20.0, 10.0),
            axis_left: Some(50.0),
            axis_bottom: Some(50.0),
            ..ChartLayoutSpec::default()
        };
        let layout = ChartLayout::arrange(&spec);
        assert!(layout.plot.width() >= 0.0);
        assert!(layout.plot.height() >= 0.0);
    }
}
