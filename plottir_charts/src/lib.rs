// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `plottir_core`.
//!
//! This crate is the core of the toolkit:
//! - **Scales** map data domains (numeric, temporal, categorical) into
//!   unit-tagged visual ranges and generate human-readable ticks.
//! - **Guides** (axes, legends, titles) are built by generating
//!   `plottir_core::Primitive`s.
//! - **Statistics** (percentiles, box summaries, kernel density estimates)
//!   feed the distribution charts.
//! - **Layouts** (squarified treemap, sunburst/icicle partition, circle
//!   packing, dendrograms, Sankey) position hierarchical and flow data.
//! - **Chart adapters** — one module per chart type — compose the above
//!   into primitive streams.
//!
//! Everything is pure: data in, positioned primitives out. Empty or
//! malformed input always yields an empty primitive stream, never a partial
//! render and never a panic.

#![no_std]

extern crate alloc;

mod area_chart;
mod axis;
mod bar_chart;
mod box_chart;
mod candlestick_chart;
mod chord_chart;
mod circular_bar_chart;
mod correlogram_chart;
mod dendrogram;
mod dendrogram_chart;
mod density_chart;
mod error_chart;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod frame;
mod hierarchy;
mod histogram_chart;
mod icicle_chart;
mod layout;
mod legend;
mod line_chart;
mod lollipop_chart;
mod measure;
mod pack;
mod pack_chart;
mod parallel_chart;
mod partition;
mod pie_chart;
mod radar_chart;
mod ridgeline_chart;
mod sankey;
mod sankey_chart;
mod scale;
mod scale_color;
mod scale_discrete;
mod scatter_chart;
mod stats;
mod stream_chart;
mod sunburst_chart;
mod time;
mod title;
mod treemap;
mod treemap_chart;
mod violin_chart;
mod weeks_heatmap_chart;
mod word_cloud_chart;

pub use area_chart::AreaChart;
pub use axis::{AxisOrient, AxisSpec, AxisScale, AxisStyle, GridStyle, StrokeStyle};
pub use bar_chart::BarChart;
pub use box_chart::BoxChart;
pub use candlestick_chart::{Candle, CandleKind, CandlestickChart};
pub use chord_chart::ChordChart;
pub use circular_bar_chart::CircularBarChart;
pub use correlogram_chart::CorrelogramChart;
pub use dendrogram::{DendrogramLayout, DendrogramPoint, dendrogram};
pub use dendrogram_chart::DendrogramChart;
pub use density_chart::DensityChart;
pub use error_chart::{CapStyle, ErrorBarChart};
pub use format::{format_log_tick, format_tick_with_step};
pub use hierarchy::HierarchyNode;
pub use histogram_chart::HistogramChart;
pub use icicle_chart::IcicleChart;
pub use layout::{ChartLayout, ChartLayoutSpec, LegendOrient, LegendPlacement, Size};
pub use legend::{LegendItem, LegendSwatches, LegendSwatchesSpec};
pub use line_chart::LineChart;
pub use lollipop_chart::LollipopChart;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use pack::{PackCircle, circle_pack};
pub use pack_chart::PackChart;
pub use parallel_chart::ParallelChart;
pub use partition::{IcicleOrient, IcicleRect, SunburstArc, icicle, sunburst};
pub use pie_chart::PieChart;
pub use radar_chart::RadarChart;
pub use ridgeline_chart::RidgelineChart;
pub use sankey::{
    SankeyLayout, SankeyLink, SankeyLinkLayout, SankeyNode, SankeyNodeLayout, sankey_layout,
};
pub use sankey_chart::SankeyChart;
pub use scale::{ContinuousScale, LinearScale, LogScale, PowScale, ScaleKind, TimeScale};
pub use scale_color::{CategoricalColorScale, DivergingColorScale, SequentialColorScale};
pub use scale_discrete::{BandScale, OrdinalScale, PointScale};
pub use scatter_chart::{Marker, ScatterChart};
pub use stats::{
    BoxSummary, correlation_matrix, gaussian_kde, mean, pearson, percentile, rolling_mean,
    rolling_std_dev, silverman_bandwidth, std_dev,
};
pub use stream_chart::{StreamBaseline, StreamChart};
pub use sunburst_chart::SunburstChart;
pub use time::{Instant, TimeBucket, format_time, nice_time_span, time_ticks};
pub use title::TitleSpec;
pub use treemap::{TreemapRect, treemap};
pub use treemap_chart::TreemapChart;
pub use violin_chart::ViolinChart;
pub use weeks_heatmap_chart::WeeksHeatmapChart;
pub use word_cloud_chart::{WordCloudChart, WordPlacement};
