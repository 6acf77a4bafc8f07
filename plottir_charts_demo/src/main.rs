// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `plottir`.
//!
//! Renders one SVG per chart family into `target/plottir_demos/` and prints
//! a braille line chart to stdout.

mod svg;

use kurbo::Rect;
use plottir_charts::{
    BarChart, BoxChart, Candle, CandlestickChart, HierarchyNode, LineChart, PieChart, SankeyChart,
    SankeyLink, SankeyNode, SunburstChart, TreemapChart, ViolinChart, WeeksHeatmapChart,
};
use plottir_charts::Instant;
use plottir_core::{Primitive, emit_all};
use plottir_term::{ColorDepth, TermSurface};

use crate::svg::SvgSink;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 360.0;

fn write_svg(name: &str, primitives: &[Primitive]) -> std::io::Result<()> {
    let mut sink = SvgSink::new(WIDTH, HEIGHT);
    emit_all(primitives, &mut sink);
    let dir = std::path::Path::new("target/plottir_demos");
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join(format!("{name}.svg")), sink.finish())
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, WIDTH, HEIGHT)
}

fn main() -> std::io::Result<()> {
    let bar = BarChart::stacked(
        ["Q1", "Q2", "Q3", "Q4"],
        vec![
            ("north".into(), vec![12.0, 14.0, 9.0, 16.0]),
            ("south".into(), vec![7.0, 9.0, 11.0, 8.0]),
        ],
    );
    write_svg("bar", &bar.primitives(bounds()))?;

    let line = LineChart::new(
        (0..60)
            .map(|i| {
                let x = f64::from(i) * 0.25;
                (x, (x.sin() + 1.2) * 40.0 + x)
            })
            .collect(),
    )
    .with_smooth(true)
    .with_gradient(true);
    write_svg("line", &line.primitives(bounds()))?;

    let pie = PieChart::new(vec![
        ("rust".into(), 48.0),
        ("go".into(), 22.0),
        ("python".into(), 18.0),
        ("other".into(), 12.0),
    ])
    .with_inner_fraction(0.55);
    write_svg("donut", &pie.primitives(bounds()))?;

    let tree = HierarchyNode::parent(
        "root",
        vec![
            HierarchyNode::parent(
                "core",
                vec![
                    HierarchyNode::leaf("scale", 12.0),
                    HierarchyNode::leaf("axis", 6.0),
                    HierarchyNode::leaf("stats", 5.0),
                ],
            ),
            HierarchyNode::parent(
                "layout",
                vec![
                    HierarchyNode::leaf("treemap", 7.0),
                    HierarchyNode::leaf("sankey", 4.0),
                ],
            ),
            HierarchyNode::leaf("term", 8.0),
        ],
    );
    write_svg("treemap", &TreemapChart::new(tree.clone()).primitives(bounds()))?;
    write_svg("sunburst", &SunburstChart::new(tree).primitives(bounds()))?;

    let sankey = SankeyChart::new(
        vec![
            SankeyNode::new("coal"),
            SankeyNode::new("solar"),
            SankeyNode::new("grid"),
            SankeyNode::new("homes"),
            SankeyNode::new("industry"),
        ],
        vec![
            SankeyLink::new(0, 2, 40.0),
            SankeyLink::new(1, 2, 25.0),
            SankeyLink::new(2, 3, 35.0),
            SankeyLink::new(2, 4, 30.0),
        ],
    );
    write_svg("sankey", &sankey.primitives(bounds()))?;

    let groups = vec![
        ("alpha".into(), (0..40).map(|i| f64::from(i % 13) + 2.0).collect()),
        ("beta".into(), (0..40).map(|i| f64::from(i % 7) * 2.0).collect()),
    ];
    write_svg("box", &BoxChart::new(groups.clone()).primitives(bounds()))?;
    write_svg("violin", &ViolinChart::new(groups).primitives(bounds()))?;

    let candles: Vec<Candle> = (0..40)
        .map(|i| {
            let base = 100.0 + 8.0 * (f64::from(i) * 0.4).sin() + f64::from(i % 5);
            Candle::new(base, base + 3.0, base - 3.0, base + f64::from(i % 3) - 1.0)
        })
        .collect();
    write_svg(
        "candles",
        &CandlestickChart::new(candles)
            .with_bollinger(10, 2.0)
            .primitives(bounds()),
    )?;

    let days: Vec<(Instant, f64)> = (0..180)
        .map(|i| {
            (
                Instant::from_unix_seconds(f64::from(i) * 86_400.0 + 1.7e9),
                f64::from(i % 11),
            )
        })
        .collect();
    write_svg("weeks", &WeeksHeatmapChart::new(days).primitives(bounds()))?;

    // Terminal rendering of the same line data.
    let mut surface = TermSurface::new(72, 18);
    let term_line = LineChart::new(
        (0..72)
            .map(|i| {
                let x = f64::from(i) * 0.2;
                (x, (x.sin() + 1.1) * 30.0)
            })
            .collect(),
    );
    let term_bounds = Rect::new(0.0, 0.0, surface.pixel_width(), surface.pixel_height());
    emit_all(&term_line.primitives(term_bounds), &mut surface);
    println!("{}", surface.render(ColorDepth::TrueColor));

    println!("wrote SVG demos to target/plottir_demos/");
    Ok(())
}
