// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Financial charts: candlesticks, OHLC bars and Heikin-Ashi candles,
//! with optional Bollinger bands.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Color;
use peniko::color::palette::css;
use plottir_core::{Primitive, Style};

use crate::axis::AxisSpec;
use crate::frame::arrange_xy;
use crate::scale::{ContinuousScale, LinearScale};
use crate::stats::{rolling_mean, rolling_std_dev};

/// One price period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    /// Opening price.
    pub open: f64,
    /// Period high.
    pub high: f64,
    /// Period low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl Candle {
    /// Convenience constructor.
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }
}

/// The candle rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandleKind {
    /// Filled bodies with wicks.
    #[default]
    Candlestick,
    /// Open/close ticks on a high-low bar.
    Ohlc,
    /// Heikin-Ashi smoothed candles.
    HeikinAshi,
}

/// A candlestick / OHLC / Heikin-Ashi chart.
#[derive(Clone, Debug)]
pub struct CandlestickChart {
    candles: Vec<Candle>,
    kind: CandleKind,
    bollinger: Option<(usize, f64)>,
    up: Color,
    down: Color,
    tick_count: usize,
}

impl CandlestickChart {
    /// Creates a candlestick chart; candles are evenly spaced in input
    /// order.
    pub fn new(candles: Vec<Candle>) -> Self {
        Self {
            candles,
            kind: CandleKind::Candlestick,
            bollinger: None,
            up: css::MEDIUM_SEA_GREEN,
            down: css::CRIMSON,
            tick_count: 5,
        }
    }

    /// Sets the candle rendering style.
    pub fn with_kind(mut self, kind: CandleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Overlays Bollinger bands: a period-`n` SMA of the closes flanked by
    /// `k` standard deviations, computed per window.
    pub fn with_bollinger(mut self, period: usize, k: f64) -> Self {
        if period >= 2 && k.is_finite() && k > 0.0 {
            self.bollinger = Some((period, k));
        }
        self
    }

    /// Heikin-Ashi transformation. The first candle keeps its raw open;
    /// every later open is the recursive average of the previous HA open
    /// and close.
    fn heikin_ashi(candles: &[Candle]) -> Vec<Candle> {
        let mut out: Vec<Candle> = Vec::with_capacity(candles.len());
        for (i, c) in candles.iter().enumerate() {
            let ha_close = 0.25 * (c.open + c.high + c.low + c.close);
            let ha_open = if i == 0 {
                c.open
            } else {
                let prev = &out[i - 1];
                0.5 * (prev.open + prev.close)
            };
            out.push(Candle {
                open: ha_open,
                high: c.high.max(ha_open).max(ha_close),
                low: c.low.min(ha_open).min(ha_close),
                close: ha_close,
            });
        }
        out
    }

    /// Generates the chart primitives inside `bounds`.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        if self.candles.is_empty() {
            return Vec::new();
        }
        let candles = match self.kind {
            CandleKind::HeikinAshi => Self::heikin_ashi(&self.candles),
            _ => self.candles.clone(),
        };

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for c in &candles {
            lo = lo.min(c.low);
            hi = hi.max(c.high);
        }
        if !lo.is_finite() {
            return Vec::new();
        }
        let n = candles.len();
        let tick_count = self.tick_count;
        let x1 = n as f64;

        let x_axis = move |range| {
            AxisSpec::bottom(ContinuousScale::Linear(LinearScale::new((0.0, x1), range)))
                .with_tick_count(tick_count.min(n))
        };
        let y_axis = move |range| {
            AxisSpec::left(ContinuousScale::Linear(
                LinearScale::new((lo, hi), range).nice(tick_count),
            ))
            .with_tick_count(tick_count)
        };
        let (plot, mut out) = arrange_xy(bounds, &x_axis, &y_axis);

        let xs = LinearScale::new((0.0, x1), (plottir_core::px(plot.x0), plottir_core::px(plot.x1)));
        let ys = LinearScale::new((lo, hi), (plottir_core::px(plot.y1), plottir_core::px(plot.y0)))
            .nice(self.tick_count);

        let slot = plot.width() / n as f64;
        let body_w = (slot * 0.6).max(1.0);

        for (i, c) in candles.iter().enumerate() {
            let cx = xs.forward(i as f64 + 0.5).value;
            let color = if c.close >= c.open { self.up } else { self.down };
            let rule = Style::stroke(color, 1.0);

            match self.kind {
                CandleKind::Ohlc => {
                    out.push(Primitive::Line {
                        x0: cx,
                        y0: ys.forward(c.low).value,
                        x1: cx,
                        y1: ys.forward(c.high).value,
                        style: rule.clone(),
                    });
                    out.push(Primitive::Line {
                        x0: cx - 0.5 * body_w,
                        y0: ys.forward(c.open).value,
                        x1: cx,
                        y1: ys.forward(c.open).value,
                        style: rule.clone(),
                    });
                    out.push(Primitive::Line {
                        x0: cx,
                        y0: ys.forward(c.close).value,
                        x1: cx + 0.5 * body_w,
                        y1: ys.forward(c.close).value,
                        style: rule,
                    });
                }
                CandleKind::Candlestick | CandleKind::HeikinAshi => {
                    out.push(Primitive::Line {
                        x0: cx,
                        y0: ys.forward(c.low).value,
                        x1: cx,
                        y1: ys.forward(c.high).value,
                        style: rule,
                    });
                    let top = ys.forward(c.open.max(c.close)).value;
                    let bottom = ys.forward(c.open.min(c.close)).value;
                    out.push(Primitive::Rect {
                        x: cx - 0.5 * body_w,
                        y: top,
                        width: body_w,
                        height: (bottom - top).max(1.0),
                        style: Style::fill(color),
                    });
                }
            }
        }

        if let Some((period, k)) = self.bollinger {
            let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
            let sma = rolling_mean(&closes, period);
            let sd = rolling_std_dev(&closes, period);
            if !sma.is_empty() {
                let line = |offset_k: f64| {
                    let mut p = BezPath::new();
                    for (w, (m, s)) in sma.iter().zip(&sd).enumerate() {
                        let i = w + period - 1;
                        let pt = (
                            xs.forward(i as f64 + 0.5).value,
                            ys.forward(m + offset_k * s).value,
                        );
                        if w == 0 {
                            p.move_to(pt);
                        } else {
                            p.line_to(pt);
                        }
                    }
                    p
                };
                let band_style = Style::stroke(css::SLATE_BLUE.with_alpha(0.8), 1.0);
                out.push(Primitive::Path {
                    path: line(0.0),
                    style: Style::stroke(css::SLATE_BLUE, 1.5),
                });
                out.push(Primitive::Path {
                    path: line(k),
                    style: band_style.clone(),
                });
                out.push(Primitive::Path {
                    path: line(-k),
                    style: band_style,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn sample() -> Vec<Candle> {
        alloc::vec![
            Candle::new(10.0, 12.0, 9.0, 11.0),
            Candle::new(11.0, 13.0, 10.0, 12.5),
            Candle::new(12.5, 13.0, 10.5, 11.0),
            Candle::new(11.0, 12.0, 10.0, 11.5),
        ]
    }

    #[test]
    fn empty_input_yields_an_empty_stream() {
        assert!(CandlestickChart::new(Vec::new())
            .primitives(Rect::new(0.0, 0.0, 400.0, 300.0))
            .is_empty());
    }

    #[test]
    fn candlesticks_emit_wick_and_body_per_candle() {
        let prims = CandlestickChart::new(sample()).primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        let bodies = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .count();
        assert_eq!(bodies, 4);
    }

    #[test]
    fn heikin_ashi_first_candle_keeps_the_raw_open() {
        let candles = sample();
        let ha = CandlestickChart::heikin_ashi(&candles);
        assert_eq!(ha[0].open, candles[0].open);
        // Later opens are the recursive HA averages.
        let expected = 0.5 * (ha[0].open + ha[0].close);
        assert!((ha[1].open - expected).abs() < 1.0e-12);
        // HA close is the OHLC mean.
        let c = &candles[1];
        assert!((ha[1].close - 0.25 * (c.open + c.high + c.low + c.close)).abs() < 1.0e-12);
    }

    #[test]
    fn bollinger_bands_add_three_paths_with_true_deviation() {
        let candles: Vec<Candle> = (0..10)
            .map(|i| {
                let v = f64::from(i % 4) + 10.0;
                Candle::new(v, v + 1.0, v - 1.0, v + 0.5)
            })
            .collect();
        let plain = CandlestickChart::new(candles.clone())
            .primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        let banded = CandlestickChart::new(candles)
            .with_bollinger(4, 2.0)
            .primitives(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(banded.len(), plain.len() + 3);
    }
}
