// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales.
//!
//! A scale maps a data domain onto a visual range expressed in unit-tagged
//! values. Continuous scales additionally invert, generate "nice" ticks and
//! optionally clamp. All scales are plain values: cloning yields a fully
//! independent instance, and the chaining mutators (`nice`, `clamped`,
//! `with_base`) consume and return the receiver.
//!
//! Determinism rules shared by every scale:
//! - a NaN input maps forward to the range start and inverts to the domain
//!   start;
//! - degenerate domains (`d0 == d1`) and degenerate or reversed ranges never
//!   divide by zero;
//! - invalid queries (a non-positive value on a positive log domain, a
//!   negative parameter under a fractional power) produce NaN, collapsed to
//!   zero when clamping is enabled.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use plottir_core::UnitValue;

use crate::time::{self, Instant, TimeBucket};

/// Identifies the concrete variant behind a scale value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Continuous linear scale.
    Linear,
    /// Continuous logarithmic scale.
    Log,
    /// Continuous power scale.
    Pow,
    /// Power scale preset with exponent one-half.
    Sqrt,
    /// Continuous time scale over absolute instants.
    Time,
    /// Categorical scale mapping categories to arbitrary outputs.
    Ordinal,
    /// Categorical scale mapping categories to width-bearing bands.
    Band,
    /// Categorical scale mapping categories to zero-width positions.
    Point,
    /// Two-anchor continuous color scale.
    SequentialColor,
    /// Three-anchor continuous color scale split at a midpoint.
    DivergingColor,
    /// Palette-cycling categorical color scale.
    CategoricalColor,
}

fn sanitize_domain(domain: (f64, f64)) -> (f64, f64) {
    if domain.0.is_finite() && domain.1.is_finite() {
        domain
    } else {
        (0.0, 1.0)
    }
}

fn check_range(range: (UnitValue, UnitValue)) -> (UnitValue, UnitValue) {
    assert_eq!(range.0.unit, range.1.unit, "range unit tags must match");
    range
}

/// Largest nice step (1/2/5 times a power of ten) not exceeding `raw`.
fn nice_step_down(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10_f64.powf(power);
    let frac = raw / base;
    let nice = if frac >= 5.0 {
        5.0
    } else if frac >= 2.0 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Nice step closest to `raw`.
///
/// The candidate set includes 2.5 so that a request like five ticks over
/// `[0, 100]` lands on a step of 25 rather than sliding down to 20.
fn nice_step_nearest(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10_f64.powf(power);
    let frac = raw / base;
    const CANDIDATES: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
    let mut best = CANDIDATES[0];
    for c in CANDIDATES {
        if (frac - c).abs() < (frac - best).abs() {
            best = c;
        }
    }
    best * base
}

/// Emits ticks at multiples of a nice step covering `[d0, d1]`.
fn linear_ticks(d0: f64, d1: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if d0 == d1 {
        return alloc::vec![d0];
    }
    let (min, max) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let raw = (max - min) / count.max(2).saturating_sub(1) as f64;
    let step = nice_step_nearest(raw);
    if step == 0.0 {
        return alloc::vec![min, max];
    }
    let i0 = (min / step - 1.0e-9).ceil();
    let i1 = (max / step + 1.0e-9).floor();
    if !i0.is_finite() || !i1.is_finite() || i1 < i0 {
        return alloc::vec![min, max];
    }
    let n = {
        let n_f = (i1 - i0).min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "non-negative and capped at 10k"
        )]
        {
            n_f as u64
        }
    };
    (0..=n).map(|i| (i0 + i as f64) * step).collect()
}

/// Expands `[d0, d1]` outward to multiples of a rounded-down nice step.
fn nice_linear_domain(d0: f64, d1: f64, count: usize) -> (f64, f64) {
    if d0 == d1 {
        return (d0, d1);
    }
    let reversed = d0 > d1;
    let (min, max) = if reversed { (d1, d0) } else { (d0, d1) };
    let raw = (max - min) / count.max(2).saturating_sub(1) as f64;
    let step = nice_step_down(raw);
    if step == 0.0 {
        return (d0, d1);
    }
    let lo = (min / step).floor() * step;
    let hi = (max / step).ceil() * step;
    if reversed { (hi, lo) } else { (lo, hi) }
}

/// A linear mapping from a continuous domain onto a unit-tagged range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (UnitValue, UnitValue),
    clamp: bool,
}

impl LinearScale {
    /// Creates a linear scale.
    ///
    /// Non-finite domain endpoints are replaced by `(0, 1)`.
    ///
    /// Panics if the range endpoints carry different unit tags.
    pub fn new(domain: (f64, f64), range: (UnitValue, UnitValue)) -> Self {
        Self {
            domain: sanitize_domain(domain),
            range: check_range(range),
            clamp: false,
        }
    }

    /// Enables or disables clamping of out-of-domain queries.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Expands the domain outward to nice step multiples.
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = nice_linear_domain(self.domain.0, self.domain.1, count);
        self
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (UnitValue, UnitValue) {
        self.range
    }

    /// Returns [`ScaleKind::Linear`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }

    /// Fractional position of `v` in the domain, before the range applies.
    pub fn forward_normalized(&self, v: f64) -> f64 {
        if v.is_nan() {
            return 0.0;
        }
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.0;
        }
        let t = (v - d0) / denom;
        if self.clamp { t.clamp(0.0, 1.0) } else { t }
    }

    /// Maps a domain value into the range.
    pub fn forward(&self, v: f64) -> UnitValue {
        let t = self.forward_normalized(v);
        self.range.0.lerp(self.range.1, t)
    }

    /// Maps a range value back into the domain.
    ///
    /// Panics if the unit tag differs from the range's.
    pub fn invert(&self, v: UnitValue) -> f64 {
        assert_eq!(v.unit, self.range.0.unit, "unit tags must match");
        if v.value.is_nan() {
            return self.domain.0;
        }
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let denom = if r1 - r0 == 0.0 { 1.0 } else { r1 - r0 };
        let mut t = (v.value - r0) / denom;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Returns nice tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A logarithmic mapping from a strictly one-signed domain onto a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    range: (UnitValue, UnitValue),
    base: f64,
    clamp: bool,
}

impl LogScale {
    /// Creates a log scale with base 10.
    ///
    /// A domain touching or straddling zero (or non-finite) is replaced by
    /// `(1, 10)`.
    ///
    /// Panics if the range endpoints carry different unit tags.
    pub fn new(domain: (f64, f64), range: (UnitValue, UnitValue)) -> Self {
        let valid = domain.0.is_finite()
            && domain.1.is_finite()
            && domain.0 != 0.0
            && domain.1 != 0.0
            && (domain.0 > 0.0) == (domain.1 > 0.0);
        Self {
            domain: if valid { domain } else { (1.0, 10.0) },
            range: check_range(range),
            base: 10.0,
            clamp: false,
        }
    }

    /// Sets the log base; invalid bases fall back to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    /// Enables or disables clamping of out-of-domain queries.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (UnitValue, UnitValue) {
        self.range
    }

    /// Returns the log base.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Returns [`ScaleKind::Log`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::Log
    }

    fn negative(&self) -> bool {
        self.domain.0 < 0.0
    }

    fn log_base(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }

    /// Sign-aware log transform: strictly negative domains map through
    /// `-log_b(-v)` so they behave symmetrically to positive ones.
    fn tlog(&self, v: f64) -> f64 {
        if self.negative() {
            -self.log_base(-v)
        } else {
            self.log_base(v)
        }
    }

    fn valid_query(&self, v: f64) -> bool {
        if self.negative() { v < 0.0 } else { v > 0.0 }
    }

    /// Fractional position of `v` in the domain, before the range applies.
    ///
    /// Invalid queries (zero or the wrong sign) produce NaN, or 0 when
    /// clamping is enabled.
    pub fn forward_normalized(&self, v: f64) -> f64 {
        if v.is_nan() {
            return 0.0;
        }
        if !self.valid_query(v) {
            return if self.clamp { 0.0 } else { f64::NAN };
        }
        let l0 = self.tlog(self.domain.0);
        let l1 = self.tlog(self.domain.1);
        let denom = l1 - l0;
        if denom == 0.0 {
            return 0.0;
        }
        let t = (self.tlog(v) - l0) / denom;
        if self.clamp { t.clamp(0.0, 1.0) } else { t }
    }

    /// Maps a domain value into the range.
    pub fn forward(&self, v: f64) -> UnitValue {
        if v.is_nan() {
            return self.range.0;
        }
        let t = self.forward_normalized(v);
        if t.is_nan() {
            return UnitValue::new(f64::NAN, self.range.0.unit);
        }
        self.range.0.lerp(self.range.1, t)
    }

    /// Maps a range value back into the domain.
    ///
    /// Panics if the unit tag differs from the range's.
    pub fn invert(&self, v: UnitValue) -> f64 {
        assert_eq!(v.unit, self.range.0.unit, "unit tags must match");
        if v.value.is_nan() {
            return self.domain.0;
        }
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let denom = if r1 - r0 == 0.0 { 1.0 } else { r1 - r0 };
        let mut t = (v.value - r0) / denom;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        let l0 = self.tlog(self.domain.0);
        let l1 = self.tlog(self.domain.1);
        let l = l0 + t * (l1 - l0);
        if self.negative() {
            -self.base.powf(-l)
        } else {
            self.base.powf(l)
        }
    }

    /// Expands the domain outward to integer powers of the base.
    pub fn nice(mut self, _count: usize) -> Self {
        let neg = self.negative();
        let (d0, d1) = self.domain;
        let (mut lo, mut hi) = if neg { (-d1, -d0) } else { (d0, d1) };
        let reversed = lo > hi;
        if reversed {
            core::mem::swap(&mut lo, &mut hi);
        }
        let lo = self.base.powf(self.log_base(lo).floor());
        let hi = self.base.powf(self.log_base(hi).ceil());
        let (lo, hi) = if reversed { (hi, lo) } else { (lo, hi) };
        self.domain = if neg { (-hi, -lo) } else { (lo, hi) };
        self
    }

    /// Returns tick values: integer powers of the base within the domain,
    /// enriched with mantissa multiples (2–9) when base 10 yields fewer
    /// than `count` powers.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let neg = self.negative();
        let (d0, d1) = self.domain;
        let (mut lo, mut hi) = if neg { (-d1, -d0) } else { (d0, d1) };
        if lo > hi {
            core::mem::swap(&mut lo, &mut hi);
        }

        let to_exp = |x: f64, up: bool| -> i32 {
            let e = self.log_base(x);
            let e = if up { (e - 1.0e-9).ceil() } else { (e + 1.0e-9).floor() };
            #[allow(clippy::cast_possible_truncation, reason = "clamped to a small exponent range")]
            {
                e.clamp(-308.0, 308.0) as i32
            }
        };
        let e_min = to_exp(lo, true);
        let e_max = to_exp(hi, false);

        let mut out = Vec::new();
        for e in e_min..=e_max {
            out.push(self.base.powi(e));
        }

        if self.base == 10.0 && out.len() < count {
            let eps_lo = lo * (1.0 - 1.0e-9);
            let eps_hi = hi * (1.0 + 1.0e-9);
            for e in (e_min - 1)..=e_max {
                for m in 2..=9_u32 {
                    let v = f64::from(m) * 10_f64.powi(e);
                    if v >= eps_lo && v <= eps_hi {
                        out.push(v);
                    }
                }
            }
        }

        if neg {
            for v in &mut out {
                *v = -*v;
            }
        }
        out.sort_by(|a, b| a.partial_cmp(b).expect("log ticks are finite"));
        out.dedup();
        out
    }
}

/// A power-law mapping: the normalized parameter is raised to an exponent
/// before the range interpolation applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowScale {
    domain: (f64, f64),
    range: (UnitValue, UnitValue),
    exponent: f64,
    clamp: bool,
    sqrt: bool,
}

impl PowScale {
    /// Creates a power scale; a non-finite exponent falls back to 1.
    ///
    /// Panics if the range endpoints carry different unit tags.
    pub fn new(domain: (f64, f64), range: (UnitValue, UnitValue), exponent: f64) -> Self {
        Self {
            domain: sanitize_domain(domain),
            range: check_range(range),
            exponent: if exponent.is_finite() { exponent } else { 1.0 },
            clamp: false,
            sqrt: false,
        }
    }

    /// The square-root preset: exponent one-half with its own kind tag.
    pub fn sqrt(domain: (f64, f64), range: (UnitValue, UnitValue)) -> Self {
        let mut s = Self::new(domain, range, 0.5);
        s.sqrt = true;
        s
    }

    /// Enables or disables clamping of out-of-domain queries.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Expands the domain outward to nice step multiples.
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = nice_linear_domain(self.domain.0, self.domain.1, count);
        self
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (UnitValue, UnitValue) {
        self.range
    }

    /// Returns the exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns [`ScaleKind::Sqrt`] for the preset, [`ScaleKind::Pow`] otherwise.
    pub fn kind(&self) -> ScaleKind {
        if self.sqrt { ScaleKind::Sqrt } else { ScaleKind::Pow }
    }

    /// `sign(t) * |t|^exponent`; NaN for a negative parameter under a
    /// fractional exponent.
    fn transform(&self, t: f64) -> f64 {
        if t >= 0.0 {
            t.powf(self.exponent)
        } else if self.exponent == self.exponent.trunc() {
            -((-t).powf(self.exponent))
        } else {
            f64::NAN
        }
    }

    /// Fractional (power-transformed) position of `v`, before the range
    /// applies.
    pub fn forward_normalized(&self, v: f64) -> f64 {
        if v.is_nan() {
            return 0.0;
        }
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.0;
        }
        let mut t = (v - d0) / denom;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        let t = self.transform(t);
        if t.is_nan() && self.clamp { 0.0 } else { t }
    }

    /// Maps a domain value into the range.
    pub fn forward(&self, v: f64) -> UnitValue {
        if v.is_nan() {
            return self.range.0;
        }
        let t = self.forward_normalized(v);
        if t.is_nan() {
            return UnitValue::new(f64::NAN, self.range.0.unit);
        }
        self.range.0.lerp(self.range.1, t)
    }

    /// Maps a range value back into the domain using the reciprocal exponent.
    ///
    /// Panics if the unit tag differs from the range's.
    pub fn invert(&self, v: UnitValue) -> f64 {
        assert_eq!(v.unit, self.range.0.unit, "unit tags must match");
        if v.value.is_nan() {
            return self.domain.0;
        }
        let (r0, r1) = (self.range.0.value, self.range.1.value);
        let denom = if r1 - r0 == 0.0 { 1.0 } else { r1 - r0 };
        let tp = (v.value - r0) / denom;
        let recip = if self.exponent == 0.0 { 1.0 } else { 1.0 / self.exponent };
        let mut t = if tp >= 0.0 {
            tp.powf(recip)
        } else {
            -((-tp).powf(recip))
        };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Returns nice tick values covering the domain (linear spacing).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A time scale: linear interpolation over UTC seconds with calendar-aware
/// ticks and niceing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain: (f64, f64),
    range: (UnitValue, UnitValue),
    clamp: bool,
}

impl TimeScale {
    /// Creates a time scale over two absolute instants.
    ///
    /// Panics if the range endpoints carry different unit tags.
    pub fn new(domain: (Instant, Instant), range: (UnitValue, UnitValue)) -> Self {
        Self {
            domain: sanitize_domain((domain.0.as_unix_seconds(), domain.1.as_unix_seconds())),
            range: check_range(range),
            clamp: false,
        }
    }

    /// Enables or disables clamping of out-of-domain queries.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Expands the domain outward to calendar bucket boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = time::nice_time_span(self.domain.0, self.domain.1, count);
        self
    }

    /// Returns the domain as instants.
    pub fn domain(&self) -> (Instant, Instant) {
        (
            Instant::from_unix_seconds(self.domain.0),
            Instant::from_unix_seconds(self.domain.1),
        )
    }

    /// Returns the domain as UTC seconds.
    pub fn domain_seconds(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (UnitValue, UnitValue) {
        self.range
    }

    /// Returns [`ScaleKind::Time`].
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::Time
    }

    fn linear(&self) -> LinearScale {
        LinearScale {
            domain: self.domain,
            range: self.range,
            clamp: self.clamp,
        }
    }

    /// Fractional position of an instant in the domain.
    pub fn forward_normalized(&self, v: Instant) -> f64 {
        self.linear().forward_normalized(v.as_unix_seconds())
    }

    /// Maps an instant into the range.
    pub fn forward(&self, v: Instant) -> UnitValue {
        self.linear().forward(v.as_unix_seconds())
    }

    /// Maps a raw UTC-seconds value into the range.
    pub fn forward_seconds(&self, secs: f64) -> UnitValue {
        self.linear().forward(secs)
    }

    /// Maps a range value back to an absolute instant (UTC).
    ///
    /// Panics if the unit tag differs from the range's.
    pub fn invert(&self, v: UnitValue) -> Instant {
        Instant::from_unix_seconds(self.linear().invert(v))
    }

    /// Returns bucket-aligned tick instants.
    pub fn ticks(&self, count: usize) -> Vec<Instant> {
        self.ticks_with_bucket(count)
            .0
            .into_iter()
            .map(Instant::from_unix_seconds)
            .collect()
    }

    /// Returns tick values (UTC seconds) plus the bucket they align to.
    pub fn ticks_with_bucket(&self, count: usize) -> (Vec<f64>, TimeBucket) {
        time::time_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A continuous scale of any variant, for code that is generic over the
/// family (axes, adapters).
///
/// Time values travel as UTC seconds through this interface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContinuousScale {
    /// Linear scale.
    Linear(LinearScale),
    /// Log scale.
    Log(LogScale),
    /// Power scale (including the sqrt preset).
    Pow(PowScale),
    /// Time scale.
    Time(TimeScale),
}

impl ContinuousScale {
    /// Maps a domain value into the range.
    pub fn forward(&self, v: f64) -> UnitValue {
        match self {
            Self::Linear(s) => s.forward(v),
            Self::Log(s) => s.forward(v),
            Self::Pow(s) => s.forward(v),
            Self::Time(s) => s.forward_seconds(v),
        }
    }

    /// Fractional position of `v` in the domain.
    pub fn forward_normalized(&self, v: f64) -> f64 {
        match self {
            Self::Linear(s) => s.forward_normalized(v),
            Self::Log(s) => s.forward_normalized(v),
            Self::Pow(s) => s.forward_normalized(v),
            Self::Time(s) => s.forward_normalized(Instant::from_unix_seconds(v)),
        }
    }

    /// Maps a range value back into the domain.
    pub fn invert(&self, v: UnitValue) -> f64 {
        match self {
            Self::Linear(s) => s.invert(v),
            Self::Log(s) => s.invert(v),
            Self::Pow(s) => s.invert(v),
            Self::Time(s) => s.invert(v).as_unix_seconds(),
        }
    }

    /// Returns tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(count),
            Self::Pow(s) => s.ticks(count),
            Self::Time(s) => s.ticks_with_bucket(count).0,
        }
    }

    /// Expands the domain outward to nice boundaries.
    pub fn nice(self, count: usize) -> Self {
        match self {
            Self::Linear(s) => Self::Linear(s.nice(count)),
            Self::Log(s) => Self::Log(s.nice(count)),
            Self::Pow(s) => Self::Pow(s.nice(count)),
            Self::Time(s) => Self::Time(s.nice(count)),
        }
    }

    /// Enables or disables clamping.
    pub fn clamped(self, clamp: bool) -> Self {
        match self {
            Self::Linear(s) => Self::Linear(s.clamped(clamp)),
            Self::Log(s) => Self::Log(s.clamped(clamp)),
            Self::Pow(s) => Self::Pow(s.clamped(clamp)),
            Self::Time(s) => Self::Time(s.clamped(clamp)),
        }
    }

    /// Returns the domain as a pair of reals (UTC seconds for time).
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.domain(),
            Self::Log(s) => s.domain(),
            Self::Pow(s) => s.domain(),
            Self::Time(s) => s.domain_seconds(),
        }
    }

    /// Returns the range.
    pub fn range(&self) -> (UnitValue, UnitValue) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Log(s) => s.range(),
            Self::Pow(s) => s.range(),
            Self::Time(s) => s.range(),
        }
    }

    /// Returns the concrete variant tag.
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear(s) => s.kind(),
            Self::Log(s) => s.kind(),
            Self::Pow(s) => s.kind(),
            Self::Time(s) => s.kind(),
        }
    }
}

impl From<LinearScale> for ContinuousScale {
    fn from(value: LinearScale) -> Self {
        Self::Linear(value)
    }
}

impl From<LogScale> for ContinuousScale {
    fn from(value: LogScale) -> Self {
        Self::Log(value)
    }
}

impl From<PowScale> for ContinuousScale {
    fn from(value: PowScale) -> Self {
        Self::Pow(value)
    }
}

impl From<TimeScale> for ContinuousScale {
    fn from(value: TimeScale) -> Self {
        Self::Time(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use plottir_core::px;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1.0e-9, "{a} != {b}");
    }

    #[test]
    fn linear_maps_the_reference_scenario() {
        let s = LinearScale::new((0.0, 100.0), (px(0.0), px(500.0)));
        assert_close(s.forward(0.0).value, 0.0);
        assert_close(s.forward(50.0).value, 250.0);
        assert_close(s.forward(100.0).value, 500.0);
        assert_close(s.invert(px(250.0)), 50.0);
        assert_eq!(s.ticks(5), alloc::vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn linear_endpoints_map_exactly_even_when_reversed() {
        let s = LinearScale::new((10.0, 20.0), (px(500.0), px(100.0)));
        assert_close(s.forward(10.0).value, 500.0);
        assert_close(s.forward(20.0).value, 100.0);
        assert_close(s.forward(15.0).value, 300.0);
    }

    #[test]
    fn linear_invert_round_trips() {
        let s = LinearScale::new((-3.0, 7.0), (px(0.0), px(350.0)));
        for v in [-3.0, -1.5, 0.0, 2.0, 6.9, 7.0] {
            assert_close(s.invert(s.forward(v)), v);
        }
    }

    #[test]
    fn linear_clamp_clips_out_of_domain_queries() {
        let s = LinearScale::new((0.0, 10.0), (px(0.0), px(100.0))).clamped(true);
        assert_close(s.forward(-5.0).value, 0.0);
        assert_close(s.forward(15.0).value, 100.0);
        let unclamped = LinearScale::new((0.0, 10.0), (px(0.0), px(100.0)));
        assert_close(unclamped.forward(15.0).value, 150.0);
    }

    #[test]
    fn linear_degenerate_domain_collapses_to_range_start() {
        let s = LinearScale::new((4.0, 4.0), (px(10.0), px(90.0)));
        assert_close(s.forward(4.0).value, 10.0);
        assert_eq!(s.ticks(7), alloc::vec![4.0]);
    }

    #[test]
    fn linear_nan_maps_to_range_start_and_domain_start() {
        let s = LinearScale::new((0.0, 10.0), (px(5.0), px(105.0)));
        assert_close(s.forward(f64::NAN).value, 5.0);
        assert_close(s.invert(px(f64::NAN)), 0.0);
    }

    #[test]
    fn linear_tick_deltas_are_uniform_and_inside_the_domain() {
        let s = LinearScale::new((0.3, 9.7), (px(0.0), px(100.0)));
        let ticks = s.ticks(10);
        assert!(ticks.len() >= 2);
        let step = ticks[1] - ticks[0];
        for w in ticks.windows(2) {
            assert_close(w[1] - w[0], step);
        }
        for t in &ticks {
            assert!(*t >= 0.3 - 1.0e-9 && *t <= 9.7 + 1.0e-9);
        }
    }

    #[test]
    fn linear_nice_expands_to_step_multiples() {
        let s = LinearScale::new((0.3, 9.7), (px(0.0), px(100.0))).nice(10);
        let (d0, d1) = s.domain();
        assert!(d0 <= 0.3);
        assert!(d1 >= 9.7);
        assert_close(d0, 0.0);
        assert_close(d1, 10.0);
    }

    #[test]
    fn log_maps_the_reference_scenario() {
        let s = LogScale::new((1.0, 1000.0), (px(0.0), px(300.0)));
        assert_close(s.forward(1.0).value, 0.0);
        assert_close(s.forward(10.0).value, 100.0);
        assert_close(s.forward(100.0).value, 200.0);
        assert_close(s.forward(1000.0).value, 300.0);
        let ticks = s.ticks(4);
        for expected in [1.0, 10.0, 100.0, 1000.0] {
            assert!(ticks.contains(&expected), "{expected} missing from {ticks:?}");
        }
    }

    #[test]
    fn log_invert_round_trips() {
        let s = LogScale::new((1.0, 1000.0), (px(0.0), px(300.0)));
        for v in [1.0, 5.0, 10.0, 99.0, 1000.0] {
            assert_close(s.invert(s.forward(v)), v);
        }
    }

    #[test]
    fn log_rejects_non_positive_queries() {
        let s = LogScale::new((1.0, 100.0), (px(0.0), px(100.0)));
        assert!(s.forward(0.0).value.is_nan());
        assert!(s.forward(-3.0).value.is_nan());
        let clamped = s.clamped(true);
        assert_close(clamped.forward(0.0).value, 0.0);
    }

    #[test]
    fn log_supports_strictly_negative_domains() {
        let s = LogScale::new((-1000.0, -1.0), (px(0.0), px(300.0)));
        assert_close(s.forward(-1000.0).value, 0.0);
        assert_close(s.forward(-1.0).value, 300.0);
        assert_close(s.forward(-10.0).value, 200.0);
        assert_close(s.invert(px(200.0)), -10.0);
    }

    #[test]
    fn log_nice_rounds_to_integer_powers() {
        let s = LogScale::new((3.0, 400.0), (px(0.0), px(100.0))).nice(5);
        assert_close(s.domain().0, 1.0);
        assert_close(s.domain().1, 1000.0);
    }

    #[test]
    fn log_ticks_enrich_with_mantissa_multiples_when_sparse() {
        let s = LogScale::new((1.0, 10.0), (px(0.0), px(100.0)));
        let ticks = s.ticks(10);
        assert_eq!(
            ticks,
            alloc::vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
    }

    #[test]
    fn log_invalid_base_falls_back_to_ten() {
        let s = LogScale::new((1.0, 100.0), (px(0.0), px(100.0))).with_base(1.0);
        assert_close(s.base(), 10.0);
    }

    #[test]
    fn pow_maps_the_reference_scenario() {
        let s = PowScale::new((0.0, 100.0), (px(0.0), px(500.0)), 2.0);
        assert_close(s.forward(50.0).value, 125.0);
        assert_close(s.forward(100.0).value, 500.0);
    }

    #[test]
    fn pow_invert_uses_the_reciprocal_exponent() {
        let s = PowScale::new((0.0, 100.0), (px(0.0), px(500.0)), 2.0);
        for v in [0.0, 25.0, 50.0, 100.0] {
            assert_close(s.invert(s.forward(v)), v);
        }
    }

    #[test]
    fn sqrt_preset_keeps_its_own_kind() {
        let s = PowScale::sqrt((0.0, 100.0), (px(0.0), px(100.0)));
        assert_eq!(s.kind(), ScaleKind::Sqrt);
        assert_close(s.exponent(), 0.5);
        assert_close(s.forward(25.0).value, 50.0);
    }

    #[test]
    fn pow_negative_parameter_with_fractional_exponent_fails() {
        let s = PowScale::new((10.0, 20.0), (px(0.0), px(100.0)), 0.5);
        assert!(s.forward(5.0).value.is_nan());
        let clamped = s.clamped(true);
        assert_close(clamped.forward(5.0).value, 0.0);
    }

    #[test]
    fn time_maps_the_reference_scenario() {
        let s = TimeScale::new(
            (Instant::from_ymd(2024, 1, 1), Instant::from_ymd(2024, 12, 31)),
            (px(0.0), px(365.0)),
        );
        let jul = s.forward(Instant::from_ymd(2024, 7, 1)).value;
        assert!((jul - 182.0).abs() <= 1.0, "expected about 182px, got {jul}");
        let ticks = s.ticks(12);
        assert_eq!(ticks.len(), 12);
    }

    #[test]
    fn time_invert_reconstructs_the_instant() {
        let s = TimeScale::new(
            (Instant::from_ymd(2024, 1, 1), Instant::from_ymd(2025, 1, 1)),
            (px(0.0), px(1000.0)),
        );
        let t = Instant::from_ymd_hms(2024, 6, 15, 12, 0, 0);
        let back = s.invert(s.forward(t));
        assert!((back.as_unix_seconds() - t.as_unix_seconds()).abs() < 1.0);
    }

    #[test]
    fn continuous_dispatch_agrees_with_the_concrete_scale() {
        let lin = LinearScale::new((0.0, 10.0), (px(0.0), px(100.0)));
        let s: ContinuousScale = lin.into();
        assert_close(s.forward(5.0).value, lin.forward(5.0).value);
        assert_eq!(s.kind(), ScaleKind::Linear);
        assert_eq!(s.ticks(5), lin.ticks(5));
    }
}
