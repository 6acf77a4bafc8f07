// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time instants, tick generation and formatting.
//!
//! Time is modeled as UTC seconds since the Unix epoch, with Gregorian
//! civil-date conversion done locally so the crate stays `no_std`. Tick
//! generation picks an interval bucket (seconds through years) from the
//! domain span, then emits instants aligned to that bucket's boundaries;
//! month and year ticks walk real calendar boundaries rather than fixed
//! second counts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;
const SECS_PER_MONTH: f64 = 30.0 * SECS_PER_DAY;
const SECS_PER_YEAR: f64 = 365.0 * SECS_PER_DAY;

/// An absolute instant: UTC seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Instant {
    secs: f64,
}

impl Instant {
    /// Creates an instant from UTC seconds since the Unix epoch.
    pub const fn from_unix_seconds(secs: f64) -> Self {
        Self { secs }
    }

    /// Creates an instant at UTC midnight of the given civil date.
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Self {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// Creates an instant from a civil date and time-of-day (UTC).
    pub fn from_ymd_hms(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        let days = days_from_civil(year, i64::from(month), i64::from(day));
        let sod = i64::from(hour) * 3_600 + i64::from(minute) * 60 + i64::from(second);
        Self {
            secs: (days * 86_400 + sod) as f64,
        }
    }

    /// Returns the UTC seconds since the Unix epoch.
    pub const fn as_unix_seconds(self) -> f64 {
        self.secs
    }

    /// Returns the civil date and time-of-day `(y, m, d, h, min, s)` in UTC.
    pub fn civil(self) -> (i64, u32, u32, u32, u32, u32) {
        let total = {
            let clamped = self.secs.floor().clamp(-9.0e15, 9.0e15);
            #[allow(clippy::cast_possible_truncation, reason = "clamped well inside the i64 range")]
            {
                clamped as i64
            }
        };
        let days = total.div_euclid(86_400);
        let sod = total.rem_euclid(86_400);
        let (y, m, d) = civil_from_days(days);
        let h = sod / 3_600;
        let mi = (sod / 60) % 60;
        let s = sod % 60;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "month/day/time-of-day components are small and non-negative"
        )]
        {
            (y, m as u32, d as u32, h as u32, mi as u32, s as u32)
        }
    }
}

/// The interval bucket a time tick sequence was generated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    /// Second-aligned ticks.
    Seconds,
    /// Minute-aligned ticks.
    Minutes,
    /// Hour-aligned ticks.
    Hours,
    /// Day-aligned ticks (UTC midnight).
    Days,
    /// Ticks on the first day of a month.
    Months,
    /// Ticks on the first day of a year.
    Years,
}

impl TimeBucket {
    fn approx_secs(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Minutes => SECS_PER_MINUTE,
            Self::Hours => SECS_PER_HOUR,
            Self::Days => SECS_PER_DAY,
            Self::Months => SECS_PER_MONTH,
            Self::Years => SECS_PER_YEAR,
        }
    }
}

/// Days since 1970-01-01 for a civil date (proleptic Gregorian).
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date for days since 1970-01-01 (proleptic Gregorian).
fn civil_from_days(z: i64) -> (i64, i64, i64) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

fn month_start_secs(year: i64, month: i64) -> f64 {
    (days_from_civil(year, month, 1) * 86_400) as f64
}

fn add_months(year: i64, month: i64, k: i64) -> (i64, i64) {
    let idx = year * 12 + (month - 1) + k;
    (idx.div_euclid(12), idx.rem_euclid(12) + 1)
}

/// Picks the tick bucket for a span divided into roughly `count` intervals.
fn choose_bucket(span: f64, count: usize) -> TimeBucket {
    let per = span / count.max(1) as f64;
    if per >= SECS_PER_YEAR {
        TimeBucket::Years
    } else if per >= SECS_PER_MONTH {
        TimeBucket::Months
    } else if per >= SECS_PER_DAY {
        TimeBucket::Days
    } else if per >= SECS_PER_HOUR {
        TimeBucket::Hours
    } else if per >= SECS_PER_MINUTE {
        TimeBucket::Minutes
    } else {
        TimeBucket::Seconds
    }
}

fn step_units(span: f64, count: usize, bucket: TimeBucket) -> i64 {
    let raw = span / (count.max(1) as f64 * bucket.approx_secs());
    let rounded = raw.round().clamp(1.0, 1.0e9);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to [1, 1e9]")]
    {
        rounded as i64
    }
}

/// Generates bucket-aligned tick instants (as UTC seconds) for a time domain.
///
/// The emitted count is `ceil(duration / bucket)`-ish and may exceed the
/// request by one; callers wanting exactly `count` ticks should not use a
/// time scale.
pub fn time_ticks(mut min: f64, mut max: f64, count: usize) -> (Vec<f64>, TimeBucket) {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return (Vec::new(), TimeBucket::Seconds);
    }
    if min == max {
        return (alloc::vec![min], TimeBucket::Seconds);
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }

    let span = max - min;
    let bucket = choose_bucket(span, count);
    let units = step_units(span, count, bucket);
    let mut out = Vec::new();

    match bucket {
        TimeBucket::Years => {
            let (y0, _, _, _, _, _) = Instant::from_unix_seconds(min).civil();
            let mut y = if month_start_secs(y0, 1) < min { y0 + 1 } else { y0 };
            loop {
                let t = month_start_secs(y, 1);
                if t > max {
                    break;
                }
                out.push(t);
                y += units;
            }
        }
        TimeBucket::Months => {
            let (y0, m0, _, _, _, _) = Instant::from_unix_seconds(min).civil();
            let (mut y, mut m) = (y0, i64::from(m0));
            if month_start_secs(y, m) < min {
                (y, m) = add_months(y, m, 1);
            }
            loop {
                let t = month_start_secs(y, m);
                if t > max {
                    break;
                }
                out.push(t);
                (y, m) = add_months(y, m, units);
            }
        }
        _ => {
            let step = units as f64 * bucket.approx_secs();
            let eps = step * 1.0e-9;
            let mut v = (min / step).ceil() * step;
            while v <= max + eps {
                out.push(v);
                v += step;
            }
        }
    }

    (out, bucket)
}

/// Expands a time domain outward to the bucket boundaries chosen for `count`.
pub fn nice_time_span(mut min: f64, mut max: f64, count: usize) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() || min == max {
        return (min, max);
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let bucket = choose_bucket(max - min, count);
    match bucket {
        TimeBucket::Years => {
            let (y0, _, _, _, _, _) = Instant::from_unix_seconds(min).civil();
            let lo = month_start_secs(y0, 1);
            let (y1, _, _, _, _, _) = Instant::from_unix_seconds(max).civil();
            let hi0 = month_start_secs(y1, 1);
            let hi = if hi0 < max { month_start_secs(y1 + 1, 1) } else { hi0 };
            (lo, hi)
        }
        TimeBucket::Months => {
            let (y0, m0, _, _, _, _) = Instant::from_unix_seconds(min).civil();
            let lo = month_start_secs(y0, i64::from(m0));
            let (y1, m1, _, _, _, _) = Instant::from_unix_seconds(max).civil();
            let hi0 = month_start_secs(y1, i64::from(m1));
            let hi = if hi0 < max {
                let (y, m) = add_months(y1, i64::from(m1), 1);
                month_start_secs(y, m)
            } else {
                hi0
            };
            (lo, hi)
        }
        _ => {
            let unit = bucket.approx_secs();
            ((min / unit).floor() * unit, (max / unit).ceil() * unit)
        }
    }
}

/// Formats a tick instant according to the bucket it was generated with.
pub fn format_time(secs: f64, bucket: TimeBucket) -> String {
    if !secs.is_finite() {
        return alloc::format!("{secs}");
    }
    let (y, m, d, h, mi, s) = Instant::from_unix_seconds(secs).civil();
    match bucket {
        TimeBucket::Years => alloc::format!("{y}"),
        TimeBucket::Months => alloc::format!("{y}-{m:02}"),
        TimeBucket::Days => alloc::format!("{m:02}-{d:02}"),
        TimeBucket::Hours | TimeBucket::Minutes => alloc::format!("{h:02}:{mi:02}"),
        TimeBucket::Seconds => alloc::format!("{h:02}:{mi:02}:{s:02}"),
    }
}
