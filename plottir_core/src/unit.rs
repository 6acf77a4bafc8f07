// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-tagged magnitudes.
//!
//! Visual ranges are expressed as magnitudes paired with one of a closed set
//! of unit tags. Arithmetic is only defined between values of the same tag;
//! mixing tags is a programming error and panics.

/// The closed set of visual units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Device-independent pixels.
    Px,
    /// Percent of the enclosing viewport.
    Percent,
    /// Font-relative em units.
    Em,
    /// Root-font-relative rem units.
    Rem,
    /// Untagged user-space coordinates.
    User,
}

/// A magnitude tagged with a [`Unit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitValue {
    /// The numeric magnitude.
    pub value: f64,
    /// The unit tag.
    pub unit: Unit,
}

/// Shorthand for a pixel-tagged value.
pub const fn px(value: f64) -> UnitValue {
    UnitValue::new(value, Unit::Px)
}

impl UnitValue {
    /// Creates a new unit value.
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a percent-tagged value.
    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// Creates an em-tagged value.
    pub const fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }

    /// Creates a rem-tagged value.
    pub const fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    /// Creates a user-space value.
    pub const fn user(value: f64) -> Self {
        Self::new(value, Unit::User)
    }

    /// Returns a value with the same tag and the magnitude scaled by `k`.
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.value * k, self.unit)
    }

    /// Adds another value of the same tag.
    ///
    /// Panics if the tags differ.
    pub fn add(self, other: Self) -> Self {
        assert_eq!(self.unit, other.unit, "unit tags must match");
        Self::new(self.value + other.value, self.unit)
    }

    /// Linearly interpolates toward `other` with parameter `t`.
    ///
    /// Panics if the tags differ.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        assert_eq!(self.unit, other.unit, "unit tags must match");
        Self::new(self.value + t * (other.value - self.value), self.unit)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn same_tag_arithmetic() {
        let a = px(10.0);
        let b = px(30.0);
        assert_eq!(a.add(b), px(40.0));
        assert_eq!(a.scaled(2.0), px(20.0));
        assert_eq!(a.lerp(b, 0.5), px(20.0));
    }

    #[test]
    fn lerp_preserves_tag() {
        let a = UnitValue::em(1.0);
        let b = UnitValue::em(2.0);
        assert_eq!(a.lerp(b, 0.25).unit, Unit::Em);
    }

    #[test]
    #[should_panic(expected = "unit tags must match")]
    fn mixing_tags_panics() {
        let _ = px(1.0).add(UnitValue::percent(50.0));
    }
}
