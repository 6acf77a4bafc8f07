// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chord diagrams: arcs around a circle connected by flow ribbons.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use plottir_core::{Primitive, Style};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::scale_color::CategoricalColorScale;

const GAP: f64 = 0.04;

/// A chord diagram over a square flow matrix (`matrix[i][j]` flows from
/// group `i` to group `j`).
#[derive(Clone, Debug)]
pub struct ChordChart {
    names: Vec<String>,
    matrix: Vec<Vec<f64>>,
}

impl ChordChart {
    /// Creates a chord diagram.
    pub fn new(
        names: impl IntoIterator<Item = impl Into<String>>,
        matrix: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            matrix,
        }
    }

    /// Generates the chart primitives inside `bounds`.
    ///
    /// A non-square matrix or mismatched name count yields an empty
    /// stream.
    pub fn primitives(&self, bounds: Rect) -> Vec<Primitive> {
        let k = self.matrix.len();
        if k == 0 || self.names.len() != k {
            return Vec::new();
        }
        if self.matrix.iter().any(|row| row.len() != k) {
            return Vec::new();
        }

        // Each group's angular share covers its outgoing plus incoming flow.
        let group_totals: Vec<f64> = (0..k)
            .map(|i| {
                let outgoing: f64 = self.matrix[i].iter().map(|v| v.max(0.0)).sum();
                let incoming: f64 = self.matrix.iter().map(|row| row[i].max(0.0)).sum();
                outgoing + incoming
            })
            .collect();
        let total: f64 = group_totals.iter().sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let center = Point::new(bounds.x0 + 0.5 * bounds.width(), bounds.y0 + 0.5 * bounds.height());
        let outer = 0.48 * bounds.width().min(bounds.height());
        let inner = outer * 0.92;
        let circle = Circle::new(center, outer);
        let tau = 2.0 * core::f64::consts::PI;
        let usable = tau - GAP * k as f64;

        // Group arc spans and per-group flow cursors.
        let mut starts = Vec::with_capacity(k);
        let mut cursor = -core::f64::consts::FRAC_PI_2;
        for t in &group_totals {
            starts.push(cursor);
            cursor += usable * t / total + GAP;
        }

        let colors = CategoricalColorScale::with_default_palette(self.names.iter().cloned());
        let mut out = Vec::new();

        for (i, name) in self.names.iter().enumerate() {
            let sweep = usable * group_totals[i] / total;
            let segment = circle.segment(inner, starts[i], sweep);
            out.push(Primitive::Path {
                path: segment.path_elements(0.1).collect(),
                style: Style::fill(colors.forward(name)),
            });
        }

        // Ribbons: each positive cell connects a slice of i's arc to a
        // slice of j's arc, pulled through the circle center.
        let mut cursors = starts.clone();
        let angle_width = |i: usize, v: f64| {
            let share = if group_totals[i] > 0.0 {
                v / group_totals[i]
            } else {
                0.0
            };
            usable * group_totals[i] / total * share
        };
        let mut in_cursors = alloc::vec![0.0_f64; k];
        for i in 0..k {
            in_cursors[i] = starts[i] + angle_width(i, self.matrix[i].iter().map(|v| v.max(0.0)).sum());
        }

        for i in 0..k {
            for j in 0..k {
                let v = self.matrix[i][j].max(0.0);
                if v == 0.0 {
                    continue;
                }
                let a0 = cursors[i];
                let a1 = a0 + angle_width(i, v);
                cursors[i] = a1;
                let b0 = in_cursors[j];
                let b1 = b0 + angle_width(j, v);
                in_cursors[j] = b1;

                let at = |angle: f64| {
                    Point::new(center.x + inner * angle.cos(), center.y + inner * angle.sin())
                };
                let (p0, p1, q0, q1) = (at(a0), at(a1), at(b0), at(b1));
                let mut path = BezPath::new();
                path.move_to(p0);
                path.quad_to(center, q0);
                path.line_to(q1);
                path.quad_to(center, p1);
                path.close_path();
                out.push(Primitive::Path {
                    path,
                    style: Style::fill(colors.forward(&self.names[i]).with_alpha(0.4)),
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

    #[test]
    fn non_square_matrices_yield_an_empty_stream() {
        let chart = ChordChart::new(["a", "b"], alloc::vec![alloc::vec![0.0, 1.0]]);
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 300.0)).is_empty());
    }

    #[test]
    fn arcs_and_ribbons_are_emitted() {
        let chart = ChordChart::new(
            ["a", "b", "c"],
            alloc::vec![
                alloc::vec![0.0, 2.0, 1.0],
                alloc::vec![1.0, 0.0, 1.0],
                alloc::vec![0.0, 0.0, 0.0],
            ],
        );
        let prims = chart.primitives(Rect::new(0.0, 0.0, 300.0, 300.0));
        // Three group arcs plus four positive-flow ribbons.
        assert_eq!(prims.len(), 7);
    }

    #[test]
    fn zero_flow_everywhere_yields_an_empty_stream() {
        let chart = ChordChart::new(["a"], alloc::vec![alloc::vec![0.0]]);
        assert!(chart.primitives(Rect::new(0.0, 0.0, 300.0, 300.0)).is_empty());
    }
}
