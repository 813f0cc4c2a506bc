// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triangle classification under floating-point tolerance.
//!
//! Pure and total: every input, including NaN and infinities, produces a
//! [`Classification`]. Nothing here allocates, logs, or panics.

use crate::error::Rejection;
use crate::types::{Classification, Sides, TriangleKind};

/// Tolerance applied to both the triangle inequality and side equality.
pub const EPSILON: f64 = 1e-10;

/// Classify three side lengths.
///
/// Checks run in order: finiteness, positivity, triangle inequality (with
/// an `EPSILON` band around the degenerate boundary rejected), then kind.
/// Every check is symmetric in its arguments, so any reordering of the sides
/// yields the same validity and kind.
pub fn classify(a: f64, b: f64, c: f64) -> Classification {
    classify_sides(Sides::new(a, b, c))
}

/// [`classify`] for an already-bundled set of sides.
pub fn classify_sides(sides: Sides) -> Classification {
    match check(&sides) {
        Ok(kind) => Classification::accepted(sides, kind),
        Err(rejection) => Classification::rejected(sides, rejection),
    }
}

fn check(sides: &Sides) -> Result<TriangleKind, Rejection> {
    let Sides { a, b, c } = *sides;

    // NaN fails `> 0.0` too, but keep the two causes explicit.
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(Rejection::InvalidMagnitude);
    }
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(Rejection::InvalidMagnitude);
    }

    if violates_inequality(a, b, c) || is_degenerate(a, b, c) {
        return Err(Rejection::GeometricallyImpossible);
    }

    Ok(kind_of(a, b, c))
}

fn violates_inequality(a: f64, b: f64, c: f64) -> bool {
    a + b < c - EPSILON || a + c < b - EPSILON || b + c < a - EPSILON
}

fn is_degenerate(a: f64, b: f64, c: f64) -> bool {
    (a + b - c).abs() < EPSILON || (a + c - b).abs() < EPSILON || (b + c - a).abs() < EPSILON
}

fn kind_of(a: f64, b: f64, c: f64) -> TriangleKind {
    let ab = approx_eq(a, b);
    let bc = approx_eq(b, c);
    let ac = approx_eq(a, c);

    if ab && bc && ac {
        TriangleKind::Equilateral
    } else if ab || bc || ac {
        TriangleKind::Isosceles
    } else {
        TriangleKind::Scalene
    }
}

fn approx_eq(x: f64, y: f64) -> bool {
    (x - y).abs() < EPSILON
}
