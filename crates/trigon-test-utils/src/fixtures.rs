// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference classification cases.
//!
//! Plain data so the table can drive both direct classifier tests and HTTP
//! tests without tying the fixtures to a particular build of the core types.

pub const POSITIVE_SIDES_ERROR: &str = "All sides must be positive numbers";
pub const IMPOSSIBLE_TRIANGLE_ERROR: &str = "These sides cannot form a valid triangle";

/// One expected classification.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCase {
    pub sides: (f64, f64, f64),
    /// Expected `type` field; empty for rejected sides.
    pub expected_type: &'static str,
    /// Expected `error` field; `None` for valid triangles.
    pub expected_error: Option<&'static str>,
    pub description: &'static str,
    pub category: &'static str,
}

impl ReferenceCase {
    pub fn is_valid(&self) -> bool {
        self.expected_error.is_none()
    }
}

const fn valid(
    sides: (f64, f64, f64),
    expected_type: &'static str,
    description: &'static str,
    category: &'static str,
) -> ReferenceCase {
    ReferenceCase {
        sides,
        expected_type,
        expected_error: None,
        description,
        category,
    }
}

const fn invalid(
    sides: (f64, f64, f64),
    error: &'static str,
    description: &'static str,
    category: &'static str,
) -> ReferenceCase {
    ReferenceCase {
        sides,
        expected_type: "",
        expected_error: Some(error),
        description,
        category,
    }
}

pub const REFERENCE_CASES: &[ReferenceCase] = &[
    valid((5.0, 5.0, 5.0), "Equilateral", "integer sides", "equilateral"),
    valid((2.5, 2.5, 2.5), "Equilateral", "decimal sides", "equilateral"),
    valid((0.1, 0.1, 0.1), "Equilateral", "very small sides", "equilateral"),
    valid((1000.0, 1000.0, 1000.0), "Equilateral", "large sides", "equilateral"),
    valid((0.001, 0.001, 0.001), "Equilateral", "tiny sides", "equilateral"),
    valid((999999.0, 999999.0, 999999.0), "Equilateral", "very large sides", "equilateral"),
    valid((1.0000001, 1.0000001, 1.0000001), "Equilateral", "repeated fractional sides", "equilateral"),
    valid((5.0, 5.0, 3.0), "Isosceles", "a equals b", "isosceles"),
    valid((3.0, 5.0, 5.0), "Isosceles", "b equals c", "isosceles"),
    valid((5.0, 3.0, 5.0), "Isosceles", "a equals c", "isosceles"),
    valid((4.5, 4.5, 3.2), "Isosceles", "decimal sides", "isosceles"),
    valid((0.1, 0.1, 0.15), "Isosceles", "very small sides", "isosceles"),
    valid((0.1, 0.1, 0.1000001), "Isosceles", "nearly equilateral", "isosceles"),
    valid((3.0, 4.0, 5.0), "Scalene", "3-4-5 right triangle", "scalene"),
    valid((7.0, 8.0, 9.0), "Scalene", "integer sides", "scalene"),
    valid((1.5, 2.5, 3.5), "Scalene", "decimal sides", "scalene"),
    valid((6.0, 8.0, 10.0), "Scalene", "6-8-10 right triangle", "scalene"),
    valid((5.0, 12.0, 13.0), "Scalene", "5-12-13 right triangle", "scalene"),
    valid((8.0, 15.0, 17.0), "Scalene", "8-15-17 right triangle", "scalene"),
    valid((9.0, 12.0, 15.0), "Scalene", "9-12-15 right triangle", "scalene"),
    invalid((-1.0, 2.0, 3.0), POSITIVE_SIDES_ERROR, "negative side a", "magnitude"),
    invalid((1.0, -2.0, 3.0), POSITIVE_SIDES_ERROR, "negative side b", "magnitude"),
    invalid((1.0, 2.0, -3.0), POSITIVE_SIDES_ERROR, "negative side c", "magnitude"),
    invalid((-1.0, -2.0, 3.0), POSITIVE_SIDES_ERROR, "two negative sides", "magnitude"),
    invalid((-1.0, -2.0, -3.0), POSITIVE_SIDES_ERROR, "all negative sides", "magnitude"),
    invalid((0.0, 2.0, 3.0), POSITIVE_SIDES_ERROR, "zero side a", "magnitude"),
    invalid((1.0, 0.0, 3.0), POSITIVE_SIDES_ERROR, "zero side b", "magnitude"),
    invalid((1.0, 2.0, 0.0), POSITIVE_SIDES_ERROR, "zero side c", "magnitude"),
    invalid((0.0, 0.0, 0.0), POSITIVE_SIDES_ERROR, "all zero sides", "magnitude"),
    invalid((1.0, 1.0, 10.0), IMPOSSIBLE_TRIANGLE_ERROR, "two short sides", "inequality"),
    invalid((1.0, 2.0, 3.0), IMPOSSIBLE_TRIANGLE_ERROR, "sum equals third side", "inequality"),
    invalid((1.0, 1.0, 2.0), IMPOSSIBLE_TRIANGLE_ERROR, "isosceles degenerate", "inequality"),
    invalid((5.0, 1.0, 1.0), IMPOSSIBLE_TRIANGLE_ERROR, "long first side", "inequality"),
    invalid((10.0, 2.0, 3.0), IMPOSSIBLE_TRIANGLE_ERROR, "long first side, scalene", "inequality"),
    invalid((0.1, 0.2, 0.3), IMPOSSIBLE_TRIANGLE_ERROR, "0.1 + 0.2 rounding", "inequality"),
    invalid((1.1, 2.2, 3.3), IMPOSSIBLE_TRIANGLE_ERROR, "1.1 + 2.2 rounding", "inequality"),
    invalid((1.0, 1.0, 1.999999999999999), IMPOSSIBLE_TRIANGLE_ERROR, "within epsilon of degenerate", "inequality"),
];

/// Cases expected to classify as a triangle.
pub fn valid_cases() -> impl Iterator<Item = &'static ReferenceCase> + Clone {
    REFERENCE_CASES.iter().filter(|c| c.is_valid())
}

/// Cases expected to be rejected.
pub fn invalid_cases() -> impl Iterator<Item = &'static ReferenceCase> {
    REFERENCE_CASES.iter().filter(|c| !c.is_valid())
}
