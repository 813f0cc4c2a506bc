// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result model shared by the classifier, the HTTP gateway, and the CLI.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Rejection;

/// The three kinds of non-degenerate triangle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum TriangleKind {
    /// All three sides equal.
    Equilateral,
    /// Exactly two sides equal.
    Isosceles,
    /// No two sides equal.
    Scalene,
}

impl TriangleKind {
    /// Wire name of the kind (`"Equilateral"`, `"Isosceles"`, `"Scalene"`).
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Three side lengths as supplied by the caller, valid or not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Sides {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// All six orderings of the sides, starting with the original one.
    pub fn permutations(&self) -> [Sides; 6] {
        let Sides { a, b, c } = *self;
        [
            Sides::new(a, b, c),
            Sides::new(a, c, b),
            Sides::new(b, a, c),
            Sides::new(b, c, a),
            Sides::new(c, a, b),
            Sides::new(c, b, a),
        ]
    }
}

/// Outcome of classifying one set of sides.
///
/// A classification is either a triangle kind or a [`Rejection`], never both,
/// so `is_valid()` agrees with `kind()` and `rejection()` by construction.
/// Serializes to the `{sideA, sideB, sideC, type, isValid, error?}` wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "TriangleReport")]
pub struct Classification {
    sides: Sides,
    outcome: Result<TriangleKind, Rejection>,
}

impl Classification {
    pub(crate) fn accepted(sides: Sides, kind: TriangleKind) -> Self {
        Self {
            sides,
            outcome: Ok(kind),
        }
    }

    pub(crate) fn rejected(sides: Sides, rejection: Rejection) -> Self {
        Self {
            sides,
            outcome: Err(rejection),
        }
    }

    /// The sides echoed back exactly as they were supplied.
    pub fn sides(&self) -> Sides {
        self.sides
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn kind(&self) -> Option<TriangleKind> {
        self.outcome.ok()
    }

    pub fn rejection(&self) -> Option<Rejection> {
        self.outcome.err()
    }

    pub fn outcome(&self) -> Result<TriangleKind, Rejection> {
        self.outcome
    }
}

/// Wire form of a classification result.
///
/// The gateway also builds these directly for transport-level failures
/// (malformed body, non-numeric fields), which never reach the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleReport {
    pub side_a: f64,
    pub side_b: f64,
    pub side_c: f64,
    /// Triangle kind name, empty when invalid.
    #[serde(rename = "type")]
    pub kind: String,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TriangleReport {
    /// An invalid report carrying an arbitrary error message.
    pub fn invalid(sides: Sides, error: impl Into<String>) -> Self {
        Self {
            side_a: sides.a,
            side_b: sides.b,
            side_c: sides.c,
            kind: String::new(),
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

impl From<Classification> for TriangleReport {
    fn from(classification: Classification) -> Self {
        let sides = classification.sides;
        match classification.outcome {
            Ok(kind) => Self {
                side_a: sides.a,
                side_b: sides.b,
                side_c: sides.c,
                kind: kind.as_str().to_string(),
                is_valid: true,
                error: None,
            },
            Err(rejection) => Self::invalid(sides, rejection.message()),
        }
    }
}
