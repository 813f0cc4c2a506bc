// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `trigon classify` command implementation.
//!
//! Classifies three side lengths in-process, without the HTTP gateway.

use std::process::ExitCode;

use clap::Args;
use colored::Colorize;
use trigon_core::{classify, Classification, TriangleReport};

/// Arguments for `trigon classify`.
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// First side length.
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    /// Second side length.
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
    /// Third side length.
    #[arg(allow_negative_numbers = true)]
    pub c: f64,
    /// Print the result in the HTTP response shape.
    #[arg(long)]
    pub json: bool,
}

/// Runs the classify command. Exits 0 for a valid triangle and 1 otherwise.
pub fn run_classify(args: &ClassifyArgs) -> ExitCode {
    let classification = classify(args.a, args.b, args.c);

    if args.json {
        match serde_json::to_string_pretty(&TriangleReport::from(classification)) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{} failed to encode result: {e}", "error:".red().bold());
                return ExitCode::FAILURE;
            }
        }
    } else {
        let line = summary(&classification);
        if classification.is_valid() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }

    if classification.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// One-line human-readable description of a classification.
pub fn summary(classification: &Classification) -> String {
    let sides = classification.sides();
    let sides = format!("{}, {}, {}", sides.a, sides.b, sides.c);
    match classification.outcome() {
        Ok(kind) => format!("{kind} triangle (sides {sides})"),
        Err(rejection) => format!("Invalid triangle: {rejection} (sides {sides})"),
    }
}
