//! Principle 2: Open/Closed
//! Example: A single area function that must be edited for every new shape
//!
//! Run with: cargo run --bin p2_open_closed_violation

use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::open_closed::type_checked::{calculate_total_area, ShapeKind};

fn main() -> ExitCode {
    demo::run("Open/Closed (violated)", |out| {
        let shapes = [
            ShapeKind::Circle { radius: 2.0 },
            ShapeKind::Square { length: 5.0 },
        ];
        writeln!(out, "{}", calculate_total_area(&shapes))?;
        Ok(())
    })
}
