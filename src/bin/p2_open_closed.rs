//! Principle 2: Open/Closed
//! Example: Extending the shape family without touching `total_area`
//!
//! Run with: cargo run --bin p2_open_closed

use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::open_closed::{total_area, Circle, Rectangle, Shape, Square};

fn main() -> ExitCode {
    demo::run("Open/Closed", |out| {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Circle::new(2.0)), Box::new(Square::new(5.0))];
        writeln!(out, "{}", total_area(&shapes))?;

        demo::section(out, "Adding a Rectangle")?;
        let shapes2: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(2.0)),
            Box::new(Square::new(5.0)),
            Box::new(Rectangle::new(4.0, 3.0)),
        ];
        writeln!(out, "{}", total_area(&shapes2))?;
        Ok(())
    })
}
