//! Principle 5: Dependency Inversion
//! Example: `AppModule` constructs its own database
//!
//! Run with: cargo run --bin p5_dependency_inversion_violation

use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::dependency_inversion::tightly_coupled::AppModule;

fn main() -> ExitCode {
    demo::run("Dependency Inversion (violated)", |_out| {
        // writes straight to stdout, there is no writer to hand it
        let mut app = AppModule::new();
        app.save_data("Hello, no DIP!")?;
        Ok(())
    })
}
