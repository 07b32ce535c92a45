//! Principle 1: Single Responsibility
//! Example: The entity saves, a separate logger records activity
//!
//! Run with: cargo run --bin p1_single_responsibility

use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::single_responsibility::{ActivityLogger, User};

fn main() -> ExitCode {
    demo::run("Single Responsibility", |out| {
        let user = User::new("Juan", "juan@example.com");
        user.save(out)?;

        let logger = ActivityLogger::new();
        logger.log_activity("User created", out)?;
        Ok(())
    })
}
