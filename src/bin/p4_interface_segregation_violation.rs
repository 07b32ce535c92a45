//! Principle 4: Interface Segregation
//! Example: A user who only prints still depends on scan and fax
//!
//! Run with: cargo run --bin p4_interface_segregation_violation

use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::interface_segregation::all_in_one::MultifunctionPrinter;

fn main() -> ExitCode {
    demo::run("Interface Segregation (violated)", |out| {
        let printer = MultifunctionPrinter;
        printer.print("Document", out)?;
        Ok(())
    })
}
