//! Principle 4: Interface Segregation
//! Example: Machines composed from only the roles they need
//!
//! Run with: cargo run --bin p4_interface_segregation

use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::interface_segregation::{FaxMachine, MultifunctionMachine, Printer, Scanner};

fn main() -> ExitCode {
    demo::run("Interface Segregation", |out| {
        let machine1 = MultifunctionMachine::builder()
            .printer(Printer)
            .scanner(Scanner)
            .fax(FaxMachine)
            .build();
        let machine2 = MultifunctionMachine::builder()
            .printer(Printer)
            .scanner(Scanner)
            .build();

        machine1.print("Document", out)?;
        machine2.scan("Document", out)?;

        demo::section(out, "Asking machine2 to fax")?;
        match machine2.fax("Document", out) {
            Ok(()) => writeln!(out, "unexpected: machine2 sent a fax")?,
            Err(err) => writeln!(out, "Refused: {err}")?,
        }
        Ok(())
    })
}
