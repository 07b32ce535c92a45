//! Principle 5: Dependency Inversion
//! Example: `AppModule` is handed its storage from outside
//!
//! Run with: cargo run --bin p5_dependency_inversion

use std::any::Any;
use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::dependency_inversion::{AppModule, DatabaseModule, MemoryStorage};

fn main() -> ExitCode {
    demo::run("Dependency Inversion", |out| {
        let storage = DatabaseModule::with_writer(&mut *out);
        let mut app = AppModule::new(storage);
        app.save_data("Hello, DIP!")?;

        demo::section(out, "Swapping in memory storage")?;
        let mut app = AppModule::new(MemoryStorage::new());
        app.save_data("Hello, DIP!")?;
        writeln!(out, "Stored entries: {:?}", app.storage().entries())?;

        demo::section(out, "Handing over something that is not storage")?;
        let component: Box<dyn Any> = Box::new("just a string");
        match AppModule::<MemoryStorage>::try_from_component(component) {
            Ok(_) => writeln!(out, "unexpected: component accepted")?,
            Err(err) => writeln!(out, "Rejected: {err}")?,
        }
        Ok(())
    })
}
