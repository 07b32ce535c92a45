//! Principle 3: Liskov Substitution
//! Example: Any `Animal` can stand in where an `Animal` is expected
//!
//! Run with: cargo run --bin p3_liskov_substitution

use std::process::ExitCode;

use solid_principles::demo;
use solid_principles::liskov_substitution::{trigger_animal_sound, Cat, Dog, GenericAnimal};

fn main() -> ExitCode {
    demo::run("Liskov Substitution", |out| {
        trigger_animal_sound(&GenericAnimal, out)?; // Some generic sound
        trigger_animal_sound(&Dog, out)?; // Woof! Woof!
        trigger_animal_sound(&Cat, out)?; // Meow! Meow!
        Ok(())
    })
}
