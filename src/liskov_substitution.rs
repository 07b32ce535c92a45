//! # L: Liskov Substitution
//!
//! Anything that is an `Animal` can be handed to `trigger_animal_sound`
//! and the function keeps working: each variant writes exactly one line.

use std::io::Write;
use tracing::debug;

use crate::error::Result;

pub trait Animal {
    fn name(&self) -> &'static str;

    fn sound(&self) -> &'static str {
        "Some generic sound"
    }

    fn make_sound(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.sound())?;
        Ok(())
    }
}

/// An animal that keeps the provided sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericAnimal;

impl Animal for GenericAnimal {
    fn name(&self) -> &'static str {
        "Animal"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Animal for Dog {
    fn name(&self) -> &'static str {
        "Dog"
    }

    fn sound(&self) -> &'static str {
        "Woof! Woof!"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn name(&self) -> &'static str {
        "Cat"
    }

    fn sound(&self) -> &'static str {
        "Meow! Meow!"
    }
}

pub fn trigger_animal_sound(animal: &dyn Animal, out: &mut dyn Write) -> Result<()> {
    debug!(animal = animal.name(), "triggering sound");
    animal.make_sound(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(animal: &dyn Animal) -> String {
        let mut out: Vec<u8> = Vec::new();
        trigger_animal_sound(animal, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_generic_animal_sound() {
        assert_eq!(capture(&GenericAnimal), "Some generic sound\n");
    }

    #[test]
    fn test_dog_sound() {
        assert_eq!(capture(&Dog), "Woof! Woof!\n");
    }

    #[test]
    fn test_cat_sound() {
        assert_eq!(capture(&Cat), "Meow! Meow!\n");
    }

    #[test]
    fn test_each_variant_writes_exactly_one_line() {
        let animals: [&dyn Animal; 3] = [&GenericAnimal, &Dog, &Cat];
        for animal in animals {
            assert_eq!(capture(animal).lines().count(), 1, "{}", animal.name());
        }
    }

    #[test]
    fn test_substitution_in_heterogeneous_collection() {
        let animals: Vec<Box<dyn Animal>> =
            vec![Box::new(GenericAnimal), Box::new(Dog), Box::new(Cat)];
        let mut out: Vec<u8> = Vec::new();
        for animal in &animals {
            trigger_animal_sound(animal.as_ref(), &mut out).unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Some generic sound\nWoof! Woof!\nMeow! Meow!\n"
        );
    }
}
