//! # SOLID Principles in Rust
//!
//! One self-contained unit per principle. The units share nothing; each
//! has its own demo binary.
//!
//! ## S: Single Responsibility
//! - `User` persists itself, `ActivityLogger` records activity
//! - Injectable clock for the log timestamp
//!
//! ## O: Open/Closed
//! - `Shape` trait with `Circle`, `Square`, `Rectangle`
//! - `total_area` never changes when a shape is added
//! - `type_checked`: the match-on-a-tag version that does
//!
//! ## L: Liskov Substitution
//! - `Animal` trait with a provided sound, overridden by `Dog` and `Cat`
//! - `trigger_animal_sound` works for every implementor
//!
//! ## I: Interface Segregation
//! - `Print`, `Scan`, `Fax` role traits
//! - `MultifunctionMachine` built from only the roles it needs
//! - `all_in_one`: the fat interface
//!
//! ## D: Dependency Inversion
//! - `Storage` trait, `DatabaseModule`/`MemoryStorage`/`FileStorage` backends
//! - `AppModule<S: Storage>` receives its backend from the caller
//! - `tightly_coupled`: the version that builds its own database
//!
//! Run a demo with: `cargo run --bin <name>`, e.g. `cargo run --bin p2_open_closed`

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;

pub use error::{Result, SolidError};
