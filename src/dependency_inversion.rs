//! # D: Dependency Inversion
//!
//! `AppModule` depends on the `Storage` abstraction and is handed a
//! concrete backend by its caller; it never builds one itself. Whether a
//! backend satisfies the contract is decided by the compiler:
//!
//! ```compile_fail
//! use solid_principles::dependency_inversion::AppModule;
//!
//! struct NotStorage;
//!
//! let _app = AppModule::new(NotStorage);
//! ```
//!
//! [`tightly_coupled`] is the version that reaches for its database directly.

use std::any::{type_name, Any};
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SolidError};

pub trait Storage {
    fn save(&mut self, data: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn save(&mut self, data: &str) -> Result<()> {
        (**self).save(data)
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn save(&mut self, data: &str) -> Result<()> {
        (**self).save(data)
    }
}

// =============================================================================
// Backends
// =============================================================================

/// Stands in for a real database: reports each save on its writer.
#[derive(Debug)]
pub struct DatabaseModule<W: Write = Stdout> {
    out: W,
}

impl DatabaseModule<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for DatabaseModule<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DatabaseModule<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Storage for DatabaseModule<W> {
    fn save(&mut self, data: &str) -> Result<()> {
        writeln!(self.out, "Saving data to the database: {data}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: Vec<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, data: &str) -> Result<()> {
        self.entries.push(data.to_string());
        Ok(())
    }
}

/// Appends one line per save, creating the file on first use.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn save(&mut self, data: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{data}")?;
        Ok(())
    }
}

// =============================================================================
// The consumer
// =============================================================================

#[derive(Debug)]
pub struct AppModule<S: Storage> {
    storage: S,
}

impl<S: Storage> AppModule<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn save_data(&mut self, data: &str) -> Result<()> {
        debug!(storage = type_name::<S>(), data, "saving data");
        self.storage.save(data)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: Storage + 'static> AppModule<S> {
    /// Accept a type-erased component, as a plugin registry would hand over.
    ///
    /// The check is by concrete type: the component must be exactly an `S`.
    /// Another `Storage` implementation is rejected too, since a `dyn Any`
    /// cannot be asked which traits it implements. Fails before anything is
    /// saved.
    pub fn try_from_component(component: Box<dyn Any>) -> Result<Self> {
        match component.downcast::<S>() {
            Ok(storage) => Ok(Self::new(*storage)),
            Err(_) => {
                let expected = type_name::<S>();
                debug!(expected, "component rejected");
                Err(SolidError::ContractViolation { expected })
            }
        }
    }
}

// =============================================================================
// Without inversion
// =============================================================================

pub mod tightly_coupled {
    use super::{DatabaseModule, Storage};
    use crate::error::Result;

    /// Builds its own database, so it can never be pointed anywhere else.
    #[derive(Debug, Default)]
    pub struct AppModule {
        db: DatabaseModule,
    }

    impl AppModule {
        pub fn new() -> Self {
            Self {
                db: DatabaseModule::new(),
            }
        }

        pub fn save_data(&mut self, data: &str) -> Result<()> {
            self.db.save(data)
        }
    }
}
