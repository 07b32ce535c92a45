//! # I: Interface Segregation
//!
//! Printing, scanning and faxing are separate roles. A
//! `MultifunctionMachine` is assembled from only the roles it needs and
//! reports the rest as unsupported instead of carrying dead methods.
//! [`all_in_one`] is the fat interface every user is forced to depend on.

use std::fmt;
use std::io::Write;
use tracing::debug;

use crate::error::{Result, SolidError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Print,
    Scan,
    Fax,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::Print, Capability::Scan, Capability::Fax];
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Print => "print",
            Capability::Scan => "scan",
            Capability::Fax => "fax",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Role traits and their single-purpose implementations
// =============================================================================

pub trait Print {
    fn print(&self, document: &str, out: &mut dyn Write) -> Result<()>;
}

pub trait Scan {
    fn scan(&self, document: &str, out: &mut dyn Write) -> Result<()>;
}

pub trait Fax {
    fn fax(&self, document: &str, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl Print for Printer {
    fn print(&self, _document: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing document...")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner;

impl Scan for Scanner {
    fn scan(&self, _document: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Scanning document...")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FaxMachine;

impl Fax for FaxMachine {
    fn fax(&self, _document: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending fax...")?;
        Ok(())
    }
}

// =============================================================================
// Composition
// =============================================================================

/// A facade over whichever roles it was built with.
#[derive(Default)]
pub struct MultifunctionMachine {
    printer: Option<Box<dyn Print>>,
    scanner: Option<Box<dyn Scan>>,
    fax: Option<Box<dyn Fax>>,
}

impl MultifunctionMachine {
    pub fn builder() -> MultifunctionMachineBuilder {
        MultifunctionMachineBuilder::default()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Print => self.printer.is_some(),
            Capability::Scan => self.scanner.is_some(),
            Capability::Fax => self.fax.is_some(),
        }
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|&capability| self.supports(capability))
            .collect()
    }

    pub fn print(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        let printer = self.printer.as_deref().ok_or_else(|| unsupported(Capability::Print))?;
        debug!(capability = %Capability::Print, document, "delegating");
        printer.print(document, out)
    }

    pub fn scan(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        let scanner = self.scanner.as_deref().ok_or_else(|| unsupported(Capability::Scan))?;
        debug!(capability = %Capability::Scan, document, "delegating");
        scanner.scan(document, out)
    }

    pub fn fax(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        let fax = self.fax.as_deref().ok_or_else(|| unsupported(Capability::Fax))?;
        debug!(capability = %Capability::Fax, document, "delegating");
        fax.fax(document, out)
    }
}

impl fmt::Debug for MultifunctionMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultifunctionMachine")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

fn unsupported(capability: Capability) -> SolidError {
    debug!(%capability, "capability not configured");
    SolidError::unsupported(capability)
}

#[derive(Default)]
pub struct MultifunctionMachineBuilder {
    machine: MultifunctionMachine,
}

impl MultifunctionMachineBuilder {
    pub fn printer(mut self, printer: impl Print + 'static) -> Self {
        self.machine.printer = Some(Box::new(printer));
        self
    }

    pub fn scanner(mut self, scanner: impl Scan + 'static) -> Self {
        self.machine.scanner = Some(Box::new(scanner));
        self
    }

    pub fn fax(mut self, fax: impl Fax + 'static) -> Self {
        self.machine.fax = Some(Box::new(fax));
        self
    }

    pub fn build(self) -> MultifunctionMachine {
        self.machine
    }
}

// =============================================================================
// The fat interface
// =============================================================================

pub mod all_in_one {
    use std::io::Write;

    use crate::error::Result;

    /// One type, every operation, whether the caller needs it or not.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MultifunctionPrinter;

    impl MultifunctionPrinter {
        pub fn print(&self, _document: &str, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Printing document...")?;
            Ok(())
        }

        pub fn scan(&self, _document: &str, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Scanning document...")?;
            Ok(())
        }

        pub fn fax(&self, _document: &str, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Sending fax...")?;
            Ok(())
        }
    }
}
