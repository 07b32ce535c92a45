use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::interface_segregation::Capability;

// =============================================================================
// Crate-wide error type
// =============================================================================

/// Every failure a unit can report.
///
/// Both contract failures are unconditional: nothing retries them and
/// nothing distinguishes transient from permanent.
#[derive(Error, Debug)]
pub enum SolidError {
    #[error("undefined operation: this machine was not configured to {capability}")]
    UnsupportedOperation { capability: Capability },

    #[error("contract violation: component is not a {expected}")]
    ContractViolation { expected: &'static str },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to load config from {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl SolidError {
    pub fn unsupported(capability: Capability) -> Self {
        Self::UnsupportedOperation { capability }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
