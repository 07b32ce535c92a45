//! Demo settings, read from an optional TOML file.
//!
//! ```toml
//! color = false
//! log_filter = "solid_principles=debug"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, SolidError};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SOLID_CONFIG";

/// Looked up in the working directory when `SOLID_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "solid.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Colour the demo headings and error messages.
    pub color: bool,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl DemoConfig {
    /// `SOLID_CONFIG`, then `./solid.toml`, then defaults. `NO_COLOR` wins over the file.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };

        if std::env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| SolidError::config(path, err.to_string()))?;
        Self::from_toml(&content).map_err(|err| SolidError::config(path, err.to_string()))
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert!(config.color);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(DemoConfig::from_toml("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = DemoConfig::from_toml("color = false\n").unwrap();
        assert!(!config.color);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DemoConfig::from_toml("colour = true\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"solid_principles=debug\"").unwrap();
        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter, "solid_principles=debug");
        assert!(config.color);
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = \"maybe").unwrap();
        let result = DemoConfig::from_file(file.path());
        assert!(matches!(result, Err(SolidError::Config { .. })));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = DemoConfig::from_file(Path::new("/nonexistent/solid.toml"));
        assert!(matches!(result, Err(SolidError::Config { .. })));
    }
}
