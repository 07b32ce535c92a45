use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Returns `false` when a
/// global subscriber was already installed, which is not an error.
pub fn init(config: &DemoConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(use_ansi(config))
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Escape codes only when enabled and stderr is a terminal.
pub fn use_ansi(config: &DemoConfig) -> bool {
    config.color && io::stderr().is_terminal()
}
