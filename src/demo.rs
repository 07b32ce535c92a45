//! Shared harness for the `p*_` demo binaries.

use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::logging;

/// Load config, set up logging and colours, then run `body` against stdout.
///
/// Any error is reported on stderr and turned into a failing exit code.
pub fn run<F>(title: &str, body: F) -> ExitCode
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let config = match DemoConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config);
    apply_color(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_with(title, &mut out, body) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            ExitCode::FAILURE
        }
    }
}

/// Colour can only be switched off here; otherwise `colored` decides per terminal.
pub fn apply_color(config: &DemoConfig) {
    if !config.color {
        colored::control::set_override(false);
    }
}

/// Print the heading, run the body, flush.
pub fn run_with<F>(title: &str, out: &mut dyn Write, body: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    writeln!(out, "{}", format!("=== {title} ===").bold())?;
    body(out)?;
    out.flush()?;
    Ok(())
}

pub fn section(out: &mut dyn Write, name: &str) -> Result<()> {
    writeln!(out, "\n{}", format!("--- {name} ---").cyan())?;
    Ok(())
}
