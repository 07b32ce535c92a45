//! # S: Single Responsibility
//!
//! `User` knows how to persist itself and nothing else. Recording what
//! happened to it is the job of a separate `ActivityLogger`, so a change
//! to the log format never touches the entity.

use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Persist the user. The only observable effect is the confirmation line.
    pub fn save(&self, out: &mut dyn Write) -> Result<()> {
        debug!(name = %self.name, email = %self.email, "saving user");
        writeln!(out, "User {} saved!", self.name)?;
        Ok(())
    }
}

// =============================================================================
// Activity logging, kept apart from the entity
// =============================================================================

/// Source of "now" for the activity log.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLogger<C: Clock = SystemClock> {
    clock: C,
}

impl ActivityLogger<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ActivityLogger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn log_activity(&self, activity: &str, out: &mut dyn Write) -> Result<()> {
        self.log_activity_at(activity, self.clock.now(), out)
    }

    pub fn log_activity_at(
        &self,
        activity: &str,
        at: DateTime<Utc>,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "[Activity Log] - {} - {}", activity, iso_timestamp(at))?;
        Ok(())
    }
}

/// ISO-8601 in UTC with milliseconds, e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
