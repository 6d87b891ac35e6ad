//! Real-time clock backed by the operating system.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::ClockError;

/// Clock that reports the system's current UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}
