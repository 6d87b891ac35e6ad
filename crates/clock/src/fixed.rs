//! Clock that always reports the same instant.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::ClockError;

/// Clock frozen at a single instant, for tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn time(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(self.instant)
    }
}
