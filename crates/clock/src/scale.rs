//! Clock that runs faster or slower than its reference.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::clock::Clock;
use crate::error::ClockError;

/// Clock whose elapsed time is the reference's elapsed time times `scale`.
///
/// The reference is read once at construction to fix the start instant.
/// A scale of 1 tracks the reference, 0 freezes at the start instant, and a
/// negative scale runs backward from it.
#[derive(Clone)]
pub struct ScaleClock {
    reference: Arc<dyn Clock>,
    start: DateTime<Utc>,
    scale: i32,
}

impl ScaleClock {
    /// Wraps `reference`, scaling elapsed time by `scale`.
    ///
    /// # Errors
    ///
    /// Returns the reference clock's error if the start instant cannot be
    /// read.
    pub fn new(reference: Arc<dyn Clock>, scale: i32) -> Result<Self, ClockError> {
        let start = reference.time()?;
        debug!(%start, scale, "scale clock created");
        Ok(Self {
            reference,
            start,
            scale,
        })
    }

    /// Returns the instant recorded at construction.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the scale factor.
    pub fn scale(&self) -> i32 {
        self.scale
    }
}

impl Clock for ScaleClock {
    fn time(&self) -> Result<DateTime<Utc>, ClockError> {
        let elapsed = self.reference.time()?.signed_duration_since(self.start);
        let scaled = elapsed
            .checked_mul(self.scale)
            .ok_or(ClockError::DurationOverflow {
                delta: elapsed,
                factor: self.scale,
            })?;
        self.start
            .checked_add_signed(scaled)
            .ok_or(ClockError::OutOfRange {
                instant: self.start,
                delta: scaled,
            })
    }
}

impl fmt::Debug for ScaleClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleClock")
            .field("start", &self.start)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}
