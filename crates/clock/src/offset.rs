//! Clock that shifts another clock by a fixed duration.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::clock::Clock;
use crate::error::ClockError;

/// Clock reporting a reference clock's time plus a fixed offset.
///
/// Both the reference and the offset are bound at construction and never
/// change. A negative offset reports earlier times; a zero offset makes the
/// wrapper indistinguishable from the reference.
///
/// ```
/// use std::sync::Arc;
///
/// use almanac_clock::{Clock, FixedClock, OffsetClock};
/// use chrono::{DateTime, TimeDelta};
///
/// let t0 = DateTime::from_timestamp(1_000, 0).unwrap();
/// let clock = OffsetClock::new(Arc::new(FixedClock::new(t0)), TimeDelta::seconds(5));
/// assert_eq!(clock.time().unwrap(), t0 + TimeDelta::seconds(5));
/// ```
#[derive(Clone)]
pub struct OffsetClock {
    reference: Arc<dyn Clock>,
    offset: TimeDelta,
}

impl OffsetClock {
    /// Wraps `reference`, shifting every reading by `offset`.
    pub fn new(reference: Arc<dyn Clock>, offset: TimeDelta) -> Self {
        debug!(%offset, "offset clock created");
        Self { reference, offset }
    }

    /// Returns the wrapped clock.
    pub fn reference(&self) -> &Arc<dyn Clock> {
        &self.reference
    }

    /// Returns the offset applied to every reading.
    pub fn offset(&self) -> TimeDelta {
        self.offset
    }
}

impl Clock for OffsetClock {
    /// Errors from the reference clock are returned unchanged.
    fn time(&self) -> Result<DateTime<Utc>, ClockError> {
        let instant = self.reference.time()?;
        instant
            .checked_add_signed(self.offset)
            .ok_or(ClockError::OutOfRange {
                instant,
                delta: self.offset,
            })
    }
}

impl fmt::Debug for OffsetClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffsetClock")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
