//! Error types for the almanac-clock crate.

use chrono::{DateTime, TimeDelta, Utc};

/// Error type for all fallible clock reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Returned when shifting an instant leaves the representable range.
    #[error("instant out of range: {instant} shifted by {delta}")]
    OutOfRange {
        /// The instant that was being shifted.
        instant: DateTime<Utc>,
        /// The shift that could not be applied.
        delta: TimeDelta,
    },

    /// Returned when scaling an elapsed duration overflows.
    #[error("duration overflow: {delta} scaled by {factor}")]
    DurationOverflow {
        /// The elapsed duration being scaled.
        delta: TimeDelta,
        /// The scale factor.
        factor: i32,
    },

    /// Returned when a time source cannot report the current time.
    #[error("clock unavailable: {reason}")]
    Unavailable {
        /// Why the time source failed.
        reason: String,
    },
}
