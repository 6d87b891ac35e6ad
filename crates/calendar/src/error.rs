//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Both variants indicate a caller error: an out-of-range ordinal or a
/// string that does not name a month. Neither is transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month ordinal is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid ordinal that was provided.
        month: i32,
    },

    /// Returned when a string is not the English name of a month.
    #[error("unknown month name: {name:?}")]
    UnknownMonthName {
        /// The string that failed to parse.
        name: String,
    },
}
