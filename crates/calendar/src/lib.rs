//! # almanac-calendar
//!
//! Month-of-year arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ordinal (1..=12)"] -->|"Month::of()"| B["Month"]
//!     B -->|".plus() / .minus()"| B
//!     B -->|".length(leap)"| C["days in month"]
//!     B -->|".first_day_of_year(leap)"| D["day of year"]
//!     B -->|"Display / Serialize"| E["\"January\" .. \"December\""]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::Month;
//!
//! let aug = Month::of(8).unwrap();
//! assert_eq!(aug.to_string(), "August");
//! assert_eq!(aug.first_day_of_year(false), 213);
//! assert_eq!(Month::December.plus(1), Month::January);
//! assert_eq!(Month::February.length(true), 29);
//! ```
//!
//! The leap-year flag is always supplied by the caller; this crate does not
//! decide which years are leap years.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | `Month` enum, lengths, day-of-year offsets, wraparound arithmetic |
//! | `error` | Error types |

mod error;
mod month;

pub use error::CalendarError;
pub use month::Month;
