//! # almanac-clock
//!
//! Interchangeable time sources behind a single-method [`Clock`] trait.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["SystemClock"] --> C["Clock::time()"]
//!     B["FixedClock"] --> C
//!     C -->|"wrapped by"| D["OffsetClock (+ offset)"]
//!     C -->|"wrapped by"| E["ScaleClock (x scale)"]
//!     D --> C
//!     E --> C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use almanac_clock::{Clock, FixedClock, OffsetClock};
//! use chrono::{DateTime, TimeDelta};
//!
//! let t0 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
//! let clock = OffsetClock::new(Arc::new(FixedClock::new(t0)), TimeDelta::minutes(-30));
//! assert_eq!(clock.time().unwrap(), t0 - TimeDelta::minutes(30));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `clock` | The `Clock` trait and pointer impls |
//! | `system` | Operating-system real-time clock |
//! | `fixed` | Constant clock |
//! | `offset` | Fixed-offset decorator |
//! | `scale` | Time-scaling decorator |
//! | `error` | Error types |

mod clock;
mod error;
mod fixed;
mod offset;
mod scale;
mod system;

pub use clock::Clock;
pub use error::ClockError;
pub use fixed::FixedClock;
pub use offset::OffsetClock;
pub use scale::ScaleClock;
pub use system::SystemClock;
