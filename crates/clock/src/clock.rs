//! The `Clock` capability.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::ClockError;

/// A source of the current instant.
///
/// Consecutive reads need not agree: a real-time clock advances between
/// calls, a fixed clock never does. Implementations hold no state that a
/// read mutates, so one clock can be shared across threads.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError`] if the time source cannot produce an instant.
    fn time(&self) -> Result<DateTime<Utc>, ClockError>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn time(&self) -> Result<DateTime<Utc>, ClockError> {
        (**self).time()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn time(&self) -> Result<DateTime<Utc>, ClockError> {
        (**self).time()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn time(&self) -> Result<DateTime<Utc>, ClockError> {
        (**self).time()
    }
}
