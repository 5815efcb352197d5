//! Time source seam
//!
//! Deadline math and countdown rendering take explicit timestamps; the app
//! feeds them from a [`Clock`] so tests can drive expiry without sleeping.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current UTC time
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
