//! Deadline countdown widgets
//!
//! Each countdown renders the time left to its deadline once a second as
//! `<hours>h <minutes>m <seconds>s`, hours wrapping at 24. Past the
//! deadline the display latches to `Expired` no matter how often the
//! shared tick keeps firing.

use chrono::{DateTime, Utc};

/// Display text once a deadline has passed
pub const EXPIRED_LABEL: &str = "Expired";

/// Parse a deadline timestamp as provided by the server (RFC 3339)
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format non-negative remaining seconds, hours wrapping at a day
pub fn format_remaining(total_seconds: i64) -> String {
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

/// A per-element countdown to a fixed deadline
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownTimer {
    deadline: DateTime<Utc>,
    display: String,
    expired: bool,
}

impl CountdownTimer {
    /// Create a countdown and render it immediately
    pub fn new(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mut timer = Self {
            deadline,
            display: String::new(),
            expired: false,
        };
        timer.tick(now);
        timer
    }

    /// The deadline this timer counts down to
    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Recompute the display for the current time
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.expired {
            return;
        }

        let remaining = (self.deadline - now).num_seconds();
        if remaining < 0 {
            self.display = EXPIRED_LABEL.to_string();
            self.expired = true;
            return;
        }

        self.display = format_remaining(remaining);
    }

    /// Current display text
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the deadline has passed
    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_renders_immediately_on_creation() {
        let now = base();
        let timer = CountdownTimer::new(now + Duration::hours(1), now);
        assert_eq!(timer.display(), "1h 0m 0s");
    }

    #[test]
    fn test_format_components() {
        assert_eq!(format_remaining(0), "0h 0m 0s");
        assert_eq!(format_remaining(2 * 3600 + 30 * 60 + 45), "2h 30m 45s");
        // No zero padding
        assert_eq!(format_remaining(3600 + 61), "1h 1m 1s");
    }

    #[test]
    fn test_hours_wrap_at_a_day() {
        assert_eq!(format_remaining(25 * 3600), "1h 0m 0s");
        assert_eq!(format_remaining(49 * 3600 + 60), "1h 1m 0s");
    }

    #[test]
    fn test_expires_and_latches() {
        let now = base();
        let mut timer = CountdownTimer::new(now + Duration::seconds(30), now);
        assert!(!timer.is_expired());

        timer.tick(now + Duration::seconds(31));
        assert_eq!(timer.display(), EXPIRED_LABEL);
        assert!(timer.is_expired());

        // Later ticks keep the latched output
        timer.tick(now + Duration::hours(5));
        assert_eq!(timer.display(), EXPIRED_LABEL);
    }

    #[test]
    fn test_zero_remaining_is_not_expired() {
        let now = base();
        let timer = CountdownTimer::new(now, now);
        assert_eq!(timer.display(), "0h 0m 0s");
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_parse_deadline() {
        let parsed = parse_deadline("2025-06-01T12:00:00Z").unwrap();
        assert_eq!(parsed, base());
        assert!(parse_deadline("not a timestamp").is_none());
    }
}
