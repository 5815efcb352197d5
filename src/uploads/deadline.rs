//! Deletion-deadline math
//!
//! Every upload gets a 48 hour free-deletion window; deleting after the
//! window costs XP, 5 per full hour late, capped at 100.

use chrono::{DateTime, Duration, Utc};

/// Hours an upload can be deleted without penalty
pub const FREE_DELETION_WINDOW_HOURS: i64 = 48;

/// XP charged per hour past the deadline
pub const PENALTY_XP_PER_HOUR: i64 = 5;

/// Cap on the late-deletion penalty
pub const MAX_PENALTY_XP: i64 = 100;

/// Deadline for penalty-free deletion of an upload
pub fn deletion_deadline(uploaded_at: DateTime<Utc>) -> DateTime<Utc> {
    uploaded_at + Duration::hours(FREE_DELETION_WINDOW_HOURS)
}

/// XP penalty for deleting at `now`: zero inside the window, then
/// `floor(hours_late) * 5` capped at 100.
pub fn deletion_penalty(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    if now < deadline {
        return 0;
    }
    let hours_late = (now - deadline).num_seconds() as f64 / 3600.0;
    ((hours_late * PENALTY_XP_PER_HOUR as f64) as i64).min(MAX_PENALTY_XP)
}

/// Fractional hours left until the deadline; negative once past it
pub fn hours_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (deadline - now).num_seconds() as f64 / 3600.0
}
