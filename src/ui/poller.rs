//! Upload status polling
//!
//! While the dashboard is visible, every poll interval issues one status
//! request per upload row. Responses come back unordered; each request
//! carries a per-row sequence number and a response older than the newest
//! already applied for that row is dropped. Failures skip the row for the
//! cycle and are logged only.

use std::collections::HashMap;

use crate::api::UploadStatusPayload;
use crate::ui::theme::Tone;

/// Rendered status line for one upload row
#[derive(Debug, Clone, PartialEq)]
pub struct RowStatus {
    pub text: String,
    pub tone: Tone,
}

/// Turn a status payload into the row's status line.
///
/// A payload carrying `error` yields nothing; the row keeps whatever it
/// showed before and the error goes to the log.
pub fn render_status(upload_id: &str, payload: &UploadStatusPayload) -> Option<RowStatus> {
    if let Some(error) = &payload.error {
        log::error!("Status check error for upload {}: {}", upload_id, error);
        return None;
    }

    let hours = payload.hours_remaining.unwrap_or(0.0);
    if hours > 0.0 {
        let whole_hours = hours.floor();
        let minutes = ((hours - whole_hours) * 60.0).floor() as i64;
        Some(RowStatus {
            text: format!("{}h {}m remaining", whole_hours as i64, minutes),
            tone: Tone::Success,
        })
    } else {
        Some(RowStatus {
            text: format!("{} XP penalty", payload.penalty.unwrap_or(0)),
            tone: Tone::Warning,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RowSequence {
    next: u64,
    last_applied: Option<u64>,
}

/// Per-row request sequencing; discards stale poll responses
#[derive(Debug, Clone, Default)]
pub struct StatusTracker {
    rows: HashMap<String, RowSequence>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an outgoing request for a row and get its sequence number
    pub fn begin_request(&mut self, upload_id: &str) -> u64 {
        let row = self.rows.entry(upload_id.to_string()).or_default();
        let seq = row.next;
        row.next += 1;
        seq
    }

    /// Decide whether a response may be applied. Newer responses win;
    /// anything at or below the last applied sequence is stale.
    pub fn try_apply(&mut self, upload_id: &str, seq: u64) -> bool {
        let Some(row) = self.rows.get_mut(upload_id) else {
            // Row disappeared while the request was in flight
            return false;
        };
        match row.last_applied {
            Some(applied) if seq <= applied => false,
            _ => {
                row.last_applied = Some(seq);
                true
            }
        }
    }

    /// Drop the sequencing state of a removed row
    pub fn forget(&mut self, upload_id: &str) {
        self.rows.remove(upload_id);
    }
}
