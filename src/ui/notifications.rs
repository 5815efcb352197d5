//! Notification banners and flash messages
//!
//! Banners stack in a fixed corner and detach through a two-phase
//! lifecycle: visible for five seconds, then a short fade before removal.
//! Flash messages reuse the same machinery; only success flashes
//! auto-dismiss, everything else waits for the close button.

use std::time::{Duration, Instant};

use crate::ui::theme::Tone;

/// How long a banner stays fully visible before fading
pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationKind {
    pub fn tone(self) -> Tone {
        match self {
            NotificationKind::Info => Tone::Info,
            NotificationKind::Success => Tone::Success,
            NotificationKind::Warning => Tone::Warning,
            NotificationKind::Danger => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    Fading { since: Instant },
}

/// One banner on screen
#[derive(Debug, Clone)]
pub struct Notification {
    id: u64,
    message: String,
    kind: NotificationKind,
    created: Instant,
    phase: Phase,
    auto_dismiss: bool,
}

impl Notification {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Whether the banner is in its fade-out phase
    pub fn is_fading(&self) -> bool {
        matches!(self.phase, Phase::Fading { .. })
    }
}

/// Owns every banner currently on screen
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    next_id: u64,
    entries: Vec<Notification>,
    fade_duration: Duration,
}

impl NotificationCenter {
    /// Create a center whose fade phase lasts `fade_duration`
    pub fn new(fade_duration: Duration) -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            fade_duration,
        }
    }

    /// Show a transient banner; auto-dismissed after [`DISPLAY_DURATION`]
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) -> u64 {
        self.insert(message.into(), kind, now, true)
    }

    /// Show a flash message. Success flashes auto-dismiss like banners;
    /// other kinds stay until dismissed.
    pub fn flash(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> u64 {
        self.insert(
            message.into(),
            kind,
            now,
            kind == NotificationKind::Success,
        )
    }

    fn insert(&mut self, message: String, kind: NotificationKind, now: Instant, auto: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            message,
            kind,
            created: now,
            phase: Phase::Visible,
            auto_dismiss: auto,
        });
        id
    }

    /// Remove a banner immediately (close button)
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    /// Advance banner lifecycles: start fades for expired banners and
    /// detach the ones whose fade has completed.
    pub fn sweep(&mut self, now: Instant) {
        let fade_duration = self.fade_duration;
        for entry in &mut self.entries {
            if entry.auto_dismiss
                && entry.phase == Phase::Visible
                && now.duration_since(entry.created) >= DISPLAY_DURATION
            {
                entry.phase = Phase::Fading { since: now };
            }
        }
        self.entries.retain(|entry| match entry.phase {
            Phase::Visible => true,
            Phase::Fading { since } => now.duration_since(since) < fade_duration,
        });
    }

    /// Banners in display order
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Whether anything is on screen
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any banner is mid-fade (drives the fast animation tick)
    pub fn has_fading(&self) -> bool {
        self.entries.iter().any(Notification::is_fading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> NotificationCenter {
        NotificationCenter::new(Duration::from_millis(300))
    }

    #[test]
    fn test_banner_fades_then_detaches() {
        let mut center = center();
        let t0 = Instant::now();
        center.push("Copied to clipboard!", NotificationKind::Success, t0);

        // Still fully visible just before the deadline
        center.sweep(t0 + Duration::from_millis(4_999));
        assert!(!center.has_fading());
        assert!(!center.is_empty());

        // Fade starts at five seconds
        let t_fade = t0 + Duration::from_secs(5);
        center.sweep(t_fade);
        assert!(center.has_fading());
        assert!(!center.is_empty());

        // Detached once the fade has run its course
        center.sweep(t_fade + Duration::from_millis(300));
        assert!(center.is_empty());
    }

    #[test]
    fn test_only_success_flashes_auto_dismiss() {
        let mut center = center();
        let t0 = Instant::now();
        center.flash("File uploaded successfully!", NotificationKind::Success, t0);
        center.flash("Upload failed.", NotificationKind::Danger, t0);

        center.sweep(t0 + Duration::from_secs(6));
        center.sweep(t0 + Duration::from_secs(7));

        let remaining: Vec<_> = center.iter().map(Notification::kind).collect();
        assert_eq!(remaining, vec![NotificationKind::Danger]);
    }

    #[test]
    fn test_manual_dismiss_removes_immediately() {
        let mut center = center();
        let t0 = Instant::now();
        let id = center.flash("Daily limit reached", NotificationKind::Warning, t0);
        assert!(!center.is_empty());

        center.dismiss(id);
        assert!(center.is_empty());
    }
}
