//! Loading states for trigger buttons
//!
//! While an action is in flight the trigger is disabled and its label is
//! swapped for a busy label; the original label is preserved and restored
//! when the action settles.

/// Busy label used when the caller has nothing more specific
pub const DEFAULT_BUSY_LABEL: &str = "Loading...";

/// Disabled-plus-label state of one trigger button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    label: String,
    original_label: Option<String>,
    busy: bool,
}

impl LoadingState {
    /// A ready button with its normal label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            original_label: None,
            busy: false,
        }
    }

    /// Swap in the busy label and disable the trigger
    pub fn show(&mut self, busy_label: &str) {
        if !self.busy {
            self.original_label = Some(self.label.clone());
        }
        self.label = busy_label.to_string();
        self.busy = true;
    }

    /// Restore the original label and re-enable the trigger
    pub fn hide(&mut self) {
        self.busy = false;
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
    }

    /// Label to render right now
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the trigger is disabled
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}
