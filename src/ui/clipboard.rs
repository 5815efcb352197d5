//! Clipboard copy with a platform backend and a UI-runtime fallback
//!
//! The platform clipboard is tried first; when it is unavailable (headless
//! session, missing display server) the caller falls back to the UI
//! runtime's clipboard command. A write failure on an available clipboard
//! is logged and silently dropped.

/// Why a backend write did not land
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No platform clipboard to talk to; use the runtime fallback
    Unavailable(String),
    /// The clipboard exists but the write failed
    WriteFailed(String),
}

/// How a copy request was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCopy {
    /// Landed on the platform clipboard
    Primary,
    /// Caller should route the text through the runtime clipboard
    Fallback,
    /// Write failed; already logged, nothing to surface
    Failed,
}

/// A clipboard implementation
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard via `arboard`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Copy `text` through `backend`, deciding how the caller proceeds
pub fn copy_text(backend: &mut dyn ClipboardBackend, text: &str) -> ClipboardCopy {
    match backend.set_text(text) {
        Ok(()) => ClipboardCopy::Primary,
        Err(ClipboardError::Unavailable(reason)) => {
            log::warn!("Platform clipboard unavailable: {}", reason);
            ClipboardCopy::Fallback
        }
        Err(ClipboardError::WriteFailed(reason)) => {
            log::error!("Copy failed: {}", reason);
            ClipboardCopy::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClipboard {
        result: Result<(), ClipboardError>,
        last_text: Option<String>,
    }

    impl ClipboardBackend for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.last_text = Some(text.to_string());
            self.result.clone()
        }
    }

    #[test]
    fn test_primary_path() {
        let mut backend = FakeClipboard {
            result: Ok(()),
            last_text: None,
        };
        assert_eq!(copy_text(&mut backend, "upload #42"), ClipboardCopy::Primary);
        assert_eq!(backend.last_text.as_deref(), Some("upload #42"));
    }

    #[test]
    fn test_unavailable_falls_back() {
        let mut backend = FakeClipboard {
            result: Err(ClipboardError::Unavailable("no display".into())),
            last_text: None,
        };
        assert_eq!(copy_text(&mut backend, "x"), ClipboardCopy::Fallback);
    }

    #[test]
    fn test_write_failure_degrades_silently() {
        let mut backend = FakeClipboard {
            result: Err(ClipboardError::WriteFailed("denied".into())),
            last_text: None,
        };
        assert_eq!(copy_text(&mut backend, "x"), ClipboardCopy::Failed);
    }
}
