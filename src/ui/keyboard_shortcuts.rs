//! Keyboard shortcuts handling for the Alpha Nex client
//!
//! Global shortcut routing: a table of key chords to application messages,
//! checked against every keyboard event. Modal dismissal goes through the
//! [`ModalController`] trait so the router works against any modal host.

use std::collections::HashMap;
use std::fmt;

use iced::keyboard::{self, KeyCode, Modifiers};
use iced::Event;

use crate::ui::Message;

/// Represents a keyboard shortcut
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyboardShortcut {
    /// Key code for the shortcut
    pub key: KeyCode,
    /// Modifier keys for the shortcut (Ctrl, Shift, etc.)
    pub modifiers: Modifiers,
}

impl KeyboardShortcut {
    /// Create a new keyboard shortcut with a key and modifiers
    pub fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a shortcut with no modifiers
    pub fn bare(key: KeyCode) -> Self {
        Self::new(key, Modifiers::empty())
    }

    /// Create a shortcut with the Ctrl modifier
    pub fn ctrl(key: KeyCode) -> Self {
        Self::new(key, Modifiers::CTRL)
    }

    /// Create a shortcut with the platform command modifier
    pub fn command(key: KeyCode) -> Self {
        Self::new(key, Modifiers::LOGO)
    }

    /// Check if the shortcut matches a keyboard event
    pub fn matches(&self, key_code: KeyCode, modifiers: Modifiers) -> bool {
        self.key == key_code && self.modifiers == modifiers
    }
}

impl fmt::Display for KeyboardShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(Modifiers::CTRL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.modifiers.contains(Modifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.modifiers.contains(Modifiers::LOGO) {
            parts.push("Cmd".to_string());
        }

        let key_name = match self.key {
            KeyCode::Escape => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Space => "Space".to_string(),
            _ => format!("{:?}", self.key),
        };
        parts.push(key_name);

        write!(f, "{}", parts.join("+"))
    }
}

/// A host that can own an open modal
///
/// The shortcut router only emits a close request; whether something was
/// open, and what closing means, is the host's business.
pub trait ModalController {
    /// Whether a modal is currently open
    fn has_open_modal(&self) -> bool;

    /// Close the active modal; returns whether one was open
    fn close_active_modal(&mut self) -> bool;
}

/// Keyboard shortcut manager for the application
#[derive(Debug, Clone)]
pub struct KeyboardShortcutManager {
    /// Mapping of keyboard shortcuts to application messages
    shortcuts: HashMap<KeyboardShortcut, Message>,
}

impl Default for KeyboardShortcutManager {
    fn default() -> Self {
        let mut manager = Self::new();
        manager.register_default_shortcuts();
        manager
    }
}

impl KeyboardShortcutManager {
    /// Create a new empty keyboard shortcut manager
    pub fn new() -> Self {
        Self {
            shortcuts: HashMap::new(),
        }
    }

    /// Register a new keyboard shortcut for a message
    pub fn register(&mut self, shortcut: KeyboardShortcut, message: Message) {
        self.shortcuts.insert(shortcut, message);
    }

    /// Register the default keyboard shortcuts for the application
    pub fn register_default_shortcuts(&mut self) {
        // Search focus, both chord spellings
        self.register(KeyboardShortcut::ctrl(KeyCode::K), Message::FocusSearch);
        self.register(KeyboardShortcut::command(KeyCode::K), Message::FocusSearch);

        // Escape closes whatever modal is open
        self.register(KeyboardShortcut::bare(KeyCode::Escape), Message::CloseModal);
    }

    /// Process a runtime event and produce the mapped message, if any
    pub fn handle_event(&self, event: &Event) -> Option<Message> {
        if let Event::Keyboard(keyboard::Event::KeyPressed {
            key_code,
            modifiers,
            ..
        }) = event
        {
            for (shortcut, message) in &self.shortcuts {
                if shortcut.matches(*key_code, *modifiers) {
                    return Some(message.clone());
                }
            }
        }

        None
    }

    /// Get all registered shortcuts
    pub fn get_shortcuts(&self) -> &HashMap<KeyboardShortcut, Message> {
        &self.shortcuts
    }

    /// Human-readable chord/description pairs for the shortcuts modal
    pub fn get_shortcut_descriptions(&self) -> Vec<(String, String)> {
        let mut descriptions = Vec::new();

        for (shortcut, message) in &self.shortcuts {
            let description = match message {
                Message::FocusSearch => "Focus the dashboard search field",
                Message::CloseModal => "Close the open dialog",
                _ => continue,
            };
            descriptions.push((shortcut.to_string(), description.to_string()));
        }

        descriptions.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        descriptions
    }
}
