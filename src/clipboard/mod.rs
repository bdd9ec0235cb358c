//! # Clipboard Backends
//!
//! The clipboard is one global text slot owned by the platform. Copy clears
//! it and appends one fragment; paste reads it without consuming it.
//!
//! - [`MemoryClipboard`] - Process-local slot, used by tests and headless hosts
//! - `SystemClipboard` - Desktop clipboard via `arboard` (feature `system-clipboard`)

#[cfg(feature = "system-clipboard")]
mod system;

use thiserror::Error;

#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

#[derive(Debug, Error, PartialEq)]
pub enum ClipboardError {
    #[error("Clipboard is empty")]
    Empty,

    #[error("Clipboard holds no text")]
    NotText,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Platform clipboard operations
pub trait ClipboardBackend {
    /// Empties the clipboard
    fn clear(&mut self) -> Result<(), ClipboardError>;

    /// Appends text to the current content
    fn append(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Reads the current text without consuming it
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// Clipboard slot held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard already holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }

    /// Current content, if any
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.content = None;
        Ok(())
    }

    fn append(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.content.get_or_insert_with(String::new).push_str(text);
        Ok(())
    }

    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.content.clone().ok_or(ClipboardError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clipboard_cannot_be_read() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.read_text(), Err(ClipboardError::Empty));
    }

    #[test]
    fn clear_then_append_replaces_content() {
        let mut clipboard = MemoryClipboard::with_text("old");
        clipboard.clear().unwrap();
        clipboard.append("<ITEM/>").unwrap();
        assert_eq!(clipboard.text(), Some("<ITEM/>"));
    }

    #[test]
    fn append_concatenates() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.append("<IT").unwrap();
        clipboard.append("EM/>").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "<ITEM/>");
    }

    #[test]
    fn reading_does_not_consume() {
        let mut clipboard = MemoryClipboard::with_text("x");
        assert_eq!(clipboard.read_text().unwrap(), "x");
        assert_eq!(clipboard.read_text().unwrap(), "x");
    }
}
