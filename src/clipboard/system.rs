//! Desktop clipboard backend

use super::{ClipboardBackend, ClipboardError};

/// Clipboard backed by the operating system clipboard
///
/// The OS clipboard has no append, so appended text is collected locally
/// and written as a whole each time.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    pending: String,
}

impl SystemClipboard {
    /// Connects to the desktop clipboard
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(unavailable)?;
        Ok(Self {
            inner,
            pending: String::new(),
        })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.pending.clear();
        self.inner.clear().map_err(unavailable)
    }

    fn append(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.pending.push_str(text);
        self.inner
            .set_text(self.pending.clone())
            .map_err(unavailable)
    }

    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::NotText),
            Err(e) => Err(unavailable(e)),
        }
    }
}

fn unavailable(e: arboard::Error) -> ClipboardError {
    ClipboardError::Unavailable(e.to_string())
}
