//! Clipboard access behind a small trait so tests and embedded hosts can substitute
//! their own implementation for the system clipboard.

use crate::error::CommandError;

/// Read/write access to a text clipboard.
pub trait Clipboard {
    /// The clipboard's current text content. An empty or non-text clipboard reads as an
    /// empty string.
    fn read_text(&mut self) -> Result<String, CommandError>;

    /// Replace the clipboard content with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), CommandError>;
}

/// The system clipboard via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard.
    pub fn new() -> Result<Self, CommandError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, CommandError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // A clipboard holding an image or nothing at all is not an error for the
            // commands built on top, which compare against previous content.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), CommandError> {
        self.inner.set_text(text.to_string())?;
        Ok(())
    }
}
