//! Clipboard access for copying the summary.
//!
//! The native OS clipboard is tried first. When it is unavailable (headless
//! session, SSH, missing display server) or the write fails, the text is sent
//! to the terminal as an OSC 52 sequence and the terminal emulator places it
//! on the clipboard.

use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Stdout, Write};
use thiserror::Error;

/// Shown when neither strategy could copy the text.
pub const COPY_FAILED_MESSAGE: &str = "Could not copy to clipboard.";

/// Which strategy performed the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Native,
    Terminal,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to write OSC 52 sequence: {0}")]
    Terminal(#[from] io::Error),
}

impl ClipboardError {
    pub fn user_message(&self) -> &'static str {
        COPY_FAILED_MESSAGE
    }
}

/// Something the summary can be copied into.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<CopyMethod, ClipboardError>;
}

/// Native clipboard with an OSC 52 fallback.
pub struct ClipboardHandler<W: Write = Stdout> {
    native: Option<Clipboard>,
    terminal: W,
}

impl ClipboardHandler<Stdout> {
    /// Create a handler that falls back to writing on stdout.
    pub fn new() -> Self {
        Self::with_terminal(io::stdout())
    }
}

impl Default for ClipboardHandler<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ClipboardHandler<W> {
    /// Create a handler whose fallback writes to `terminal`.
    pub fn with_terminal(terminal: W) -> Self {
        let native = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::info!(error = %err, "Native clipboard unavailable, using OSC 52");
                None
            }
        };
        Self { native, terminal }
    }

    /// Create a handler that never touches the native clipboard.
    pub fn terminal_only(terminal: W) -> Self {
        Self {
            native: None,
            terminal,
        }
    }
}

impl<W: Write> ClipboardSink for ClipboardHandler<W> {
    fn write_text(&mut self, text: &str) -> Result<CopyMethod, ClipboardError> {
        if let Some(clipboard) = self.native.as_mut() {
            match clipboard.set_text(text.to_string()) {
                Ok(()) => return Ok(CopyMethod::Native),
                Err(err) => {
                    tracing::warn!(error = %err, "Native clipboard write failed, falling back to OSC 52");
                }
            }
        }

        write_osc52(&mut self.terminal, text)?;
        Ok(CopyMethod::Terminal)
    }
}

/// Write `text` as an OSC 52 "set clipboard" sequence.
pub fn write_osc52<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let encoded = STANDARD.encode(text.as_bytes());
    write!(out, "\x1b]52;c;{}\x07", encoded)?;
    out.flush()
}
