//! Copies picked emojis to the clipboard.
//!
//! OSC 52 goes first since it also works over SSH; the system clipboard
//! via `arboard` is the fallback. The escape sequence is written to stderr,
//! where the picker UI lives, so stdout stays clean for the picked emojis.

use std::fmt;
use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Which transport took the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Osc52,
    System,
}

pub struct Clipboard;

impl Clipboard {
    /// Copies `text`, trying OSC 52 then the system clipboard.
    pub fn copy(text: &str) -> Result<Transport, ClipboardError> {
        match Self::copy_osc52(text, &mut io::stderr()) {
            Ok(()) => Ok(Transport::Osc52),
            Err(err) => {
                tracing::debug!(error = %err, "falling back to system clipboard");
                Self::copy_system(text).map(|()| Transport::System)
            }
        }
    }

    fn copy_osc52(text: &str, out: &mut impl Write) -> Result<(), ClipboardError> {
        out.write_all(osc52_sequence(text).as_bytes())
            .map_err(|e| ClipboardError::Osc52(e.to_string()))?;
        out.flush()
            .map_err(|e| ClipboardError::Osc52(e.to_string()))
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))
    }
}

/// `ESC ] 52 ; c ; <base64> ESC \`, targeting the system selection.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x1b\\", STANDARD.encode(text))
}

#[derive(Debug)]
pub enum ClipboardError {
    Osc52(String),
    System(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Osc52(msg) => write!(f, "OSC 52 clipboard failed: {msg}"),
            ClipboardError::System(msg) => write!(f, "System clipboard failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}
