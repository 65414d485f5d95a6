// src/clipboard.rs
use std::io::{self, Write};

use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    #[error("Terminal write failed: {0}")]
    TerminalError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Native system clipboard.
///
/// The `arboard` handle is opened on first use and kept for the rest of the
/// run. On X11 and Wayland the copied text is served by this handle, so it
/// must outlive the write.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not opened".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Copies by asking the terminal emulator to set the clipboard (OSC 52).
///
/// Works over SSH and without a display server, as long as the terminal
/// honours the sequence.
pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalClipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", payload)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    System,
    Terminal,
}

/// Primary clipboard with a fallback tried when the primary write fails.
pub struct ClipboardChain {
    primary: Box<dyn Clipboard>,
    fallback: Box<dyn Clipboard>,
}

impl ClipboardChain {
    pub fn new(primary: Box<dyn Clipboard>, fallback: Box<dyn Clipboard>) -> Self {
        Self { primary, fallback }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemClipboard::default()), Box::new(TerminalClipboard::stdout()))
    }

    pub fn copy(&mut self, text: &str) -> Result<CopyMethod> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(CopyMethod::System),
            Err(e) => {
                log::warn!("Clipboard copy failed ({}), falling back to terminal copy", e);
                self.fallback.write_text(text)?;
                Ok(CopyMethod::Terminal)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Clipboard double recording what was written.
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        pub fail: bool,
        pub written: Rc<RefCell<Vec<String>>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingClipboard;
    use super::*;

    #[test]
    fn osc52_payload_is_base64() {
        assert_eq!(osc52_sequence("hunter2"), "\x1b]52;c;aHVudGVyMg==\x07");
    }

    #[test]
    fn terminal_clipboard_writes_sequence() {
        let mut clipboard = TerminalClipboard::new(Vec::new());
        clipboard.write_text("abc").unwrap();
        assert_eq!(clipboard.into_inner(), b"\x1b]52;c;YWJj\x07".to_vec());
    }

    #[test]
    fn system_clipboard_keeps_its_handle() {
        let mut system = SystemClipboard::default();
        match system.write_text("kairos") {
            // Headless machines have no clipboard to open
            Err(ClipboardError::Unavailable(_)) => assert!(system.clipboard.is_none()),
            Ok(()) | Err(_) => assert!(system.clipboard.is_some()),
        }
    }

    #[test]
    fn primary_is_used_when_it_works() {
        let primary = RecordingClipboard::default();
        let fallback = RecordingClipboard::default();
        let mut chain = ClipboardChain::new(Box::new(primary.clone()), Box::new(fallback.clone()));

        assert_eq!(chain.copy("secret").unwrap(), CopyMethod::System);
        assert_eq!(*primary.written.borrow(), vec!["secret".to_string()]);
        assert!(fallback.written.borrow().is_empty());
    }

    #[test]
    fn fallback_is_used_when_primary_fails() {
        let primary = RecordingClipboard { fail: true, ..Default::default() };
        let fallback = RecordingClipboard::default();
        let mut chain = ClipboardChain::new(Box::new(primary), Box::new(fallback.clone()));

        assert_eq!(chain.copy("secret").unwrap(), CopyMethod::Terminal);
        assert_eq!(*fallback.written.borrow(), vec!["secret".to_string()]);
    }

    #[test]
    fn error_when_both_fail() {
        let failing = RecordingClipboard { fail: true, ..Default::default() };
        let mut chain = ClipboardChain::new(Box::new(failing.clone()), Box::new(failing));
        assert!(matches!(chain.copy("secret"), Err(ClipboardError::Unavailable(_))));
    }
}
