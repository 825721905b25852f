use std::cell::RefCell;
use std::rc::Rc;

use walink_runtime::{ClipboardWriter, Error, Result};

/// Records every write. Clones share the same log, so a test can keep one
/// handle while the app owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Always fails, like a headless session without a display server.
#[derive(Debug, Clone, Default)]
pub struct FailingClipboard;

impl ClipboardWriter for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(Error::Clipboard("clipboard unavailable".to_string()))
    }
}
