//! Clipboard copy with a transient "copied" acknowledgement.
//!
//! A successful write raises the copied flag and arms a reset timer; a
//! second copy inside the window pushes the reset back. A failed write is
//! logged and leaves the flag down.

use std::time::{Duration, Instant};

use crate::timer::ResetTimer;
use crate::{Error, Result};

pub const DEFAULT_COPY_RESET: Duration = Duration::from_millis(2000);

/// Whether text written by `SystemClipboard` is still there after the
/// process exits. X11 and Wayland serve the selection from the owning
/// process, so it only survives if a clipboard manager takes it over.
pub const COPY_OUTLIVES_PROCESS: bool = !cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
));

/// Write-text capability of a clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard.
///
/// The handle is opened on first use and kept, so on X11/Wayland the
/// selection stays owned for as long as this value lives.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };

        let result = clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()));
        self.inner = Some(clipboard);
        result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing to copy yet.
    Skipped,
}

/// Copied flag plus its auto-reset timer.
#[derive(Debug, Clone)]
pub struct CopyTracker {
    copied: bool,
    reset: ResetTimer,
    reset_after: Duration,
}

impl Default for CopyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_RESET)
    }
}

impl CopyTracker {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            copied: false,
            reset: ResetTimer::new(),
            reset_after,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub fn copy<W>(&mut self, writer: &mut W, text: &str, now: Instant) -> Result<CopyOutcome>
    where
        W: ClipboardWriter + ?Sized,
    {
        if text.is_empty() {
            tracing::debug!("copy requested with nothing to copy");
            return Ok(CopyOutcome::Skipped);
        }

        if let Err(err) = writer.write_text(text) {
            tracing::warn!(error = %err, "clipboard write failed");
            self.copied = false;
            self.reset.cancel();
            return Err(err);
        }

        self.copied = true;
        self.reset.arm(now, self.reset_after);
        tracing::info!(chars = text.chars().count(), "link copied to clipboard");
        Ok(CopyOutcome::Copied)
    }

    /// Drop the flag once the reset is due. Returns true when it changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.reset.fire(now) {
            self.copied = false;
            tracing::debug!("copied indicator reset");
            return true;
        }
        false
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.reset.remaining(now)
    }
}
