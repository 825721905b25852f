pub mod clipboard;
pub mod clock;
pub mod config;
pub mod error;
pub mod timer;

pub use clipboard::{
    COPY_OUTLIVES_PROCESS, ClipboardWriter, CopyOutcome, CopyTracker, SystemClipboard,
};
pub use clock::{PreviewClock, format_clock};
pub use config::{ClipboardConfig, Config, LogConfig, PreviewConfig};
pub use error::{Error, Result};
pub use timer::{ResetTimer, Ticker};
