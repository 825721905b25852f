//! Testing infrastructure for walink tests.
//!
//! - `TestWorld`: isolated config directory + CLI runner
//! - `clipboard`: in-memory clipboard doubles

pub mod clipboard;
pub mod world;

pub use clipboard::{FailingClipboard, RecordingClipboard};
pub use world::{CliResult, TestWorld};
