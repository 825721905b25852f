// NOTE: walink layering
//
// - walink-types: form data, validated newtypes, the generated link
// - walink-engine: pure functions (mask, validate, build link) + LinkForm store
// - walink-runtime: everything that touches the outside (config file,
//   clipboard, wall clock, timers)
// - this crate: CLI parsing, logging setup, presentation (console + TUI)
//
// One-shot commands and the interactive form share the same engine calls,
// so `walink link` and pressing Enter in the TUI always agree.

mod args;
mod commands;
mod handlers;

pub mod app;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
