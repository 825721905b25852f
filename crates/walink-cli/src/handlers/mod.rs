pub mod config;
pub mod format;
pub mod link;
pub mod tui;
