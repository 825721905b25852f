//! Presentation layer.
//!
//! Handlers and the TUI app produce plain data; presenters turn it into
//! ViewModels; renderers put ViewModels on the console or the terminal
//! screen through the views.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
