//! TUI view components.
//!
//! Each component is a thin `Widget` wrapper around a ViewModel. Views take
//! a reference, never own data, and make no decisions beyond layout and the
//! `StatusLevel` to colour mapping.

pub mod form;
pub mod link_panel;
pub mod preview;
pub mod status_bar;

pub use form::FormView;
pub use link_panel::LinkPanelView;
pub use preview::PreviewView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
