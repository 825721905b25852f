//! ViewModels for the interactive form screen.
//!
//! Rebuilt from `App` on every frame; the views only read them.

use serde::Serialize;
use walink_types::Field;

use super::common::StatusLevel;

#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub title: String,
    pub form: FormViewModel,
    pub link: LinkPanelViewModel,
    pub preview: PreviewViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormViewModel {
    pub fields: Vec<FieldViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldViewModel {
    pub field: Field,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub error: Option<String>,
    pub focused: bool,
    /// `(chars, limit)` for fields with a length cap.
    pub counter: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkPanelViewModel {
    pub link: Option<String>,
    pub copied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewViewModel {
    pub visible: bool,
    pub clock: String,
    pub contact: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub status_message: String,
    pub status_level: StatusLevel,
}
