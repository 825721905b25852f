pub mod common;
pub mod config;
pub mod link;
pub mod result;
pub mod screen;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigPathViewModel, ConfigShowViewModel};
pub use link::{FormatViewModel, LinkViewModel};
pub use result::CommandResultViewModel;
pub use screen::{
    FieldViewModel, FormViewModel, LinkPanelViewModel, PreviewViewModel, StatusBarViewModel,
    TuiScreenViewModel,
};
