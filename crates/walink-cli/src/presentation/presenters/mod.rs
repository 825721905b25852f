pub mod config;
pub mod link;
pub mod screen;

pub use config::{present_config_init, present_config_path, present_config_show};
pub use link::{CopyReport, present_format, present_link};
pub use screen::build_screen_view_model;
