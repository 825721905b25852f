// Engine module - pure form logic (masking, validation, link construction)
// This layer sits between the form types and the CLI / TUI presentation

mod form_state;
mod link_builder;
mod mask;
mod validator;

pub use form_state::LinkForm;
pub use link_builder::{build_link, encode_uri_component};
pub use mask::format_phone;
pub use validator::validate;

pub use walink_types::digits_only;

use walink_types::{FormInput, GeneratedLink, ValidationErrors};

// Façade API - what the CLI calls for one-shot commands

/// Validate raw form input and build its link in one step.
pub fn generate(input: &FormInput) -> Result<GeneratedLink, ValidationErrors> {
    validate(input).map(|valid| build_link(&valid))
}
