use walink_types::{Field, FieldError, FormInput, GeneratedLink, ValidationErrors};

use crate::{build_link, format_phone, validate};

/// State store behind the interactive form.
///
/// Holds the live field values, the inline errors and the last generated
/// link. The link is only ever replaced by a successful [`LinkForm::submit`];
/// editing fields never touches it.
#[derive(Debug, Clone, Default)]
pub struct LinkForm {
    input: FormInput,
    errors: ValidationErrors,
    link: Option<GeneratedLink>,
    submitted: bool,
}

impl LinkForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill both fields; the phone goes through the mask.
    pub fn with_input(phone: &str, message: &str) -> Self {
        let mut form = Self::new();
        form.set_phone(phone);
        form.set_message(message);
        form
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn phone(&self) -> &str {
        &self.input.phone
    }

    pub fn message(&self) -> &str {
        self.input.message_text()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Phone => self.phone(),
            Field::Message => self.message(),
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.for_field(field)
    }

    pub fn link(&self) -> Option<&GeneratedLink> {
        self.link.as_ref()
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.input.phone = format_phone(raw);
        self.revalidate();
    }

    pub fn set_message(&mut self, text: &str) {
        self.input.message = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self.revalidate();
    }

    pub fn set_value(&mut self, field: Field, value: &str) {
        match field {
            Field::Phone => self.set_phone(value),
            Field::Message => self.set_message(value),
        }
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        let mut value = self.value(field).to_string();
        value.push(c);
        self.set_value(field, &value);
    }

    pub fn pop_char(&mut self, field: Field) {
        let mut value = self.value(field).to_string();
        if value.pop().is_some() {
            self.set_value(field, &value);
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.set_value(field, "");
    }

    /// Validate and, on success, replace the generated link.
    ///
    /// On failure the previous link is kept and the inline errors are
    /// refreshed.
    pub fn submit(&mut self) -> Result<&GeneratedLink, &ValidationErrors> {
        self.submitted = true;

        match validate(&self.input) {
            Ok(valid) => {
                tracing::debug!(phone = %valid.phone, "form submitted");
                self.errors = ValidationErrors::new();
                Ok(&*self.link.insert(build_link(&valid)))
            }
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "form rejected, keeping previous link");
                self.errors = errors;
                Err(&self.errors)
            }
        }
    }

    // Errors only appear after the first submit; from then on they follow edits.
    fn revalidate(&mut self) {
        if !self.submitted {
            return;
        }

        self.errors = match validate(&self.input) {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => errors,
        };
    }
}
