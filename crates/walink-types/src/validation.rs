use serde::Serialize;
use std::fmt;

use crate::form::Field;

pub const PHONE_DIGIT_COUNT_MESSAGE: &str = "O telefone deve ter 10 ou 11 dígitos";
pub const MESSAGE_TOO_LONG_MESSAGE: &str = "A mensagem deve ter no máximo 200 caracteres";

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    PhoneDigitCount { found: usize },
    MessageTooLong { chars: usize },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::PhoneDigitCount { .. } => Field::Phone,
            FieldError::MessageTooLong { .. } => Field::Message,
        }
    }

    /// Fixed, user-facing text shown next to the field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::PhoneDigitCount { .. } => PHONE_DIGIT_COUNT_MESSAGE,
            FieldError::MessageTooLong { .. } => MESSAGE_TOO_LONG_MESSAGE,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Every field error found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
