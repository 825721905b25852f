use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::FieldError;

pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 11;
pub const MAX_MESSAGE_CHARS: usize = 200;

/// Form fields exactly as typed by the user.
///
/// Recreated on every keystroke; never stored anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormInput {
    pub fn new(phone: impl Into<String>, message: Option<String>) -> Self {
        Self {
            phone: phone.into(),
            message,
        }
    }

    /// Message text, empty when absent.
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Phone,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Phone => write!(f, "phone"),
            Field::Message => write!(f, "message"),
        }
    }
}

/// Keep only ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A phone number reduced to 10 or 11 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneDigits(String);

impl PhoneDigits {
    /// Strip everything but digits, then check the digit count.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let digits = digits_only(raw);
        let found = digits.len();
        if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&found) {
            Ok(Self(digits))
        } else {
            Err(FieldError::PhoneDigitCount { found })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PhoneDigits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-empty chat message of at most [`MAX_MESSAGE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Message(String);

impl Message {
    /// Empty text means "no message" and yields `Ok(None)`.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    pub fn parse(text: &str) -> Result<Option<Self>, FieldError> {
        if text.is_empty() {
            return Ok(None);
        }

        let chars = text.chars().count();
        if chars > MAX_MESSAGE_CHARS {
            return Err(FieldError::MessageTooLong { chars });
        }

        Ok(Some(Self(text.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output of a successful validation. Only the validator can build one,
/// because both field types are parse-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedInput {
    pub phone: PhoneDigits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}
