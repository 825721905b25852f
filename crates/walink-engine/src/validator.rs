use walink_types::{FormInput, Message, PhoneDigits, ValidatedInput, ValidationErrors};

/// Check both fields and collect every failure.
///
/// The message is checked even when the phone is already invalid, so the
/// form can show both inline errors at once.
pub fn validate(input: &FormInput) -> Result<ValidatedInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let phone = match PhoneDigits::parse(&input.phone) {
        Ok(phone) => Some(phone),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let message = match Message::parse(input.message_text()) {
        Ok(message) => message,
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match phone {
        Some(phone) if errors.is_empty() => Ok(ValidatedInput { phone, message }),
        _ => Err(errors),
    }
}
