use walink_types::{MAX_PHONE_DIGITS, digits_only};

/// Re-mask free-form phone text as `(DD) DDDDD-DDDD` while the user types.
///
/// Digit count decides the shape:
/// - 0..=2: bare digits
/// - 3..=6: `(DD) D…`
/// - 7..=10: `(DD) DDDD-D…`
/// - 11: `(DD) DDDDD-DDDD`
/// - more: the input is returned untouched
pub fn format_phone(input: &str) -> String {
    let digits = digits_only(input);

    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        MAX_PHONE_DIGITS => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => input.to_string(),
    }
}
