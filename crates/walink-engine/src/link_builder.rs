use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use walink_types::{GeneratedLink, ValidatedInput, WA_ME_BASE};

/// Bytes left alone by URI component encoding: alphanumerics plus `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode text for a URL query component (UTF-8 first, then `%XX`).
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Build `https://wa.me/<digits>[?text=<encoded>]` from validated input.
pub fn build_link(input: &ValidatedInput) -> GeneratedLink {
    let mut url = format!("{}/{}", WA_ME_BASE, input.phone);

    if let Some(message) = &input.message {
        url.push_str("?text=");
        url.push_str(&encode_uri_component(message.as_str()));
    }

    GeneratedLink::from_url(url)
}
