use serde::Serialize;
use std::fmt;

pub const WA_ME_BASE: &str = "https://wa.me";

/// A `wa.me` click-to-chat URL.
///
/// Produced by the link builder from a validated form; holders replace it
/// wholesale and never edit it in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GeneratedLink(String);

impl GeneratedLink {
    pub fn from_url(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_text(&self) -> bool {
        self.0.contains("?text=")
    }
}

impl AsRef<str> for GeneratedLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
