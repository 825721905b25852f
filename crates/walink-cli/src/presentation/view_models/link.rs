use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct LinkViewModel {
    pub phone: String,
    pub message: Option<String>,
    pub link: String,
    pub copied: bool,
}

impl fmt::Display for LinkViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.link)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatViewModel {
    pub input: String,
    pub digits: String,
    pub formatted: String,
}

impl fmt::Display for FormatViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.formatted)
    }
}
