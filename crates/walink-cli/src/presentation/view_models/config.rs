use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
    pub exists: bool,
}

impl fmt::Display for ConfigPathViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.path)
    }
}

/// Effective configuration. `toml` is the plain rendering; JSON output
/// carries the structured `config` instead.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigShowViewModel {
    pub path: String,
    pub from_file: bool,
    pub config: walink_runtime::Config,
    #[serde(skip)]
    pub toml: String,
}

impl fmt::Display for ConfigShowViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.from_file {
            writeln!(f, "# {} not found, showing defaults", self.path)?;
        }
        write!(f, "{}", self.toml)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {}", self.path)
    }
}
