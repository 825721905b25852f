use anyhow::{Result, bail};
use std::path::Path;
use walink_runtime::Config;

use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn path(config_path: &Path, json_mode: bool) -> Result<()> {
    let view_model = presenters::present_config_path(config_path);
    ConsoleRenderer::new(json_mode).render(view_model)
}

pub fn show(config_path: &Path, json_mode: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml = config.to_toml()?;

    let view_model = presenters::present_config_show(config_path, config, toml);
    ConsoleRenderer::new(json_mode).render(view_model)
}

pub fn init(config_path: &Path, force: bool, json_mode: bool) -> Result<()> {
    let exists = config_path.exists();
    if exists && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    let view_model = presenters::present_config_init(config_path, exists);
    ConsoleRenderer::new(json_mode).render(view_model)
}
