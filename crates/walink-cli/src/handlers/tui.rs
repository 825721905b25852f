use anyhow::Result;
use chrono::Utc;
use std::time::Instant;
use walink_runtime::{Config, SystemClipboard};

use crate::app::App;
use crate::presentation::TuiRenderer;

pub fn handle(config: &Config, phone: Option<&str>, message: Option<&str>) -> Result<()> {
    let mut app = App::new(config, SystemClipboard::new(), Instant::now(), Utc::now())?;

    if phone.is_some() || message.is_some() {
        app = app.with_input(phone.unwrap_or_default(), message.unwrap_or_default());
    }

    TuiRenderer::run(&mut app)
}
