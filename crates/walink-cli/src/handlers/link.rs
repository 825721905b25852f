use anyhow::Result;
use std::time::Instant;
use walink_runtime::{COPY_OUTLIVES_PROCESS, Config, CopyOutcome, CopyTracker, SystemClipboard};
use walink_types::FormInput;

use crate::presentation::presenters::{self, CopyReport};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(
    config: &Config,
    phone: &str,
    message: Option<String>,
    copy: bool,
    json_mode: bool,
) -> Result<()> {
    let input = FormInput::new(phone, message.filter(|m| !m.is_empty()));
    let link = walink_engine::generate(&input)?;
    tracing::info!(link = %link, "link generated");

    let copy_report = copy.then(|| {
        let mut clipboard = SystemClipboard::new();
        let mut tracker = CopyTracker::new(config.clipboard.reset_after());
        match tracker.copy(&mut clipboard, link.as_str(), Instant::now()) {
            Ok(CopyOutcome::Copied) if COPY_OUTLIVES_PROCESS => CopyReport::Copied,
            Ok(CopyOutcome::Copied) => CopyReport::HeldUntilExit,
            Ok(CopyOutcome::Skipped) => CopyReport::Failed("nothing to copy".to_string()),
            Err(e) => CopyReport::Failed(e.to_string()),
        }
    });

    let view_model = presenters::present_link(&input, &link, copy_report);
    let renderer = ConsoleRenderer::new(json_mode);
    renderer.render(view_model)?;

    Ok(())
}
