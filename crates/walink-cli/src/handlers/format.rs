use anyhow::Result;
use walink_engine::{digits_only, format_phone};

use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(input: &str, json_mode: bool) -> Result<()> {
    let view_model = presenters::present_format(input, digits_only(input), format_phone(input));
    let renderer = ConsoleRenderer::new(json_mode);
    renderer.render(view_model)?;
    Ok(())
}
