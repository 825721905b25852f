use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, StatusLevel};

/// Prints command results to stdout, as pretty JSON or as text.
///
/// Badges and tips go to stderr in text mode so stdout carries only the
/// payload and stays pipeable (`walink link ... | xargs xdg-open`).
pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", result.content);

        let colored = std::io::stderr().is_terminal();

        if let Some(badge) = &result.badge {
            let label = if colored {
                match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Info => badge.label.cyan().bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    StatusLevel::Error => badge.label.red().bold().to_string(),
                }
            } else {
                badge.label.clone()
            };
            eprintln!("{} {}", badge.icon(), label);
        }

        if !result.suggestions.is_empty() && colored {
            eprintln!("\n{}", "Tips:".yellow().bold());
            for tip in &result.suggestions {
                eprint!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    eprint!(": {}", cmd.cyan());
                }
                eprintln!();
            }
        }

        Ok(())
    }
}
