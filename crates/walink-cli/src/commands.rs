use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging::{self, LogTarget};
use crate::types::{LogLevel, OutputFormat};
use anyhow::Result;
use walink_runtime::Config;
use walink_runtime::config::resolve_config_path;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let json_mode = cli.format == OutputFormat::Json;

    let command = cli.command.unwrap_or(Commands::Tui {
        phone: None,
        message: None,
    });

    match command {
        Commands::Tui { phone, message } => {
            let config = Config::load_from(&config_path)?;
            let level = cli
                .log_level
                .map(|l| l.to_string())
                .unwrap_or_else(|| config.log.level.clone());
            logging::init(&level, LogTarget::File(config.log_file()?))?;

            handlers::tui::handle(&config, phone.as_deref(), message.as_deref())
        }

        Commands::Link {
            phone,
            message,
            copy,
        } => {
            init_stderr_logging(cli.log_level)?;
            let config = Config::load_from(&config_path)?;
            handlers::link::handle(&config, &phone, message, copy, json_mode)
        }

        Commands::Format { input } => {
            init_stderr_logging(cli.log_level)?;
            handlers::format::handle(&input, json_mode)
        }

        Commands::Config { command } => {
            init_stderr_logging(cli.log_level)?;

            match command {
                ConfigCommand::Path => handlers::config::path(&config_path, json_mode),
                ConfigCommand::Show => handlers::config::show(&config_path, json_mode),
                ConfigCommand::Init { force } => {
                    handlers::config::init(&config_path, force, json_mode)
                }
            }
        }
    }
}

fn init_stderr_logging(level: Option<LogLevel>) -> Result<()> {
    let level = level.unwrap_or(LogLevel::Warn);
    logging::init(&level.to_string(), LogTarget::Stderr)
}
