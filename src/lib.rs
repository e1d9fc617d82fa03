pub mod cli;
pub mod core;

use crate::cli::calc::CalcOptions;
use crate::core::RawInput;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Calc {
        input: RawInput,
        options: CalcOptions,
    },
    Form,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("IRR calculator starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Calc { input, options } => cli::calc::run(&input, &config, options),
        AppCommand::Form => cli::form::run(&config),
    }
}
