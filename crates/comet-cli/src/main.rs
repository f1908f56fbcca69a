mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use comet_core::Envelope;
use serde_json::Value;

use crate::cli::Cli;
use crate::error::CliError;

/// Exit status when the batch completed but some entries could not be parsed.
const EXIT_ENTRY_ERRORS: u8 = 3;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("COMET_LOG", "warn"))
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<u8, CliError> {
    let cli = Cli::parse();

    let envelope = commands::run(&cli)?;
    if cli.stream {
        output::render_stream(&envelope)?;
    } else {
        output::render(&envelope, cli.format, cli.pretty)?;
    }

    exit_status(&envelope, cli.strict)
}

/// Map a rendered envelope to the process exit status.
fn exit_status(envelope: &Envelope<Value>, strict: bool) -> Result<u8, CliError> {
    if strict && (!envelope.meta.warnings.is_empty() || !envelope.errors.is_empty()) {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
            error_count: envelope.errors.len(),
        });
    }

    if !envelope.errors.is_empty() {
        log::info!("{} entries could not be parsed", envelope.errors.len());
        return Ok(EXIT_ENTRY_ERRORS);
    }

    Ok(0)
}
