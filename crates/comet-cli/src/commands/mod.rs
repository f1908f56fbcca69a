mod generate;
mod inspect;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::time::Instant;

use comet_core::{Envelope, EnvelopeError, EnvelopeMeta, Generation};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command, GenerateArgs};
use crate::config::resolve_format_options;
use crate::error::CliError;

pub const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Generate(args) => generate::run(&load_generation(cli, args)?)?,
        Command::Inspect(args) => inspect::run(&load_generation(cli, args)?)?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), SCHEMA_VERSION, latency_ms)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

fn load_generation(cli: &Cli, args: &GenerateArgs) -> Result<Generation, CliError> {
    let options = resolve_format_options(cli.config.as_deref(), &args.format)?;
    let raw = read_input(args)?;
    Ok(comet_core::generate(&raw, &options))
}

/// Arguments first, then `--input`, then stdin.
fn read_input(args: &GenerateArgs) -> Result<String, CliError> {
    if !args.entries.is_empty() {
        return Ok(args.entries.join("\n"));
    }

    if let Some(path) = &args.input {
        log::debug!("reading entries from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::Command(String::from(
            "no entries given; pass them as arguments, via --input, or on stdin",
        )));
    }

    let mut raw = String::new();
    stdin.lock().read_to_string(&mut raw)?;
    Ok(raw)
}

pub(crate) fn entry_errors(generation: &Generation) -> Vec<EnvelopeError> {
    generation
        .entry_errors()
        .map(|(index, error)| EnvelopeError::from_entry(index, error))
        .collect()
}

pub(crate) fn empty_input_warning(generation: &Generation) -> Option<&'static str> {
    generation
        .is_empty()
        .then_some("input contained no ticker entries")
}
