use comet_core::Generation;

use crate::error::CliError;

use super::{empty_input_warning, entry_errors, CommandResult};

/// Full per-entry breakdown; the joined strings ride along.
pub fn run(generation: &Generation) -> Result<CommandResult, CliError> {
    let data = serde_json::to_value(generation)?;

    let mut result = CommandResult::ok(data).with_errors(entry_errors(generation));
    if let Some(warning) = empty_input_warning(generation) {
        result = result.with_warning(warning);
    }
    Ok(result)
}
