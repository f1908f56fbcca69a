use comet_core::{FormatOptions, Generation};
use serde::Serialize;

use crate::error::CliError;

use super::{empty_input_warning, entry_errors, CommandResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponseData<'a> {
    ticker_id_string: &'a str,
    name_id_string: &'a str,
    errors: &'a [String],
    count: usize,
    options: FormatOptions,
}

pub fn run(generation: &Generation) -> Result<CommandResult, CliError> {
    let data = serde_json::to_value(GenerateResponseData {
        ticker_id_string: &generation.ticker_id_string,
        name_id_string: &generation.name_id_string,
        errors: &generation.errors,
        count: generation.len(),
        options: generation.options,
    })?;

    let mut result = CommandResult::ok(data).with_errors(entry_errors(generation));
    if let Some(warning) = empty_input_warning(generation) {
        result = result.with_warning(warning);
    }
    Ok(result)
}
