pub mod stream_writer;

use std::io;

use comet_core::Envelope;
use serde_json::json;
use serde_json::Value;

use self::stream_writer::{NdjsonStreamWriter, StreamEventError};
use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(envelope)?;
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope)?,
    }

    Ok(())
}

pub fn render_stream(envelope: &Envelope<Value>) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut writer = NdjsonStreamWriter::new(stdout.lock());

    writer.emit_start(Some(json!({
        "request_id": envelope.meta.request_id,
        "schema_version": envelope.meta.schema_version,
    })))?;

    writer.emit_progress(Some(json!({
        "phase": "command_complete",
        "warning_count": envelope.meta.warnings.len(),
        "error_count": envelope.errors.len(),
    })))?;

    writer.emit_chunk(Some(serde_json::to_value(envelope)?))?;

    for error in &envelope.errors {
        let data = error.entry.map(|entry| json!({ "entry": entry }));
        writer.emit_error(
            StreamEventError::new(error.code.clone(), error.message.clone()),
            data,
        )?;
    }

    writer.emit_end(Some(json!({
        "status": if envelope.errors.is_empty() { "ok" } else { "error" },
        "warning_count": envelope.meta.warnings.len(),
        "error_count": envelope.errors.len(),
    })))?;

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<(), CliError> {
    println!("request_id  : {}", envelope.meta.request_id);
    println!("schema      : {}", envelope.meta.schema_version);
    println!("generated_at: {}", envelope.meta.generated_at);
    println!("latency_ms  : {}", envelope.meta.latency_ms);

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }

    if let Some(assets) = envelope.data.get("assets").and_then(Value::as_array) {
        println!("entries:");
        for asset in assets {
            println!("  {}", asset_row(asset));
        }
    }

    for (label, key) in [("ticker_ids  ", "tickerIdString"), ("name_ids    ", "nameIdString")] {
        if let Some(joined) = envelope.data.get(key).and_then(Value::as_str) {
            println!("{label}: {joined}");
        }
    }

    if !envelope.errors.is_empty() {
        println!("errors:");
        for error in &envelope.errors {
            match error.entry {
                Some(entry) => println!("  - [{entry}] {}: {}", error.code, error.message),
                None => println!("  - {}: {}", error.code, error.message),
            }
        }
    }

    Ok(())
}

fn asset_row(asset: &Value) -> String {
    let field = |key: &str| asset.get(key).and_then(Value::as_str).unwrap_or("-");
    format!(
        "{:<24} exchange={:<10} base={:<8} quote={:<5} suffix={:<5} -> {} / {}",
        field("original"),
        field("exchange"),
        field("base"),
        field("quote"),
        field("suffix"),
        field("tickerId"),
        field("nameId"),
    )
}
