//! NDJSON stream events for `--stream`.
//!
//! | Event | Description |
//! |-------|-------------|
//! | `start` | Request metadata |
//! | `chunk` | Command payload |
//! | `error` | One per entry error |
//! | `end` | Status and counts |

use std::io::Write;

use comet_core::UtcDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type of stream event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamEventType {
    Start,
    Progress,
    Chunk,
    End,
    Error,
}

/// Error payload for stream error events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEventError {
    pub code: String,
    pub message: String,
}

impl StreamEventError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A single stream event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    pub event: StreamEventType,
    /// Monotonically increasing, starting from 1.
    pub seq: u64,
    pub ts: UtcDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StreamEventError>,
}

/// Writes one JSON event per line, flushing after each.
pub struct NdjsonStreamWriter<W: Write> {
    writer: W,
    next_seq: u64,
}

impl<W: Write> NdjsonStreamWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_seq: 1,
        }
    }

    pub fn emit_start(&mut self, data: Option<Value>) -> Result<(), StreamError> {
        self.emit(StreamEventType::Start, data, None)
    }

    pub fn emit_progress(&mut self, data: Option<Value>) -> Result<(), StreamError> {
        self.emit(StreamEventType::Progress, data, None)
    }

    pub fn emit_chunk(&mut self, data: Option<Value>) -> Result<(), StreamError> {
        self.emit(StreamEventType::Chunk, data, None)
    }

    pub fn emit_end(&mut self, data: Option<Value>) -> Result<(), StreamError> {
        self.emit(StreamEventType::End, data, None)
    }

    pub fn emit_error(
        &mut self,
        error: StreamEventError,
        data: Option<Value>,
    ) -> Result<(), StreamError> {
        self.emit(StreamEventType::Error, data, Some(error))
    }

    fn emit(
        &mut self,
        event: StreamEventType,
        data: Option<Value>,
        error: Option<StreamEventError>,
    ) -> Result<(), StreamError> {
        let event = StreamEvent {
            event,
            seq: self.next_seq,
            ts: UtcDateTime::now(),
            data,
            error,
        };
        self.next_seq += 1;

        let payload = serde_json::to_string(&event)?;
        self.writer.write_all(payload.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Error type for stream operations.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
pub(crate) fn parse_stream_events(input: &str) -> Result<Vec<StreamEvent>, serde_json::Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line))
        .collect()
}
