use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] comet_core::ValidationError),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: comet_core::CoreError,
    },

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Stream(#[from] crate::output::stream_writer::StreamError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Config { .. } | Self::Command(_) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
            Self::Stream(_) => 6,
        }
    }
}
