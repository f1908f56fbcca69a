use thiserror::Error;

/// Validation and contract errors exposed by `comet-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Per-entry failure reported inline by the ticker parser.
///
/// The display text is user-facing and shown verbatim next to the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Malformed entry: \"{token}\". Expected \"EXCHANGE:SYMBOL\" or \"SYMBOL\".")]
    Malformed { token: String },

    #[error("Could not determine base asset for \"{token}\".")]
    UndeterminedBase { token: String },
}

impl EntryError {
    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "malformed_entry",
            Self::UndeterminedBase { .. } => "undetermined_base",
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
