use serde::{Deserialize, Serialize};

use crate::{EntryError, UtcDateTime, ValidationError};

/// Standard response envelope for all `comet` machine-readable outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<EnvelopeError>,
}

impl<T> Envelope<T> {
    pub fn with_errors(
        meta: EnvelopeMeta,
        data: T,
        errors: Vec<EnvelopeError>,
    ) -> Result<Self, ValidationError> {
        meta.validate()?;
        for error in &errors {
            error.validate()?;
        }

        Ok(Self { meta, data, errors })
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub schema_version: String,
    pub generated_at: UtcDateTime,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(
        request_id: impl Into<String>,
        schema_version: impl Into<String>,
        latency_ms: u64,
    ) -> Result<Self, ValidationError> {
        let meta = Self {
            request_id: request_id.into(),
            schema_version: schema_version.into(),
            generated_at: UtcDateTime::now(),
            latency_ms,
            warnings: Vec::new(),
        };
        meta.validate()?;
        Ok(meta)
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request_id.trim().len() < 8 {
            return Err(ValidationError::InvalidRequestId);
        }

        if !is_valid_schema_version(&self.schema_version) {
            return Err(ValidationError::InvalidSchemaVersion {
                value: self.schema_version.clone(),
            });
        }

        Ok(())
    }
}

/// Structured error payload for partial or failed responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeError {
    pub code: String,
    pub message: String,
    /// Zero-based position of the offending entry in the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<usize>,
}

impl EnvelopeError {
    pub fn from_entry(index: usize, error: &EntryError) -> Self {
        Self {
            code: error.code().to_owned(),
            message: error.to_string(),
            entry: Some(index),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.code.trim().is_empty() {
            return Err(ValidationError::EmptyErrorCode);
        }

        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyErrorMessage);
        }

        Ok(())
    }
}

fn is_valid_schema_version(value: &str) -> bool {
    let Some(version) = value.strip_prefix('v') else {
        return false;
    };

    let mut parts = version.split('.');
    let major = parts.next();
    let minor = parts.next();
    let patch = parts.next();

    if parts.next().is_some() {
        return false;
    }

    [major, minor, patch].iter().all(|part| {
        part.is_some_and(|segment| {
            !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_digit())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_meta() {
        let meta = EnvelopeMeta::new("request-12345", "v1.0.0", 3).expect("meta should be valid");
        assert_eq!(meta.schema_version, "v1.0.0");
        assert!(meta.warnings.is_empty());
    }

    #[test]
    fn rejects_bad_schema_version() {
        let err = EnvelopeMeta::new("request-12345", "1.0", 1).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSchemaVersion { .. }));
    }

    #[test]
    fn rejects_short_request_id() {
        let err = EnvelopeMeta::new("req", "v1.0.0", 1).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidRequestId));
    }

    #[test]
    fn rejects_empty_error_code() {
        let error = EnvelopeError {
            code: String::from(" "),
            message: String::from("message"),
            entry: None,
        };
        let err = error.validate().expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyErrorCode));
    }

    #[test]
    fn entry_errors_carry_code_and_position() {
        let error = EnvelopeError::from_entry(
            4,
            &EntryError::UndeterminedBase {
                token: String::from("USD"),
            },
        );
        assert_eq!(error.code, "undetermined_base");
        assert_eq!(error.entry, Some(4));
        assert!(error.validate().is_ok());
    }

    #[test]
    fn success_envelope_omits_empty_errors() {
        let meta = EnvelopeMeta::new("request-12345", "v1.0.0", 0).expect("meta");
        let envelope =
            Envelope::with_errors(meta, serde_json::json!({ "count": 0 }), Vec::new())
                .expect("valid envelope");
        let json = serde_json::to_value(&envelope).expect("serializes");
        assert!(json.get("errors").is_none());
        assert_eq!(json["data"]["count"], 0);
    }
}
