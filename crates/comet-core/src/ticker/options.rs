use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Casing transform applied to the display name (`nameId`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    #[default]
    Uppercase,
    Lowercase,
    /// Keep the fragments exactly as the user typed them.
    AsEntered,
}

impl Casing {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::AsEntered => "as_entered",
        }
    }

    pub(crate) fn apply(self, value: String) -> String {
        match self {
            Self::Uppercase => value.to_uppercase(),
            Self::Lowercase => value.to_lowercase(),
            Self::AsEntered => value,
        }
    }
}

impl Display for Casing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatting rules for the configurable `nameId` output.
///
/// The canonical `tickerId` ignores these options entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub include_exchange: bool,
    pub include_quote: bool,
    pub casing: Casing,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_exchange: true,
            include_quote: true,
            casing: Casing::Uppercase,
        }
    }
}

impl FormatOptions {
    pub fn new(include_exchange: bool, include_quote: bool, casing: Casing) -> Self {
        Self {
            include_exchange,
            include_quote,
            casing,
        }
    }

    /// Load options from a JSON document; absent fields keep their defaults.
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn with_exchange(mut self, include_exchange: bool) -> Self {
        self.include_exchange = include_exchange;
        self
    }

    pub fn with_quote(mut self, include_quote: bool) -> Self {
        self.include_quote = include_quote;
        self
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }
}
