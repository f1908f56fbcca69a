//! Core contracts for comet.
//!
//! This crate contains:
//! - The ticker normalizer (tokenizer, entry parser, batch generator)
//! - Format options for the display name
//! - Per-entry and validation errors
//! - Response envelope used by the CLI

pub mod domain;
pub mod envelope;
pub mod error;
pub mod ticker;

pub use domain::UtcDateTime;
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, EntryError, ValidationError};
pub use ticker::{
    generate, parse_entry, tokenize, Casing, FormatOptions, Generation, ParsedAsset,
    QUOTE_CURRENCIES,
};
