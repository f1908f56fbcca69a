//! # Ticker Normalizer
//!
//! Turns a block of free-form ticker entries into two comma-joined strings:
//!
//! | Output | Description |
//! |--------|-------------|
//! | `tickerId` | Canonical, always uppercase, always fully qualified |
//! | `nameId` | Display label shaped by [`FormatOptions`] |
//!
//! ## Stages
//!
//! 1. [`tokenize`] splits on commas, newlines and whitespace.
//! 2. [`parse_entry`] splits `EXCHANGE:SYMBOL`, strips a market-structure
//!    suffix (`PERP`, `USDTPERP`, `.P`, `.S`), then a quote currency.
//! 3. [`generate`] runs both over a batch and joins the results.
//!
//! ```rust
//! use comet_core::{generate, Casing, FormatOptions};
//!
//! let options = FormatOptions::new(false, false, Casing::Lowercase);
//! let generation = generate("BINANCE:BTCUSDT", &options);
//! assert_eq!(generation.ticker_id_string, "BINANCE:BTCUSDT");
//! assert_eq!(generation.name_id_string, "btc");
//! ```

mod entry;
mod generator;
mod options;
mod tokenizer;

pub use entry::{parse_entry, ParsedAsset, QUOTE_CURRENCIES};
pub use generator::{generate, Generation};
pub use options::{Casing, FormatOptions};
pub use tokenizer::tokenize;
