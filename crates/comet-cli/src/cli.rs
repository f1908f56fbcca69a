//! CLI argument definitions for comet.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `generate` | Build the joined tickerId / nameId strings |
//! | `inspect` | Show every parsed entry with its decomposition |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and entry errors as failures |
//! | `--stream` | `false` | Emit NDJSON stream events |
//! | `--config` | none | JSON file with default format options |
//!
//! # Examples
//!
//! ```bash
//! comet generate BINANCE:BTCUSDT ETHUSD --no-quote --casing lowercase
//! printf 'BTCUSDT.P\nSOLUSDC' | comet inspect --format table
//! comet generate --input tickers.txt --strict
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use comet_core::Casing;

/// Ticker / asset label generator.
#[derive(Debug, Parser)]
#[command(
    name = "comet",
    author,
    version,
    about = "Normalize exchange ticker entries into TickerID and NameID strings"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and entry errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Emit newline-delimited stream events instead of one document.
    #[arg(long, global = true, default_value_t = false)]
    pub stream: bool,

    /// JSON file holding default format options.
    ///
    /// Falls back to the COMET_CONFIG environment variable.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Casing applied to the NameID output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CasingArg {
    Uppercase,
    Lowercase,
    AsEntered,
}

impl From<CasingArg> for Casing {
    fn from(value: CasingArg) -> Self {
        match value {
            CasingArg::Uppercase => Casing::Uppercase,
            CasingArg::Lowercase => Casing::Lowercase,
            CasingArg::AsEntered => Casing::AsEntered,
        }
    }
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate comma-joined TickerID and NameID strings.
    ///
    /// # Examples
    ///
    ///   comet generate BINANCE:BTCUSDT ETHUSD
    ///   comet generate --input tickers.txt --no-exchange
    Generate(GenerateArgs),

    /// Show the parsed exchange/base/quote/suffix of every entry.
    Inspect(GenerateArgs),
}

/// Arguments shared by `generate` and `inspect`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Ticker entries; each argument may itself hold several comma-separated entries.
    pub entries: Vec<String>,

    /// Read entries from a file instead of arguments or stdin.
    #[arg(long, conflicts_with = "entries")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// NameID formatting overrides; unset flags keep the configured value.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Leave the exchange prefix out of the NameID.
    #[arg(long, default_value_t = false)]
    pub no_exchange: bool,

    /// Leave the quote currency (and any suffix after it) out of the NameID.
    #[arg(long, default_value_t = false)]
    pub no_quote: bool,

    /// Casing applied to the NameID.
    #[arg(long, value_enum)]
    pub casing: Option<CasingArg>,
}
