use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use super::options::FormatOptions;
use crate::EntryError;

/// Quote currencies in match priority order.
pub const QUOTE_CURRENCIES: [&str; 9] =
    ["USDT", "USD", "USDC", "BTC", "ETH", "EUR", "GBP", "JPY", "DAI"];

/// Market-structure markers: perpetuals, USDT-margined perpetuals, `.P`/`.S`.
///
/// Case folding is ASCII-only so matches agree with the quote table.
static SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u:PERP|USDT(?:PERP)?|\.P|\.S)$").expect("suffix pattern is valid")
});

const USDT: &str = "USDT";

/// One entry decomposed into exchange, base, quote and suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAsset {
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub ticker_id: String,
    pub name_id: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_entry_error"
    )]
    pub error: Option<EntryError>,
}

impl ParsedAsset {
    fn failed(token: &str, error: EntryError) -> Self {
        Self {
            original: token.to_owned(),
            exchange: None,
            base: String::new(),
            quote: None,
            suffix: None,
            ticker_id: token.to_owned(),
            name_id: token.to_owned(),
            error: Some(error),
        }
    }
}

/// Fragments exactly as typed (trimmed), before any casing transform.
#[derive(Debug)]
struct Fragments {
    exchange: Option<String>,
    base: String,
    quote: Option<String>,
    suffix: Option<String>,
}

impl Fragments {
    fn ticker_id(&self) -> String {
        let mut out = String::new();
        if let Some(exchange) = &self.exchange {
            out.push_str(exchange);
            out.push(':');
        }
        out.push_str(&self.base);
        if let Some(quote) = &self.quote {
            out.push_str(quote);
        }
        if let Some(suffix) = &self.suffix {
            out.push_str(suffix);
        }
        out.to_uppercase()
    }

    fn name_id(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        if options.include_exchange {
            if let Some(exchange) = &self.exchange {
                out.push_str(exchange);
                out.push(':');
            }
        }
        out.push_str(&self.base);
        if options.include_quote {
            if let Some(quote) = &self.quote {
                out.push_str(quote);
            }
        }
        // A suffix trailing a dropped quote is dropped with it.
        if let Some(suffix) = &self.suffix {
            if options.include_quote || self.quote.is_none() {
                out.push_str(suffix);
            }
        }
        options.casing.apply(out)
    }
}

/// Parse one entry into a [`ParsedAsset`].
///
/// Never fails: problems are carried in [`ParsedAsset::error`], and the
/// entry's ids fall back to the raw token.
pub fn parse_entry(token: &str, options: &FormatOptions) -> ParsedAsset {
    let Some((exchange, symbol)) = split_exchange(token) else {
        log::debug!("entry {token:?} is malformed");
        return ParsedAsset::failed(
            token,
            EntryError::Malformed {
                token: token.to_owned(),
            },
        );
    };

    let (rest, mut quote, suffix) = split_suffix(symbol);
    log::trace!("{symbol:?}: suffix {suffix:?}, quote from suffix {quote:?}");
    let base = match quote {
        Some(_) => rest,
        None => {
            let (base, detected) = split_quote(rest);
            quote = detected;
            base
        }
    };

    if base.is_empty() {
        log::debug!("entry {token:?} has no base asset");
        return ParsedAsset::failed(
            token,
            EntryError::UndeterminedBase {
                token: token.to_owned(),
            },
        );
    }

    let fragments = Fragments {
        exchange: exchange.map(str::to_owned),
        base: base.to_owned(),
        quote: quote.map(str::to_owned),
        suffix: suffix.map(str::to_owned),
    };

    let asset = ParsedAsset {
        original: token.to_owned(),
        exchange: fragments.exchange.as_deref().map(str::to_uppercase),
        base: fragments.base.to_uppercase(),
        quote: fragments.quote.as_deref().map(str::to_uppercase),
        suffix: fragments.suffix.as_deref().map(str::to_uppercase),
        ticker_id: fragments.ticker_id(),
        name_id: fragments.name_id(options),
        error: None,
    };
    log::debug!(
        "entry {token:?} -> tickerId={} nameId={}",
        asset.ticker_id,
        asset.name_id
    );
    asset
}

/// Returns `(exchange, symbol)`, or `None` when the entry has the wrong shape.
fn split_exchange(token: &str) -> Option<(Option<&str>, &str)> {
    let parts: Vec<&str> = token.split(':').map(str::trim).collect();
    match parts.as_slice() {
        [symbol] if !symbol.is_empty() => Some((None, *symbol)),
        [exchange, symbol] if !exchange.is_empty() && !symbol.is_empty() => {
            Some((Some(*exchange), *symbol))
        }
        _ => None,
    }
}

/// Returns `(remaining, quote, suffix)`.
///
/// A `USDT` or `USDTPERP` match is a quote currency optionally followed by a
/// perpetual marker, so its `USDT` head is reported as the quote.
fn split_suffix(symbol: &str) -> (&str, Option<&str>, Option<&str>) {
    let Some(found) = SUFFIX_PATTERN.find(symbol) else {
        return (symbol, None, None);
    };

    let rest = &symbol[..found.start()];
    let matched = found.as_str();
    match matched.get(..USDT.len()) {
        Some(head) if head.eq_ignore_ascii_case(USDT) => {
            let tail = &matched[USDT.len()..];
            (rest, Some(head), (!tail.is_empty()).then_some(tail))
        }
        _ => (rest, None, Some(matched)),
    }
}

/// Returns `(base, quote)`; the symbol is never consumed whole as a quote.
fn split_quote(symbol: &str) -> (&str, Option<&str>) {
    for currency in QUOTE_CURRENCIES {
        if symbol.len() <= currency.len() {
            continue;
        }
        let split = symbol.len() - currency.len();
        let Some(tail) = symbol.get(split..) else {
            continue;
        };
        if tail.eq_ignore_ascii_case(currency) {
            return (&symbol[..split], Some(tail));
        }
    }
    (symbol, None)
}

fn serialize_entry_error<S>(value: &Option<EntryError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(error) => serializer.serialize_str(&error.to_string()),
        None => serializer.serialize_none(),
    }
}
