use serde::Serialize;

use super::entry::{parse_entry, ParsedAsset};
use super::options::FormatOptions;
use super::tokenizer::tokenize;
use crate::EntryError;

/// Result of one generation pass over a block of raw entries.
///
/// Both joined strings stay positionally aligned with the input: failed
/// entries contribute their raw token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub ticker_id_string: String,
    pub name_id_string: String,
    pub errors: Vec<String>,
    pub assets: Vec<ParsedAsset>,
    pub options: FormatOptions,
}

impl Generation {
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Entry errors with their zero-based position in the input.
    pub fn entry_errors(&self) -> impl Iterator<Item = (usize, &EntryError)> {
        self.assets
            .iter()
            .enumerate()
            .filter_map(|(index, asset)| asset.error.as_ref().map(|error| (index, error)))
    }
}

/// Parse every entry in `raw_input` and serialize the canonical and display ids.
pub fn generate(raw_input: &str, options: &FormatOptions) -> Generation {
    let assets: Vec<ParsedAsset> = tokenize(raw_input)
        .into_iter()
        .map(|token| parse_entry(token, options))
        .collect();

    let errors: Vec<String> = assets
        .iter()
        .filter_map(|asset| asset.error.as_ref().map(ToString::to_string))
        .collect();

    let ticker_id_string = join(&assets, |asset| asset.ticker_id.as_str());
    let name_id_string = join(&assets, |asset| asset.name_id.as_str());

    log::debug!(
        "generated {} entries ({} errors) with casing={}",
        assets.len(),
        errors.len(),
        options.casing
    );

    Generation {
        ticker_id_string,
        name_id_string,
        errors,
        assets,
        options: *options,
    }
}

fn join<'a>(assets: &'a [ParsedAsset], field: impl Fn(&'a ParsedAsset) -> &'a str) -> String {
    assets.iter().map(field).collect::<Vec<_>>().join(",")
}
