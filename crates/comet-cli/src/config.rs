use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use comet_core::FormatOptions;

use crate::cli::FormatArgs;
use crate::error::CliError;

const CONFIG_ENV: &str = "COMET_CONFIG";

/// Resolve format options: defaults, then the config file, then flag overrides.
pub fn resolve_format_options(
    config: Option<&Path>,
    overrides: &FormatArgs,
) -> Result<FormatOptions, CliError> {
    let path = config
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

    let mut options = match path {
        Some(path) => load_config(&path)?,
        None => FormatOptions::default(),
    };

    if overrides.no_exchange {
        options = options.with_exchange(false);
    }
    if overrides.no_quote {
        options = options.with_quote(false);
    }
    if let Some(casing) = overrides.casing {
        options = options.with_casing(casing.into());
    }

    Ok(options)
}

fn load_config(path: &Path) -> Result<FormatOptions, CliError> {
    log::debug!("loading format options from {}", path.display());
    let raw = fs::read_to_string(path)?;
    FormatOptions::from_json(&raw).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use comet_core::Casing;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::cli::CasingArg;

    fn no_overrides() -> FormatArgs {
        FormatArgs {
            no_exchange: false,
            no_quote: false,
            casing: None,
        }
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"includeQuote":true,"casing":"lowercase"}}"#).expect("write");

        let from_file =
            resolve_format_options(Some(file.path()), &no_overrides()).expect("loads");
        assert!(from_file.include_exchange);
        assert!(from_file.include_quote);
        assert_eq!(from_file.casing, Casing::Lowercase);

        let overrides = FormatArgs {
            no_exchange: false,
            no_quote: true,
            casing: Some(CasingArg::AsEntered),
        };
        let merged = resolve_format_options(Some(file.path()), &overrides).expect("loads");
        assert_eq!(merged, FormatOptions::new(true, false, Casing::AsEntered));
    }

    #[test]
    fn no_flags_keep_exclusions_from_config() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"includeExchange":false}}"#).expect("write");

        let overrides = FormatArgs {
            no_exchange: false,
            no_quote: true,
            casing: None,
        };
        let merged = resolve_format_options(Some(file.path()), &overrides).expect("loads");
        assert_eq!(merged, FormatOptions::new(false, false, Casing::Uppercase));
    }

    #[test]
    fn invalid_config_is_reported_with_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        let err = resolve_format_options(Some(file.path()), &no_overrides()).expect_err("fails");
        assert!(matches!(err, CliError::Config { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
