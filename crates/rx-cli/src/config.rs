//! Configuration resolution.
//!
//! Precedence, highest first: command-line flag, environment variable,
//! config file, built-in default.

use std::path::{Path, PathBuf};

use rx_ingest::ReadOptions;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the medication source path.
pub const SOURCE_ENV_VAR: &str = "RXGEN_SOURCE";

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "RXGEN_CONFIG";

/// Source path used when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "drugs.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid delimiter '{value}' in {path}: expected a single ASCII character")]
    InvalidDelimiter { path: PathBuf, value: String },
}

/// Contents of a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub source: SourceSection,
}

/// The `[source]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    pub path: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub null_values: Option<Vec<String>>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: PathBuf,
    pub read_options: ReadOptions,
}

/// Overrides given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides<'a> {
    pub source: Option<&'a Path>,
    pub config: Option<&'a Path>,
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| ConfigError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolves the run configuration.
///
/// `env` looks up environment variables; pass `|key| std::env::var(key).ok()`
/// outside of tests.
pub fn resolve<F>(overrides: CliOverrides<'_>, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = overrides
        .config
        .map(Path::to_path_buf)
        .or_else(|| env(CONFIG_ENV_VAR).map(PathBuf::from));
    let file = match &config_path {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };

    let mut read_options = ReadOptions::default();
    if let Some(value) = &file.source.delimiter {
        read_options.delimiter = parse_delimiter(value).ok_or_else(|| {
            ConfigError::InvalidDelimiter {
                path: config_path.clone().unwrap_or_default(),
                value: value.clone(),
            }
        })?;
    }
    if let Some(values) = file.source.null_values {
        read_options.null_values = values;
    }

    let source = overrides
        .source
        .map(Path::to_path_buf)
        .or_else(|| env(SOURCE_ENV_VAR).map(PathBuf::from))
        .or(file.source.path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));

    tracing::debug!(
        source = %source.display(),
        config = ?config_path,
        "resolved configuration"
    );

    Ok(AppConfig {
        source,
        read_options,
    })
}

fn parse_delimiter(value: &str) -> Option<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Some(*byte),
        _ if value == "\\t" => Some(b'\t'),
        _ => None,
    }
}
