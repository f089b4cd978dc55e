use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::errors::errors::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scan: ScanConfig,
    pub export: ExportConfig,
}

/// Optional caps on the number of recorded tokens and errors.
///
/// Once a cap is hit, further entries of that kind are dropped while the
/// rest of the input is still consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub max_tokens: Option<usize>,
    pub max_errors: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub tokens: PathBuf,
    pub errors: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            tokens: PathBuf::from("Token.txt"),
            errors: PathBuf::from("Error.txt"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: PathBuf::from(path),
            source,
        })?;

        Config::parse(&content, path)
    }

    pub fn parse(content: &str, origin: &Path) -> Result<Config, Error> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: PathBuf::from(origin),
            source,
        })
    }
}
