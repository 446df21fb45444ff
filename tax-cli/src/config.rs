//! Optional TOML configuration for the estimator.
//!
//! Every table and key is optional; anything left out falls back to the
//! statutory defaults.
//!
//! ```toml
//! brackets = "brackets_2026.csv"
//!
//! [rules]
//! pension_rate = "0.08"
//! consolidated_relief_floor = "200000"
//!
//! [currency]
//! symbol = "NGN "
//! decimal_places = 0
//!
//! [logging]
//! level = "debug"
//! file = "estimator.log"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tax_core::{CurrencyFormat, TaxRules};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Bracket schedule CSV; the built-in table is used when absent.
    pub brackets: Option<PathBuf>,
    pub rules: TaxRules,
    pub currency: CurrencyFormat,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(
        contents: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the config at `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }
}
