//! Optional JSON configuration file.
//!
//! ```json
//! { "network": "banano", "currency": "USD", "fcm_token": null }
//! ```
//!
//! Every field is optional and command-line flags take precedence.

use anyhow::{Context, Result};
use lattice_core::AccountType;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lattice.json";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Network used when `--network` is not passed.
    pub network: Option<AccountType>,
    /// Display currency sent with subscribe requests.
    pub currency: Option<String>,
    /// Push-notification token sent with subscribe requests.
    pub fcm_token: Option<String>,
}

impl Config {
    /// Load `path`, or the default file if it exists. An explicit path that
    /// cannot be read is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::read(default)
                } else {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
