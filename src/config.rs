use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::CatalogError;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

pub const DEFAULT_PRIMARY: &[&str] = &[
    "universities-1.csv",
    "universities-2.csv",
    "universities-3.csv",
    "universities-4.csv",
    "universities-5.csv",
];
pub const DEFAULT_EXTRAS: &str = "universities-extras.csv";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub sources: SourceSettings,
}

/// Where the CSV sources live and what they are called.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// HTTP origin; when set, sources are fetched from `{base_url}/{file}`.
    pub base_url: Option<String>,
    /// Local directory used when no `base_url` is configured.
    pub data_dir: PathBuf,
    pub primary: Vec<String>,
    pub extras: String,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            data_dir: PathBuf::from("data"),
            primary: DEFAULT_PRIMARY.iter().map(|s| s.to_string()).collect(),
            extras: DEFAULT_EXTRAS.to_string(),
            timeout_secs: 30,
        }
    }
}

impl SourceSettings {
    /// Sources read from a local directory with the default file names.
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Default::default()
        }
    }

    /// Sources fetched over HTTP with the default file names.
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }
}

impl Settings {
    /// Defaults, then the TOML file (if present), then `CATALOG_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let defaults = SourceSettings::default();
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let built = Config::builder()
            .set_default("sources.data_dir", defaults.data_dir.to_string_lossy().to_string())
            .and_then(|b| b.set_default("sources.primary", defaults.primary.clone()))
            .and_then(|b| b.set_default("sources.extras", defaults.extras.clone()))
            .and_then(|b| b.set_default("sources.timeout_secs", defaults.timeout_secs))
            .map_err(|e| CatalogError::Configuration(e.to_string()))?
            .add_source(File::from(file).required(path.is_some()))
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| CatalogError::Configuration(e.to_string()))?;

        built
            .try_deserialize()
            .map_err(|e| CatalogError::Configuration(e.to_string()))
    }
}
