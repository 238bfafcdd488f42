//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Startup credential, read from `PAPERSIFT_API_KEY` when absent from the
    /// config file. The key gates startup only; E-utilities requests are
    /// unauthenticated and the key is never attached to them.
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    /// Affiliation classifier settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Config {
    /// Fail-fast check for the startup credential, run before any network
    /// activity.
    pub fn require_api_key(&self) -> Result<(), MissingApiKeyError> {
        if self.api_key.is_some() {
            Ok(())
        } else {
            Err(MissingApiKeyError)
        }
    }
}

/// The startup credential was not provided
#[derive(Debug, thiserror::Error)]
#[error("API key is missing: set PAPERSIFT_API_KEY in the environment or api_key in the config file")]
pub struct MissingApiKeyError;

/// Keyword lists for the affiliation classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Substrings that mark an affiliation as non-academic
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Company email domains. Recognized in config files but not consulted by
    /// classification; kept so existing config files stay valid.
    #[serde(default = "default_company_email_domains")]
    pub company_email_domains: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            company_email_domains: default_company_email_domains(),
        }
    }
}

fn default_api_key() -> Option<String> {
    std::env::var("PAPERSIFT_API_KEY").ok()
}

fn default_keywords() -> Vec<String> {
    [
        "Inc.",
        "Ltd.",
        "Pharmaceutical",
        "Biotech",
        "Corp.",
        "LLC",
        "Pfizer",
        "Moderna",
        "Novartis",
        "AstraZeneca",
        "Bayer",
        "Merck",
        "Johnson & Johnson",
        "Roche",
        "Sanofi",
        "GSK",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_company_email_domains() -> Vec<String> {
    ["pfizer.com", "moderna.com", "novartis.com", "bayer.com", "gsk.com"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Load configuration from a file, layered with `PAPERSIFT_*` env vars
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("PAPERSIFT"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}

/// Look for a config file in the default locations
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("papersift.toml");
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("papersift").join("config.toml"))
        .filter(|path| path.exists())
}
