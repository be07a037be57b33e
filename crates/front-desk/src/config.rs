use crate::error::DeskError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Path of the config file, when set.
pub const CONFIG_ENV: &str = "SRH_CONFIG";
/// Overrides `api.base_url`.
pub const API_URL_ENV: &str = "SRH_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Buffer of each gateway's request channel.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_channel_capacity() -> usize {
    32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl DeskConfig {
    pub fn load(filename: &str) -> Result<Self, DeskError> {
        let config = fs::read_to_string(filename)
            .map_err(|e| DeskError::Config(format!("cannot read {filename}: {e}")))?;
        serde_yaml::from_str(&config)
            .map_err(|e| DeskError::Config(format!("cannot parse {filename}: {e}")))
    }

    /// Loads `$SRH_CONFIG` if set, defaults otherwise, then applies
    /// `$SRH_API_URL`.
    pub fn from_env() -> Result<Self, DeskError> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::load(&path)?,
            Err(_) => Self::default(),
        };
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api.base_url = url;
            }
        }
        Ok(config)
    }
}
