use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use toolhub_providers::huggingface::DEFAULT_BASE_URL;

pub const CONFIG_FILE: &str = "toolhub.yaml";
pub const CONFIG_PATH_ENV: &str = "TOOLHUB_CONFIG";
pub const BASE_URL_ENV: &str = "TOOLHUB_API_BASE_URL";
/// Checked in order; the first non-empty value wins.
pub const TOKEN_ENVS: [&str; 2] = ["HUGGING_FACE_TOKEN", "HF_TOKEN"];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 60,
            artifacts_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// `$TOOLHUB_CONFIG` if set, otherwise `toolhub.yaml` in the working directory.
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load from the default path, apply environment overrides and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::path())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// A missing or empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                self.api_base_url = url.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid("api_base_url cannot be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Bearer token for the inference API, read from the process environment.
pub fn api_token() -> Option<String> {
    api_token_from(|key| std::env::var(key).ok())
}

pub fn api_token_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    TOKEN_ENVS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}
