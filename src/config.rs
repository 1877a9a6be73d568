use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Checked in order; the first non-blank value wins.
const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Optional on-disk settings. Never holds the credential.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub font_path: Option<PathBuf>,
}

/// Read once at startup, read-only afterwards.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub request_timeout: Option<Duration>,
    pub font_path: Option<PathBuf>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .field("font_path", &self.font_path)
            .finish()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::resolve(load_config_file(), |key| std::env::var(key).ok())
    }

    /// Merges the config file with environment lookups. Environment wins.
    pub fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_blank = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let Some(api_key) = API_KEY_VARS.iter().find_map(|key| non_blank(*key)) else {
            bail!(
                "no API credential found; set {} in the environment",
                API_KEY_VARS.join(" or ")
            );
        };

        let model = non_blank("COPYWIZ_MODEL")
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = non_blank("COPYWIZ_API_BASE")
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
            api_base,
            request_timeout: file
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            font_path: file.font_path,
        })
    }
}

pub fn config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("community_copywiz");
    path.push("config.json");
    path
}

/// Missing file means defaults; a malformed one is reported and ignored.
pub fn load_config_file() -> ConfigFile {
    let path = config_path();
    let Ok(raw) = fs::read_to_string(&path) else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return ConfigFile::default();
    };

    parse_config_file(&raw).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config file");
        ConfigFile::default()
    })
}

pub fn parse_config_file(raw: &str) -> Result<ConfigFile, serde_json::Error> {
    serde_json::from_str(raw)
}
