//! Configuration (layered: CLI flags > environment > settings file > defaults).
//!
//! The API key is only ever read from the environment, which may itself be
//! populated from a `.env` file in the working directory.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ChatError;
use crate::provider::openai::DEFAULT_BASE_URL;
use crate::types::GenerationSettings;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const MODEL_ENV: &str = "OPENAI_MODEL";
pub const TEMPERATURE_ENV: &str = "OPENAI_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_MAX_ITERATIONS: usize = 25;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Optional settings file contents. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub base_url: Option<String>,
    pub max_iterations: Option<usize>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, ChatError> {
        toml::from_str(raw).map_err(|e| ChatError::Configuration(format!("invalid settings: {e}")))
    }

    /// Load settings.
    ///
    /// An explicit `path` must exist. Without one, the platform config
    /// location is used when a file is present there, else defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ChatError> {
        if let Some(path) = path {
            return Self::read(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/toolchat/settings.toml` for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "toolchat")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    fn read(path: &Path) -> Result<Self, ChatError> {
        debug!(path = %path.display(), "loading settings file");
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ChatError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }
}

/// Values supplied on the command line; they win over every other layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub base_url: Option<String>,
    pub max_iterations: Option<usize>,
}

/// Resolved configuration, built once at startup and never mutated.
#[derive(Clone, PartialEq)]
pub struct ChatConfig {
    api_key: String,
    pub model: String,
    pub temperature: f64,
    pub base_url: String,
    pub max_iterations: usize,
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("max_iterations", &self.max_iterations)
            .finish()
    }
}

impl ChatConfig {
    /// Load from the process environment (after reading `.env` if present)
    /// and the settings file.
    ///
    /// The credential is checked before anything else is read, so a missing
    /// key is reported even when the settings file is broken.
    pub fn load(settings_path: Option<&Path>) -> Result<Self, ChatError> {
        let _ = dotenvy::dotenv();
        let lookup = |key: &str| std::env::var(key).ok();
        require_api_key(&lookup)?;
        let settings = Settings::load(settings_path)?;
        Self::resolve(&lookup, settings)
    }

    /// Resolve configuration from an environment lookup and settings.
    pub fn resolve<F>(lookup: &F, settings: Settings) -> Result<Self, ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require_api_key(lookup)?;

        let temperature = match non_empty(lookup(TEMPERATURE_ENV)) {
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                ChatError::Configuration(format!("{TEMPERATURE_ENV} is not a number: {raw}"))
            })?,
            None => settings.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        };

        let config = Self {
            api_key,
            model: non_empty(lookup(MODEL_ENV))
                .or(settings.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            base_url: non_empty(lookup(BASE_URL_ENV))
                .or(settings.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_iterations: settings.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
        };
        config.validate()
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ChatError> {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(temperature) = overrides.temperature {
            self.temperature = temperature;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(max_iterations) = overrides.max_iterations {
            self.max_iterations = max_iterations;
        }
        self.validate()
    }

    /// The agent needs at least one model turn to produce an answer.
    fn validate(self) -> Result<Self, ChatError> {
        if self.max_iterations == 0 {
            return Err(ChatError::Configuration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Generation settings for every model call.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .temperature(self.temperature)
            .build()
    }
}

fn require_api_key<F>(lookup: &F) -> Result<String, ChatError>
where
    F: Fn(&str) -> Option<String>,
{
    // Only an unset or empty key is missing; the key is used as given.
    lookup(API_KEY_ENV)
        .filter(|key| !key.is_empty())
        .ok_or(ChatError::MissingCredential)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
