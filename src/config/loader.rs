// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::*;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level settings for backend selection and the host launcher.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the stock behavior.
///
/// # Example
/// ```yaml
/// backend_type: qt
/// mock:
///   greet_delay: { min_ms: 100, max_ms: 500 }
///   greet_async_delay: { min_ms: 500, max_ms: 1500 }
/// legacy:
///   greet_async_delay_ms: 800
/// frontend:
///   dev_server_port: 5173
///   serve_port: 8000
///   dist_dir: frontend/dist
///   dummy_dir: frontend-dummy
///   concept_debug: false
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Selector token the host hands to the page
    pub backend_type: String,
    pub mock: MockSettings,
    pub legacy: LegacySettings,
    pub frontend: FrontendSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_type: DEFAULT_BACKEND_TYPE.to_string(),
            mock: MockSettings::default(),
            legacy: LegacySettings::default(),
            frontend: FrontendSettings::default(),
        }
    }
}

/// Half-open latency window `[min_ms, max_ms)`.
///
/// Only non-empty windows starting above zero can be built, whether through
/// [`DelayRange::new`] or a settings file.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawDelayRange")]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

#[derive(Deserialize)]
struct RawDelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl TryFrom<RawDelayRange> for DelayRange {
    type Error = ConfigError;

    fn try_from(raw: RawDelayRange) -> Result<Self, Self::Error> {
        DelayRange::new(raw.min_ms, raw.max_ms)
    }
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, ConfigError> {
        if min_ms == 0 || min_ms >= max_ms {
            return Err(ConfigError::InvalidDelayRange { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    // for the compiled-in defaults
    const fn known(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MockSettings {
    pub greet_delay: DelayRange,
    pub greet_async_delay: DelayRange,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            greet_delay: DelayRange::known(MOCK_GREET_MIN_MS, MOCK_GREET_MAX_MS),
            greet_async_delay: DelayRange::known(MOCK_GREET_ASYNC_MIN_MS, MOCK_GREET_ASYNC_MAX_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LegacySettings {
    pub greet_async_delay_ms: u64,
}

impl LegacySettings {
    pub fn greet_async_delay(&self) -> Duration {
        Duration::from_millis(self.greet_async_delay_ms)
    }
}

impl Default for LegacySettings {
    fn default() -> Self {
        Self {
            greet_async_delay_ms: LEGACY_GREET_ASYNC_DELAY_MS,
        }
    }
}

/// Where the host looks for the frontend it loads into the window.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FrontendSettings {
    pub dev_server_port: u16,
    pub serve_port: u16,
    pub dist_dir: PathBuf,
    pub dummy_dir: PathBuf,
    /// Serve the dummy frontend instead of probing for the real one
    pub concept_debug: bool,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
            serve_port: DEFAULT_SERVE_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            dummy_dir: PathBuf::from(DEFAULT_DUMMY_DIR),
            concept_debug: false,
        }
    }
}

impl Settings {
    /// Check the timing envelopes.
    ///
    /// Mock windows are checked when a [`DelayRange`] is built; this covers
    /// the fixed legacy delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.legacy.greet_async_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("legacy.greet_async_delay_ms"));
        }
        Ok(())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Takes the lookup as a closure so tests do not have to mutate the
    /// process environment.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend_type) = lookup(ENV_BACKEND_TYPE).filter(|v| !v.is_empty()) {
            self.backend_type = backend_type;
        }
        if let Some(flag) = lookup(ENV_CONCEPT_DEBUG) {
            self.frontend.concept_debug = flag == "true";
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }
}

/// Parse settings from YAML text.
pub fn parse_yaml(content: &str) -> Result<Settings, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Parse settings from TOML text.
pub fn parse_toml(content: &str) -> Result<Settings, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load settings from a `.yaml`, `.yml` or `.toml` file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml(&content),
        Some("toml") => parse_toml(&content),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load, apply environment overrides and validate.
///
/// With no path the defaults are used as the base.
pub fn load_and_validate_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    settings.apply_env();
    settings.validate()?;
    Ok(settings)
}
