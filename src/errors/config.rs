// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading and validating settings files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// Only `.yaml`, `.yml` and `.toml` files are understood.
    #[error("Unsupported settings format for '{}': expected .yaml, .yml or .toml", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A latency window must start above zero and end after it starts.
    #[error("Invalid delay range: min_ms={min_ms} must be above zero and below max_ms={max_ms}")]
    InvalidDelayRange {
        min_ms: u64,
        max_ms: u64,
    },

    #[error("Delay '{0}' must be greater than zero")]
    ZeroDelay(&'static str),
}
