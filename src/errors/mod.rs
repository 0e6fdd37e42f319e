// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod backend;
mod config;
mod launch;

pub use backend::{BackendError, RemoteError};
pub use config::ConfigError;
pub use launch::LaunchError;
