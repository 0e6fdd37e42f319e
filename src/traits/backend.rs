// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::BackendError;

/// The greeting capability set every backend provides.
///
/// There are no default bodies: a new backend has to implement both
/// operations. A backend that is still under construction should return
/// [`BackendError::NotImplemented`] explicitly, the way
/// [`crate::backends::UnfinishedBackend`] does.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Human-readable backend name used in log lines
    fn name(&self) -> &'static str;

    /// Remote procedure `say_hello`
    async fn greet(&self, name: &str) -> Result<String, BackendError>;

    /// Remote procedure `say_hello_async`, the slow variant
    async fn greet_async(&self, name: &str) -> Result<String, BackendError>;
}
