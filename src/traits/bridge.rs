// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Seams for host-provided bridge objects.
//!
//! The hosting window may or may not inject a bridge, and may inject it late.
//! Backends therefore ask a [`BridgeHost`] on every call instead of holding on
//! to a binding.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::RemoteError;

/// API object exposed by an embedded Python webview host.
#[async_trait]
pub trait PyWebViewApi: Send + Sync {
    async fn say_hello(&self, name: &str) -> Result<String, RemoteError>;

    async fn say_hello_async(&self, name: &str) -> Result<String, RemoteError>;
}

/// Generic call entry point exposed by a WebUI host.
#[async_trait]
pub trait WebUiBinding: Send + Sync {
    async fn call(&self, method: &str, arg: &str) -> Result<String, RemoteError>;
}

/// Lookup for whichever bridge objects the host currently provides.
pub trait BridgeHost: Send + Sync {
    fn pywebview_api(&self) -> Option<Arc<dyn PyWebViewApi>>;

    fn webui(&self) -> Option<Arc<dyn WebUiBinding>>;
}
