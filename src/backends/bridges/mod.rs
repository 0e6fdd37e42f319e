// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Backends that delegate to a bridge object injected by the host window.
//!
//! The bridge is looked up through [`BridgeHost`](crate::traits::BridgeHost)
//! on every call. A missing bridge is a per-call
//! [`BackendError::BridgeUnavailable`](crate::errors::BackendError), and remote
//! failures come back as [`BackendError::Remote`](crate::errors::BackendError)
//! with the remote message intact.

mod host;
mod webui;
mod webview;

pub use host::HostBindings;
pub use webui::{WebUiBackend, WEBUI_BRIDGE};
pub use webview::{WebViewPythonBackend, PYWEBVIEW_BRIDGE};
