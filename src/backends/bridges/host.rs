// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, RwLock};

use crate::traits::{BridgeHost, PyWebViewApi, WebUiBinding};

/// Slots for the bridge objects a host may inject, filled or emptied at runtime.
///
/// # Example
/// ```
/// use backend_switchboard::backends::HostBindings;
/// use backend_switchboard::traits::BridgeHost;
///
/// let host = HostBindings::empty();
/// assert!(host.pywebview_api().is_none());
/// assert!(host.webui().is_none());
/// ```
#[derive(Default)]
pub struct HostBindings {
    pywebview: RwLock<Option<Arc<dyn PyWebViewApi>>>,
    webui: RwLock<Option<Arc<dyn WebUiBinding>>>,
}

impl HostBindings {
    /// No bridge bound.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_pywebview(self, api: Arc<dyn PyWebViewApi>) -> Self {
        self.install_pywebview(api);
        self
    }

    pub fn with_webui(self, binding: Arc<dyn WebUiBinding>) -> Self {
        self.install_webui(binding);
        self
    }

    pub fn install_pywebview(&self, api: Arc<dyn PyWebViewApi>) {
        *self.pywebview.write().unwrap_or_else(|e| e.into_inner()) = Some(api);
    }

    pub fn remove_pywebview(&self) -> Option<Arc<dyn PyWebViewApi>> {
        self.pywebview.write().unwrap_or_else(|e| e.into_inner()).take()
    }

    pub fn install_webui(&self, binding: Arc<dyn WebUiBinding>) {
        *self.webui.write().unwrap_or_else(|e| e.into_inner()) = Some(binding);
    }

    pub fn remove_webui(&self) -> Option<Arc<dyn WebUiBinding>> {
        self.webui.write().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl BridgeHost for HostBindings {
    fn pywebview_api(&self) -> Option<Arc<dyn PyWebViewApi>> {
        self.pywebview
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn webui(&self) -> Option<Arc<dyn WebUiBinding>> {
        self.webui.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
