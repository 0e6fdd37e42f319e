// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::{
    BackendHandle, BackendKind, MockBackend, Qt4Backend, WebUiBackend, WebViewPythonBackend,
};
use crate::config::Settings;
use crate::context::ContextResolver;
use crate::errors::{BackendError, ConfigError};
use crate::observability::messages::factory::{
    BackendSelected, BackendTypeResolved, UnknownBackendRequested,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Backend, BridgeHost, LocationSource};

/// Builds a backend for whatever selector token the page location carries.
///
/// The token is read again on every [`create`](Self::create) call, so a
/// factory kept around keeps following the location.
pub struct BackendFactory {
    resolver: ContextResolver,
    host: Arc<dyn BridgeHost>,
    settings: Settings,
}

impl BackendFactory {
    pub fn new(location: Arc<dyn LocationSource>, host: Arc<dyn BridgeHost>) -> Self {
        Self {
            resolver: ContextResolver::new(location),
            host,
            settings: Settings::default(),
        }
    }

    /// Use `settings` for the timing of the simulated backends.
    ///
    /// Fails if the settings do not pass [`Settings::validate`].
    pub fn with_settings(mut self, settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    /// Create a backend handle for the current selector token.
    ///
    /// - "mock" -> MockBackend
    /// - "webview" -> WebViewPythonBackend
    /// - "webui" -> WebUiBackend
    /// - "qt" -> Qt4Backend
    ///
    /// Anything else fails with [`BackendError::UnknownBackend`].
    pub fn create(&self) -> Result<BackendHandle, BackendError> {
        let token = self.resolver.resolve();
        let resolved = BackendTypeResolved { token: &token };
        let span = resolved.span("create_backend");
        let _guard = span.enter();
        resolved.log();

        let kind = match BackendKind::from_token(&token) {
            Some(kind) => kind,
            None => {
                UnknownBackendRequested { token: &token }.log();
                return Err(BackendError::UnknownBackend { token });
            }
        };

        let backend = self.instantiate(kind);
        BackendSelected {
            token: &token,
            backend: backend.name(),
        }
        .log();

        Ok(BackendHandle::new(token, kind, backend))
    }

    fn instantiate(&self, kind: BackendKind) -> Arc<dyn Backend> {
        match kind {
            BackendKind::Mock => Arc::new(MockBackend::new(self.settings.mock)),
            BackendKind::WebView => Arc::new(WebViewPythonBackend::new(self.host.clone())),
            BackendKind::WebUi => Arc::new(WebUiBackend::new(self.host.clone())),
            BackendKind::Qt => Arc::new(Qt4Backend::new(self.settings.legacy)),
        }
    }

    /// List the selector tokens the factory recognizes
    pub fn list_available_backends() -> Vec<&'static str> {
        BackendKind::ALL.iter().map(|kind| kind.token()).collect()
    }

    /// Check whether a token names a backend
    pub fn is_backend_available(token: &str) -> bool {
        BackendKind::from_token(token).is_some()
    }
}

/// One-shot convenience: build a factory with default settings and create.
pub fn create_backend(
    location: Arc<dyn LocationSource>,
    host: Arc<dyn BridgeHost>,
) -> Result<BackendHandle, BackendError> {
    BackendFactory::new(location, host).create()
}
