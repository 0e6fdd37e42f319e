// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for selector resolution and backend construction.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Selector token read from the location fragment.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use backend_switchboard::observability::messages::factory::BackendTypeResolved;
///
/// let msg = BackendTypeResolved { token: "webview" };
/// assert_eq!(msg.to_string(), "Expected backend type from scene: webview");
/// ```
pub struct BackendTypeResolved<'a> {
    pub token: &'a str,
}

impl Display for BackendTypeResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Expected backend type from scene: {}", self.token)
    }
}

impl StructuredLog for BackendTypeResolved<'_> {
    fn log(&self) {
        tracing::info!(token = self.token, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("backend_type_resolved", span_name = name, token = self.token)
    }
}

/// Backend chosen for a recognized token.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use backend_switchboard::observability::messages::factory::BackendSelected;
///
/// let msg = BackendSelected { token: "qt", backend: "Qt4 Backend" };
/// assert_eq!(msg.to_string(), "Using Qt4 Backend (forced by URL hash)");
/// ```
pub struct BackendSelected<'a> {
    pub token: &'a str,
    pub backend: &'a str,
}

impl Display for BackendSelected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Using {} (forced by URL hash)", self.backend)
    }
}

impl StructuredLog for BackendSelected<'_> {
    fn log(&self) {
        tracing::info!(token = self.token, backend = self.backend, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "backend_selected",
            span_name = name,
            token = self.token,
            backend = self.backend,
        )
    }
}

/// Token does not name any backend.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownBackendRequested<'a> {
    pub token: &'a str,
}

impl Display for UnknownBackendRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unknown backend type: {}", self.token)
    }
}

impl StructuredLog for UnknownBackendRequested<'_> {
    fn log(&self) {
        tracing::error!(token = self.token, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("unknown_backend", span_name = name, token = self.token)
    }
}
