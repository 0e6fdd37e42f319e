// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for host-side frontend discovery.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A frontend source was picked.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FrontendSelected<'a> {
    pub source: &'a str,
    pub url: &'a str,
}

impl Display for FrontendSelected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Using {} frontend at {}", self.source, self.url)
    }
}

impl StructuredLog for FrontendSelected<'_> {
    fn log(&self) {
        tracing::info!(source = self.source, url = self.url, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "frontend_selected",
            span_name = name,
            source = self.source,
            url = self.url,
        )
    }
}

/// Neither a dev server nor a built frontend was found.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct NoFrontendFound<'a> {
    pub dev_server_port: u16,
    pub dist_dir: &'a str,
}

impl Display for NoFrontendFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No frontend found: nothing listening on port {} and '{}' does not exist",
            self.dev_server_port, self.dist_dir
        )
    }
}

impl StructuredLog for NoFrontendFound<'_> {
    fn log(&self) {
        tracing::warn!(
            dev_server_port = self.dev_server_port,
            dist_dir = self.dist_dir,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("no_frontend", span_name = name, dist_dir = self.dist_dir)
    }
}

/// Launch URL handed to the window.
///
/// # Log Level
/// `info!` - Important operational event
pub struct LaunchUrlComposed<'a> {
    pub url: &'a str,
    pub backend_type: &'a str,
}

impl Display for LaunchUrlComposed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Launching {} with backend type '{}'",
            self.url, self.backend_type
        )
    }
}

impl StructuredLog for LaunchUrlComposed<'_> {
    fn log(&self) {
        tracing::info!(url = self.url, backend_type = self.backend_type, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "launch_url",
            span_name = name,
            url = self.url,
            backend_type = self.backend_type,
        )
    }
}

/// A static file server is up for a frontend directory.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StaticServerStarted<'a> {
    pub dir: &'a str,
    pub url: &'a str,
}

impl Display for StaticServerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Serving '{}' at {}", self.dir, self.url)
    }
}

impl StructuredLog for StaticServerStarted<'_> {
    fn log(&self) {
        tracing::info!(dir = self.dir, url = self.url, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("static_server", span_name = name, dir = self.dir, url = self.url)
    }
}

/// The static file server stopped with an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StaticServerFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for StaticServerFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Static server failed: {}", self.error)
    }
}

impl StructuredLog for StaticServerFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("static_server_failed", span_name = name, error = %self.error)
    }
}
