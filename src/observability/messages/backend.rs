// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for greeting calls on a backend.
//!
//! This module contains message types for logging events related to:
//! * Operation invocation
//! * Simulated latency on the mock and legacy paths
//! * Bridge lookups and remote failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A backend operation was called.
///
/// # Log Level
/// `debug!` - Per-call trace
pub struct OperationInvoked<'a> {
    pub backend: &'a str,
    pub operation: &'a str,
    pub name: &'a str,
}

impl Display for OperationInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}: {}() {}", self.backend, self.operation, self.name)
    }
}

impl StructuredLog for OperationInvoked<'_> {
    fn log(&self) {
        tracing::debug!(
            backend = self.backend,
            operation = self.operation,
            greeting_name = self.name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "backend_operation",
            span_name = name,
            backend = self.backend,
            operation = self.operation,
        )
    }
}

/// A backend is about to sleep to simulate latency.
///
/// # Log Level
/// `trace!` - Timing detail
pub struct SimulatedDelay<'a> {
    pub backend: &'a str,
    pub operation: &'a str,
    pub delay: Duration,
}

impl Display for SimulatedDelay<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: simulating {:?} latency for {}()",
            self.backend, self.delay, self.operation
        )
    }
}

impl StructuredLog for SimulatedDelay<'_> {
    fn log(&self) {
        tracing::trace!(
            backend = self.backend,
            operation = self.operation,
            delay_ms = self.delay.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "simulated_delay",
            span_name = name,
            backend = self.backend,
            delay = ?self.delay,
        )
    }
}

/// A backend operation failed; the error goes back to the caller unchanged.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use backend_switchboard::errors::BackendError;
/// use backend_switchboard::observability::messages::backend::OperationFailed;
///
/// let error = BackendError::BridgeUnavailable { bridge: "WebUI" };
/// let msg = OperationFailed {
///     backend: "WebUI",
///     operation: "say_hello",
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "WebUI: say_hello() failed: WebUI not available");
/// ```
pub struct OperationFailed<'a> {
    pub backend: &'a str,
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for OperationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {}() failed: {}",
            self.backend, self.operation, self.error
        )
    }
}

impl StructuredLog for OperationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            backend = self.backend,
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "backend_operation_failed",
            span_name = name,
            backend = self.backend,
            operation = self.operation,
            error = %self.error,
        )
    }
}
