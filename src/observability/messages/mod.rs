// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Usage Pattern
//!
//! ```rust
//! use backend_switchboard::observability::messages::backend::OperationInvoked;
//! use backend_switchboard::observability::messages::StructuredLog;
//!
//! let msg = OperationInvoked {
//!     backend: "Mock",
//!     operation: "say_hello",
//!     name: "Ada",
//! };
//!
//! assert_eq!(msg.to_string(), "Mock: say_hello() Ada");
//! msg.log();
//! ```

pub mod backend;
pub mod factory;
pub mod launch;

use tracing::Span;

/// A message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a single event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
