// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Log lines are built from small message structs rather than format strings
//! scattered through the code. Each message implements `Display` for the
//! human-readable text and [`messages::StructuredLog`] to emit itself through
//! `tracing` at its own level, with its fields attached.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::factory` - selector resolution and backend construction
//! * `messages::backend` - greeting calls, simulated latency and bridge failures
//! * `messages::launch` - host-side frontend discovery and launch URL building
//!
//! # Usage
//!
//! ```rust
//! use backend_switchboard::observability::messages::factory::BackendTypeResolved;
//! use backend_switchboard::observability::messages::StructuredLog;
//!
//! BackendTypeResolved { token: "qt" }.log();
//! ```
//!
//! The binary installs a `tracing_subscriber::fmt` subscriber; see [`init_logging`].

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Defaults to INFO, `RUST_LOG` overrides.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
