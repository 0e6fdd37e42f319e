// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by backend selection and backend operations.
//!
//! Every variant is a per-call condition the caller can recover from. Nothing
//! here is retried or swallowed on the way up.

use thiserror::Error;

/// Opaque failure reported by a host-provided bridge object.
///
/// The message is whatever the remote side produced; it is passed through to
/// the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur while creating or calling a backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend does not provide this operation yet.
    #[error("{operation} is not implemented by the {backend} backend")]
    NotImplemented {
        backend: &'static str,
        operation: &'static str,
    },

    /// The selector token does not name a known backend.
    #[error("Unknown backend type: {token}")]
    UnknownBackend { token: String },

    /// The host did not provide the bridge object this backend delegates to.
    #[error("{bridge} not available")]
    BridgeUnavailable { bridge: &'static str },

    /// The remote bridge call itself failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
