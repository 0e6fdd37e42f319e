// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::backends::BackendKind;
use crate::errors::BackendError;
use crate::traits::Backend;

/// Uniform handle returned by the factory.
///
/// `context` records the selector token that produced the handle. It is there
/// for diagnostics; calls are dispatched by the wrapped backend alone.
#[derive(Clone)]
pub struct BackendHandle {
    context: String,
    kind: BackendKind,
    backend: Arc<dyn Backend>,
}

impl BackendHandle {
    pub fn new(context: String, kind: BackendKind, backend: Arc<dyn Backend>) -> Self {
        Self {
            context,
            kind,
            backend,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.backend.name()
    }

    pub async fn greet(&self, name: &str) -> Result<String, BackendError> {
        self.backend.greet(name).await
    }

    pub async fn greet_async(&self, name: &str) -> Result<String, BackendError> {
        self.backend.greet_async(name).await
    }
}

impl fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendHandle")
            .field("context", &self.context)
            .field("kind", &self.kind)
            .field("backend", &self.backend.name())
            .finish()
    }
}
