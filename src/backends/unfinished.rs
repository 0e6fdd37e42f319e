// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::backends::{report, Operation};
use crate::errors::BackendError;
use crate::traits::Backend;

/// Placeholder for a backend that is still being written.
///
/// Start a new backend from this: both operations fail with
/// [`BackendError::NotImplemented`] until they are filled in.
pub struct UnfinishedBackend {
    name: &'static str,
}

impl UnfinishedBackend {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    fn not_implemented(&self, operation: Operation) -> Result<String, BackendError> {
        report(
            self.name,
            operation,
            Err(BackendError::NotImplemented {
                backend: self.name,
                operation: operation.method(),
            }),
        )
    }
}

#[async_trait]
impl Backend for UnfinishedBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn greet(&self, _name: &str) -> Result<String, BackendError> {
        self.not_implemented(Operation::SayHello)
    }

    async fn greet_async(&self, _name: &str) -> Result<String, BackendError> {
        self.not_implemented(Operation::SayHelloAsync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_both_operations_fail_not_implemented() {
        let backend = UnfinishedBackend::new("Tauri Backend");

        assert_eq!(
            backend.greet("Ada").await,
            Err(BackendError::NotImplemented {
                backend: "Tauri Backend",
                operation: "say_hello",
            })
        );
        assert_eq!(
            backend.greet_async("Ada").await,
            Err(BackendError::NotImplemented {
                backend: "Tauri Backend",
                operation: "say_hello_async",
            })
        );
    }
}
