// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::Instrument;

use crate::backends::Operation;
use crate::config::{DelayRange, MockSettings};
use crate::errors::BackendError;
use crate::observability::messages::backend::{OperationInvoked, SimulatedDelay};
use crate::observability::messages::StructuredLog;
use crate::traits::Backend;

/// Stand-in backend for running the frontend without any host.
///
/// Both operations always succeed after sleeping a random duration from
/// their configured window. The sleep only simulates latency; nothing is
/// held while it runs.
pub struct MockBackend {
    settings: MockSettings,
}

impl MockBackend {
    pub fn new(settings: MockSettings) -> Self {
        Self { settings }
    }

    async fn simulate_call(&self, operation: Operation, name: &str, range: DelayRange) {
        let invoked = OperationInvoked {
            backend: self.name(),
            operation: operation.method(),
            name,
        };
        let span = invoked.span("mock_call");

        async move {
            invoked.log();
            let delay = pick_delay(range);
            SimulatedDelay {
                backend: invoked.backend,
                operation: invoked.operation,
                delay,
            }
            .log();
            tokio::time::sleep(delay).await;
        }
        .instrument(span)
        .await
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(MockSettings::default())
    }
}

/// Uniform pick from `[min_ms, max_ms)`. `DelayRange` is never empty.
pub(crate) fn pick_delay(range: DelayRange) -> Duration {
    let ms = rand::thread_rng().gen_range(range.min_ms()..range.max_ms());
    Duration::from_millis(ms)
}

#[async_trait]
impl Backend for MockBackend {
    fn name(&self) -> &'static str {
        "Mock Backend"
    }

    async fn greet(&self, name: &str) -> Result<String, BackendError> {
        self.simulate_call(Operation::SayHello, name, self.settings.greet_delay)
            .await;
        Ok(format!("Hello {}! (from Mock Backend)", name))
    }

    async fn greet_async(&self, name: &str) -> Result<String, BackendError> {
        self.simulate_call(Operation::SayHelloAsync, name, self.settings.greet_async_delay)
            .await;
        Ok(format!("Hello {}! (from Mock Backend - Async)", name))
    }
}
