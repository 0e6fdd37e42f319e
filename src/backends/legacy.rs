// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use tracing::Instrument;

use crate::backends::Operation;
use crate::config::LegacySettings;
use crate::errors::BackendError;
use crate::observability::messages::backend::{OperationInvoked, SimulatedDelay};
use crate::observability::messages::StructuredLog;
use crate::traits::Backend;

/// Qt4 WebKit host. Has no bridge of its own; replies are produced locally.
pub struct Qt4Backend {
    settings: LegacySettings,
}

impl Qt4Backend {
    pub fn new(settings: LegacySettings) -> Self {
        Self { settings }
    }
}

impl Default for Qt4Backend {
    fn default() -> Self {
        Self::new(LegacySettings::default())
    }
}

#[async_trait]
impl Backend for Qt4Backend {
    fn name(&self) -> &'static str {
        "Qt4 Backend"
    }

    async fn greet(&self, name: &str) -> Result<String, BackendError> {
        OperationInvoked {
            backend: self.name(),
            operation: Operation::SayHello.method(),
            name,
        }
        .log();
        Ok(format!("Hello {}! (from Qt4 Backend)", name))
    }

    async fn greet_async(&self, name: &str) -> Result<String, BackendError> {
        let invoked = OperationInvoked {
            backend: self.name(),
            operation: Operation::SayHelloAsync.method(),
            name,
        };
        let span = invoked.span("legacy_call");
        let delay = self.settings.greet_async_delay();

        async move {
            invoked.log();
            SimulatedDelay {
                backend: invoked.backend,
                operation: invoked.operation,
                delay,
            }
            .log();
            tokio::time::sleep(delay).await;
        }
        .instrument(span)
        .await;

        Ok(format!("Hello {}! (from Qt4 Backend - Async)", name))
    }
}
