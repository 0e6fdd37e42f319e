// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;

use crate::backends::{report, Operation};
use crate::errors::BackendError;
use crate::observability::messages::{backend::OperationInvoked, StructuredLog};
use crate::traits::{Backend, BridgeHost};

/// Bridge name reported when the WebUI binding is missing
pub const WEBUI_BRIDGE: &str = "WebUI";

/// WebUI host: everything goes through the generic `call(method, arg)` entry
/// point, with the remote procedure name as the method.
pub struct WebUiBackend {
    host: Arc<dyn BridgeHost>,
}

impl WebUiBackend {
    pub fn new(host: Arc<dyn BridgeHost>) -> Self {
        Self { host }
    }

    async fn invoke(&self, operation: Operation, name: &str) -> Result<String, BackendError> {
        let invoked = OperationInvoked {
            backend: self.name(),
            operation: operation.method(),
            name,
        };
        let span = invoked.span("bridge_call");

        async move {
            invoked.log();
            let result = match self.host.webui() {
                Some(binding) => binding
                    .call(operation.method(), name)
                    .await
                    .map_err(BackendError::from),
                None => Err(BackendError::BridgeUnavailable {
                    bridge: WEBUI_BRIDGE,
                }),
            };
            report(invoked.backend, operation, result)
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl Backend for WebUiBackend {
    fn name(&self) -> &'static str {
        "WebUI Backend"
    }

    async fn greet(&self, name: &str) -> Result<String, BackendError> {
        self.invoke(Operation::SayHello, name).await
    }

    async fn greet_async(&self, name: &str) -> Result<String, BackendError> {
        self.invoke(Operation::SayHelloAsync, name).await
    }
}
