// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;

use crate::backends::{report, Operation};
use crate::errors::BackendError;
use crate::observability::messages::{backend::OperationInvoked, StructuredLog};
use crate::traits::{Backend, BridgeHost};

/// Bridge name reported when the PyWebView API object is missing
pub const PYWEBVIEW_BRIDGE: &str = "PyWebView API";

/// Embedded Python webview host: calls `say_hello` / `say_hello_async` on the
/// API object the host exposes.
pub struct WebViewPythonBackend {
    host: Arc<dyn BridgeHost>,
}

impl WebViewPythonBackend {
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
            let result = match self.host.pywebview_api() {
                Some(api) => {
                    let reply = match operation {
                        Operation::SayHello => api.say_hello(name).await,
                        Operation::SayHelloAsync => api.say_hello_async(name).await,
                    };
                    reply.map_err(BackendError::from)
                }
                None => Err(BackendError::BridgeUnavailable {
                    bridge: PYWEBVIEW_BRIDGE,
                }),
            };
            report(invoked.backend, operation, result)
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl Backend for WebViewPythonBackend {
    fn name(&self) -> &'static str {
        "WebView Backend"
    }

    async fn greet(&self, name: &str) -> Result<String, BackendError> {
        self.invoke(Operation::SayHello, name).await
    }

    async fn greet_async(&self, name: &str) -> Result<String, BackendError> {
        self.invoke(Operation::SayHelloAsync, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{FailingPyWebView, StubPyWebView};
    use crate::backends::HostBindings;
    use crate::errors::RemoteError;

    #[tokio::test]
    async fn test_missing_bridge_fails_both_operations() {
        let backend = WebViewPythonBackend::new(Arc::new(HostBindings::empty()));
        let unavailable = BackendError::BridgeUnavailable {
            bridge: PYWEBVIEW_BRIDGE,
        };

        assert_eq!(backend.greet("Ada").await, Err(unavailable.clone()));
        assert_eq!(backend.greet_async("Ada").await, Err(unavailable));
    }

    #[tokio::test]
    async fn test_delegates_to_matching_remote_procedure() {
        let api = Arc::new(StubPyWebView::default());
        let host = Arc::new(HostBindings::empty().with_pywebview(api.clone()));
        let backend = WebViewPythonBackend::new(host);

        assert_eq!(backend.greet("Ada").await.unwrap(), "say_hello:Ada");
        assert_eq!(backend.greet_async("Ada").await.unwrap(), "say_hello_async:Ada");
        assert_eq!(api.calls(), vec!["say_hello:Ada", "say_hello_async:Ada"]);
    }

    #[tokio::test]
    async fn test_bridge_is_looked_up_per_call() {
        let host = Arc::new(HostBindings::empty());
        let backend = WebViewPythonBackend::new(host.clone());

        assert!(backend.greet("Ada").await.is_err());

        host.install_pywebview(Arc::new(StubPyWebView::default()));
        assert_eq!(backend.greet("Ada").await.unwrap(), "say_hello:Ada");

        host.remove_pywebview();
        assert_eq!(
            backend.greet("Ada").await,
            Err(BackendError::BridgeUnavailable {
                bridge: PYWEBVIEW_BRIDGE
            })
        );
    }

    #[tokio::test]
    async fn test_remote_error_passes_through_unchanged() {
        let host = Arc::new(
            HostBindings::empty().with_pywebview(Arc::new(FailingPyWebView::new("boom"))),
        );
        let backend = WebViewPythonBackend::new(host);

        let err = backend.greet_async("Ada").await.unwrap_err();
        assert_eq!(err, BackendError::Remote(RemoteError::new("boom")));
        assert_eq!(err.to_string(), "boom");

        assert_eq!(
            backend.greet("Ada").await,
            Err(BackendError::Remote(RemoteError::new("boom")))
        );
    }
}
