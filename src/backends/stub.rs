// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test-only bridge objects standing in for a real host window.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::RemoteError;
use crate::traits::{PyWebViewApi, WebUiBinding};

/// PyWebView API that echoes `<procedure>:<name>` and records every call
#[derive(Default)]
pub struct StubPyWebView {
    calls: Mutex<Vec<String>>,
}

impl StubPyWebView {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, procedure: &str, name: &str) -> String {
        let reply = format!("{}:{}", procedure, name);
        self.calls.lock().unwrap().push(reply.clone());
        reply
    }
}

#[async_trait]
impl PyWebViewApi for StubPyWebView {
    async fn say_hello(&self, name: &str) -> Result<String, RemoteError> {
        Ok(self.record("say_hello", name))
    }

    async fn say_hello_async(&self, name: &str) -> Result<String, RemoteError> {
        tokio::task::yield_now().await;
        Ok(self.record("say_hello_async", name))
    }
}

/// PyWebView API whose every call raises
pub struct FailingPyWebView {
    message: String,
}

impl FailingPyWebView {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl PyWebViewApi for FailingPyWebView {
    async fn say_hello(&self, _name: &str) -> Result<String, RemoteError> {
        Err(RemoteError::new(self.message.clone()))
    }

    async fn say_hello_async(&self, _name: &str) -> Result<String, RemoteError> {
        Err(RemoteError::new(self.message.clone()))
    }
}

/// WebUI binding that answers `<method>(<arg>)` and records every call
#[derive(Default)]
pub struct StubWebUi {
    calls: Mutex<Vec<(String, String)>>,
}

impl StubWebUi {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebUiBinding for StubWebUi {
    async fn call(&self, method: &str, arg: &str) -> Result<String, RemoteError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), arg.to_string()));
        Ok(format!("{}({})", method, arg))
    }
}

/// WebUI binding whose every call raises
pub struct FailingWebUi {
    message: String,
}

impl FailingWebUi {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl WebUiBinding for FailingWebUi {
    async fn call(&self, _method: &str, _arg: &str) -> Result<String, RemoteError> {
        Err(RemoteError::new(self.message.clone()))
    }
}
