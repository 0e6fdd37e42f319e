// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Backend implementations behind the greeting capability set.
//!
//! Every backend implements the [`Backend`](crate::traits::Backend) trait and
//! is constructed through [`BackendFactory`] from the selector token found in
//! the page location.
//!
//! # Available Backends
//!
//! | token     | backend                 | behavior                                        |
//! |-----------|-------------------------|-------------------------------------------------|
//! | `mock`    | [`MockBackend`]         | canned replies after a random simulated latency |
//! | `webview` | [`WebViewPythonBackend`]| delegates to the host's PyWebView API object    |
//! | `webui`   | [`WebUiBackend`]        | delegates to the host's WebUI `call` entry point |
//! | `qt`      | [`Qt4Backend`]          | canned replies, fixed latency on the async path |
//!
//! [`UnfinishedBackend`] is the explicit placeholder for a backend that is
//! still being written; both operations fail with `NotImplemented`.
//!
//! # Architecture
//!
//! ```text
//! PageLocation → ContextResolver → token → BackendKind → BackendFactory → BackendHandle
//! ```
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//! use backend_switchboard::backends::{BackendFactory, BackendKind, HostBindings};
//! use backend_switchboard::context::PageLocation;
//!
//! let location = Arc::new(PageLocation::with_hash("#backend_type=qt"));
//! let factory = BackendFactory::new(location, Arc::new(HostBindings::empty()));
//!
//! let handle = factory.create()?;
//! assert_eq!(handle.context(), "qt");
//! assert_eq!(handle.kind(), BackendKind::Qt);
//! # Ok::<(), backend_switchboard::errors::BackendError>(())
//! ```

pub mod bridges;
pub mod factory;
pub mod handle;
pub mod kind;
pub mod legacy;
pub mod mock;
#[cfg(test)]
pub mod stub;
pub mod unfinished;

#[cfg(test)]
mod integration_tests;

pub use bridges::{HostBindings, WebUiBackend, WebViewPythonBackend};
pub use factory::{create_backend, BackendFactory};
pub use handle::BackendHandle;
pub use kind::BackendKind;
pub use legacy::Qt4Backend;
pub use mock::MockBackend;
pub use unfinished::UnfinishedBackend;

use crate::errors::BackendError;
use crate::observability::messages::{backend::OperationFailed, StructuredLog};

/// The two operations of the capability set, named by their remote procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SayHello,
    SayHelloAsync,
}

impl Operation {
    /// Remote procedure name, also used as the WebUI method identifier
    pub fn method(self) -> &'static str {
        match self {
            Operation::SayHello => "say_hello",
            Operation::SayHelloAsync => "say_hello_async",
        }
    }
}

/// Log a failed operation and hand the result back untouched.
pub(crate) fn report(
    backend: &str,
    operation: Operation,
    result: Result<String, BackendError>,
) -> Result<String, BackendError> {
    if let Err(error) = &result {
        OperationFailed {
            backend,
            operation: operation.method(),
            error,
        }
        .log();
    }
    result
}
