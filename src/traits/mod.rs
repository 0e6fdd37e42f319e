// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backend;
pub mod bridge;
pub mod location;

pub use backend::Backend;
pub use bridge::{BridgeHost, PyWebViewApi, WebUiBinding};
pub use location::LocationSource;
