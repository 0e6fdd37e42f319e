// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Host-side half of backend selection.
//!
//! The host window decides which frontend to load and writes the selector
//! token into the fragment of the URL it opens, serving built assets itself
//! when there is no dev server. The frontend half
//! ([`crate::context`]) reads it back.

mod frontend;
mod fragment;
mod server;

pub use frontend::{FrontendLocator, FrontendSource, LaunchedFrontend, PLACEHOLDER_PAGE};
pub use fragment::{compose_launch_url, launch_backend_type};
pub use server::{start_static_server, StaticServerHandle};
