// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reading the backend selector token out of the page location.
//!
//! The host opens the frontend at `<url>#backend_type=<token>`. The frontend
//! side reads the token back from the fragment every time a backend is
//! created; nothing is cached between calls.

mod location;
mod resolver;

pub use location::PageLocation;
pub use resolver::{resolve_token, ContextResolver, BACKEND_TYPE_PARAM};
