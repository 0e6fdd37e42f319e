// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // backend variants + factory
pub mod config;        // settings files + defaults
pub mod context;       // selector token from the page location
pub mod errors;        // error handling
pub mod launch;        // host-side frontend discovery + launch URL
pub mod observability;
pub mod traits;        // unified abstractions
