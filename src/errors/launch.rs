// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::SocketAddr;
use thiserror::Error;

/// Failures while bringing up the frontend the host window will open.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to serve static frontend on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
