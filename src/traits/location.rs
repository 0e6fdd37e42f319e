// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Read access to the page location the frontend was loaded with.
pub trait LocationSource: Send + Sync {
    /// Current fragment including the leading `#`, or an empty string.
    fn hash(&self) -> String;
}
