// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::RwLock;
use url::Url;

use crate::traits::LocationSource;

/// In-process page location whose fragment can change while it is shared.
///
/// Plays the part of `window.location` for code that is not running inside a
/// browser: the host navigates it, resolvers read from it.
///
/// # Example
/// ```
/// use backend_switchboard::context::PageLocation;
/// use backend_switchboard::traits::LocationSource;
///
/// let location = PageLocation::blank();
/// assert_eq!(location.hash(), "");
///
/// location.navigate("http://localhost:5173/#backend_type=qt").unwrap();
/// assert_eq!(location.hash(), "#backend_type=qt");
/// ```
#[derive(Debug, Default)]
pub struct PageLocation {
    hash: RwLock<String>,
}

impl PageLocation {
    /// A location with no fragment.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A location whose fragment is `hash`; a missing leading `#` is added.
    pub fn with_hash(hash: &str) -> Self {
        let location = Self::blank();
        location.set_hash(hash);
        location
    }

    /// Replace the fragment. An empty string clears it.
    pub fn set_hash(&self, hash: &str) {
        let normalized = if hash.is_empty() || hash.starts_with('#') {
            hash.to_string()
        } else {
            format!("#{}", hash)
        };
        *self.hash.write().unwrap_or_else(|e| e.into_inner()) = normalized;
    }

    /// Adopt the fragment of `url`, the way a page load would.
    pub fn navigate(&self, url: &str) -> Result<(), url::ParseError> {
        let parsed = Url::parse(url)?;
        self.set_hash(parsed.fragment().unwrap_or_default());
        Ok(())
    }
}

impl LocationSource for PageLocation {
    fn hash(&self) -> String {
        self.hash.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_hash_adds_marker() {
        let location = PageLocation::blank();
        location.set_hash("backend_type=webui");
        assert_eq!(location.hash(), "#backend_type=webui");

        location.set_hash("#backend_type=qt");
        assert_eq!(location.hash(), "#backend_type=qt");

        location.set_hash("");
        assert_eq!(location.hash(), "");
    }

    #[test]
    fn test_navigate_without_fragment_clears_hash() {
        let location = PageLocation::with_hash("backend_type=qt");
        location.navigate("http://localhost:8000/index.html").unwrap();
        assert_eq!(location.hash(), "");
    }

    #[test]
    fn test_navigate_rejects_relative_url() {
        let location = PageLocation::with_hash("backend_type=qt");
        assert!(location.navigate("index.html#backend_type=mock").is_err());
        assert_eq!(location.hash(), "#backend_type=qt");
    }
}
