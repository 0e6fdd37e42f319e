// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::config::consts::DEFAULT_BACKEND_TYPE;
use crate::traits::LocationSource;

/// Fragment parameter carrying the selector token
pub const BACKEND_TYPE_PARAM: &str = "backend_type";

fn selector_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII word class on purpose: the host only ever writes ASCII tokens
    PATTERN.get_or_init(|| {
        Regex::new(r"backend_type=([A-Za-z0-9_]+)").expect("selector pattern is a valid regex")
    })
}

/// Extract the selector token from a location fragment.
///
/// Returns the first `backend_type=<word>` match anywhere in `hash`, or
/// `"mock"` when there is none. Never fails.
///
/// # Example
/// ```
/// use backend_switchboard::context::resolve_token;
///
/// assert_eq!(resolve_token("#backend_type=webview"), "webview");
/// assert_eq!(resolve_token("#theme=dark&backend_type=qt"), "qt");
/// assert_eq!(resolve_token("#backend_type="), "mock");
/// assert_eq!(resolve_token(""), "mock");
/// ```
pub fn resolve_token(hash: &str) -> String {
    selector_pattern()
        .captures(hash)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_BACKEND_TYPE.to_string())
}

/// Reads the selector token from a shared location on demand.
#[derive(Clone)]
pub struct ContextResolver {
    location: Arc<dyn LocationSource>,
}

impl ContextResolver {
    pub fn new(location: Arc<dyn LocationSource>) -> Self {
        Self { location }
    }

    /// Current selector token. Re-reads the location on every call.
    pub fn resolve(&self) -> String {
        resolve_token(&self.location.hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PageLocation;

    #[test]
    fn test_resolve_token_variants() {
        let cases = vec![
            ("#backend_type=mock", "mock"),
            ("#backend_type=webview", "webview"),
            ("#backend_type=webui", "webui"),
            ("#backend_type=qt", "qt"),
            ("#backend_type=xyz", "xyz"),
            ("#backend_type=web_view2", "web_view2"),
            // stops at the first non-word character
            ("#backend_type=qt&debug=1", "qt"),
            ("#backend_type=qt-5", "qt"),
            // first occurrence wins
            ("#backend_type=webui&backend_type=qt", "webui"),
            // matched anywhere, not only at the start
            ("#/home?backend_type=webview", "webview"),
        ];

        for (hash, expected) in cases {
            assert_eq!(resolve_token(hash), expected, "hash: {}", hash);
        }
    }

    #[test]
    fn test_resolve_token_defaults_to_mock() {
        for hash in ["", "#", "#backend_type=", "#backend_type=-qt", "#type=qt", "#backend-type=qt"] {
            assert_eq!(resolve_token(hash), "mock", "hash: {}", hash);
        }
    }

    #[test]
    fn test_resolve_token_ignores_non_ascii_word_characters() {
        assert_eq!(resolve_token("#backend_type=é"), "mock");
        assert_eq!(resolve_token("#backend_type=qté"), "qt");
    }

    #[test]
    fn test_resolver_rereads_location() {
        let location = Arc::new(PageLocation::blank());
        let resolver = ContextResolver::new(location.clone());
        assert_eq!(resolver.resolve(), "mock");

        location.set_hash("#backend_type=webui");
        assert_eq!(resolver.resolve(), "webui");

        location.set_hash("#backend_type=qt");
        assert_eq!(resolver.resolve(), "qt");
    }
}
