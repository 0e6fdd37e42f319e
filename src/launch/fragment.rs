// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use url::Url;

use crate::config::consts::DEFAULT_BACKEND_TYPE;
use crate::config::Settings;
use crate::context::BACKEND_TYPE_PARAM;
use crate::observability::messages::{launch::LaunchUrlComposed, StructuredLog};

/// Token the host hands to the page: the configured one, or `mock` if blank.
///
/// Environment overrides are folded into `settings` by
/// [`Settings::apply_env`](crate::config::Settings::apply_env).
pub fn launch_backend_type(settings: &Settings) -> &str {
    if settings.backend_type.is_empty() {
        DEFAULT_BACKEND_TYPE
    } else {
        &settings.backend_type
    }
}

/// Attach `#backend_type=<token>` to the frontend URL.
///
/// http(s) URLs have any existing fragment replaced. Other URLs (the `data:`
/// placeholder page) get the fragment appended as text.
///
/// # Example
/// ```
/// use backend_switchboard::launch::compose_launch_url;
///
/// assert_eq!(
///     compose_launch_url("http://localhost:5173", "qt"),
///     "http://localhost:5173/#backend_type=qt"
/// );
/// ```
pub fn compose_launch_url(frontend_url: &str, token: &str) -> String {
    let fragment = format!("{}={}", BACKEND_TYPE_PARAM, token);

    let composed = match Url::parse(frontend_url) {
        Ok(mut url) if matches!(url.scheme(), "http" | "https") => {
            url.set_fragment(Some(&fragment));
            url.to_string()
        }
        _ => format!("{}#{}", frontend_url, fragment),
    };

    LaunchUrlComposed {
        url: &composed,
        backend_type: token,
    }
    .log();
    composed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{resolve_token, PageLocation};
    use crate::launch::PLACEHOLDER_PAGE;
    use crate::traits::LocationSource;

    #[test]
    fn test_compose_replaces_existing_fragment() {
        assert_eq!(
            compose_launch_url("http://localhost:8000/index.html#/about", "webui"),
            "http://localhost:8000/index.html#backend_type=webui"
        );
    }

    #[test]
    fn test_compose_appends_to_placeholder_page() {
        let url = compose_launch_url(PLACEHOLDER_PAGE, "mock");
        assert!(url.starts_with("data:text/html,"));
        assert!(url.ends_with("#backend_type=mock"));
    }

    #[test]
    fn test_composed_url_resolves_back_to_token() {
        let location = PageLocation::blank();
        for token in ["mock", "webview", "webui", "qt"] {
            location
                .navigate(&compose_launch_url("http://localhost:5173", token))
                .unwrap();
            assert_eq!(resolve_token(&location.hash()), token);
        }
    }

    #[test]
    fn test_launch_backend_type_falls_back_to_mock() {
        let mut settings = Settings::default();
        assert_eq!(launch_backend_type(&settings), "mock");

        settings.backend_type = "webview".to_string();
        assert_eq!(launch_backend_type(&settings), "webview");

        settings.backend_type.clear();
        assert_eq!(launch_backend_type(&settings), "mock");
    }
}
