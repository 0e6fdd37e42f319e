// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use crate::errors::BackendError;

/// The closed set of backends a selector token can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Mock,
    WebView,
    WebUi,
    Qt,
}

impl BackendKind {
    /// All kinds in selection order
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Mock,
        BackendKind::WebView,
        BackendKind::WebUi,
        BackendKind::Qt,
    ];

    /// The selector token for this kind.
    pub fn token(self) -> &'static str {
        match self {
            BackendKind::Mock => "mock",
            BackendKind::WebView => "webview",
            BackendKind::WebUi => "webui",
            BackendKind::Qt => "qt",
        }
    }

    /// Exact, case-sensitive token lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mock" => Some(BackendKind::Mock),
            "webview" => Some(BackendKind::WebView),
            "webui" => Some(BackendKind::WebUi),
            "qt" => Some(BackendKind::Qt),
            _ => None,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for BackendKind {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| BackendError::UnknownBackend {
            token: s.to_string(),
        })
    }
}
