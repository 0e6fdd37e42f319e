// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Selector token used when none is configured or found in the fragment
pub const DEFAULT_BACKEND_TYPE: &str = "mock";

/// Mock `greet` latency window in milliseconds, [min, max)
pub const MOCK_GREET_MIN_MS: u64 = 100;
pub const MOCK_GREET_MAX_MS: u64 = 500;

/// Mock `greet_async` latency window in milliseconds, [min, max)
pub const MOCK_GREET_ASYNC_MIN_MS: u64 = 500;
pub const MOCK_GREET_ASYNC_MAX_MS: u64 = 1500;

/// Fixed latency of the legacy Qt4 `greet_async`
pub const LEGACY_GREET_ASYNC_DELAY_MS: u64 = 800;

/// Port the frontend dev server listens on
pub const DEFAULT_DEV_SERVER_PORT: u16 = 5173;
/// Port the host serves built frontend assets on
pub const DEFAULT_SERVE_PORT: u16 = 8000;
/// How long to wait for the dev server to accept a connection
pub const DEV_SERVER_PROBE_TIMEOUT_MS: u64 = 250;

pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
pub const DEFAULT_DUMMY_DIR: &str = "frontend-dummy";

/// Environment variable naming the selector token handed to the page
pub const ENV_BACKEND_TYPE: &str = "PDV_FE_DATA_BACKEND_TYPE";
/// Environment variable that switches the host to the dummy frontend when "true"
pub const ENV_CONCEPT_DEBUG: &str = "PDV_FE_BE_CONCEPT_DEBUG";
