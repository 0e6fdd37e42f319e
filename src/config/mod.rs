// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
pub mod consts;

pub use loader::{
    load_and_validate_settings, load_settings, parse_toml, parse_yaml, DelayRange,
    FrontendSettings, LegacySettings, MockSettings, Settings,
};
