// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end checks: location → factory → handle → greeting.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::backends::stub::{StubPyWebView, StubWebUi};
use crate::backends::bridges::{PYWEBVIEW_BRIDGE, WEBUI_BRIDGE};
use crate::backends::{BackendFactory, BackendKind, HostBindings};
use crate::config::{DelayRange, Settings};
use crate::context::PageLocation;
use crate::errors::{BackendError, ConfigError};

fn setup() -> (Arc<PageLocation>, Arc<HostBindings>, BackendFactory) {
    let location = Arc::new(PageLocation::blank());
    let host = Arc::new(HostBindings::empty());
    let factory = BackendFactory::new(location.clone(), host.clone());
    (location, host, factory)
}

#[test]
fn test_every_recognized_token_stamps_context() {
    let (location, _host, factory) = setup();

    for kind in BackendKind::ALL {
        location.set_hash(&format!("#backend_type={}", kind.token()));
        let handle = factory.create().unwrap();
        assert_eq!(handle.context(), kind.token());
        assert_eq!(handle.kind(), kind);
    }
}

#[test]
fn test_factory_follows_location_changes() {
    let (location, _host, factory) = setup();

    assert_eq!(factory.create().unwrap().kind(), BackendKind::Mock);

    location.navigate("http://localhost:5173/#backend_type=qt").unwrap();
    assert_eq!(factory.create().unwrap().kind(), BackendKind::Qt);

    location.set_hash("#backend_type=xyz");
    assert!(matches!(
        factory.create(),
        Err(BackendError::UnknownBackend { token }) if token == "xyz"
    ));

    location.set_hash("");
    assert_eq!(factory.create().unwrap().context(), "mock");
}

#[tokio::test(start_paused = true)]
async fn test_default_location_gives_mock_greeting() {
    let (_location, _host, factory) = setup();
    let handle = factory.create().unwrap();

    let start = Instant::now();
    let reply = handle.greet("Ada").await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(reply, "Hello Ada! (from Mock Backend)");
    assert!(elapsed >= Duration::from_millis(100) && elapsed <= Duration::from_millis(500));

    let start = Instant::now();
    let reply = handle.greet_async("Ada").await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(reply, "Hello Ada! (from Mock Backend - Async)");
    assert!(elapsed >= Duration::from_millis(500) && elapsed <= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_qt_handle_greetings() {
    let (location, _host, factory) = setup();
    location.set_hash("#backend_type=qt");
    let handle = factory.create().unwrap();

    let start = Instant::now();
    assert_eq!(handle.greet("Ada").await.unwrap(), "Hello Ada! (from Qt4 Backend)");
    assert!(start.elapsed() < Duration::from_millis(800));

    let start = Instant::now();
    assert_eq!(
        handle.greet_async("Ada").await.unwrap(),
        "Hello Ada! (from Qt4 Backend - Async)"
    );
    assert!(start.elapsed() >= Duration::from_millis(800));
}

#[tokio::test]
async fn test_bridge_handles_without_host_objects() {
    let (location, _host, factory) = setup();

    let expectations = [("webview", PYWEBVIEW_BRIDGE), ("webui", WEBUI_BRIDGE)];
    for (token, bridge) in expectations {
        location.set_hash(&format!("#backend_type={}", token));
        let handle = factory.create().unwrap();

        let unavailable = BackendError::BridgeUnavailable { bridge };
        assert_eq!(handle.greet("Ada").await, Err(unavailable.clone()));
        assert_eq!(handle.greet_async("Ada").await, Err(unavailable));
    }
}

#[tokio::test]
async fn test_bridge_installed_after_handle_creation() {
    let (location, host, factory) = setup();
    location.set_hash("#backend_type=webui");
    let handle = factory.create().unwrap();

    assert!(handle.greet("Ada").await.is_err());

    host.install_webui(Arc::new(StubWebUi::default()));
    assert_eq!(handle.greet("Ada").await.unwrap(), "say_hello(Ada)");

    location.set_hash("#backend_type=webview");
    host.install_pywebview(Arc::new(StubPyWebView::default()));
    let handle = factory.create().unwrap();
    assert_eq!(handle.greet_async("Ada").await.unwrap(), "say_hello_async:Ada");
}

#[tokio::test(start_paused = true)]
async fn test_independent_handles_run_concurrently() {
    let (location, _host, factory) = setup();
    let mock = factory.create().unwrap();
    location.set_hash("#backend_type=qt");
    let qt = factory.create().unwrap();

    let start = Instant::now();
    let (a, b) = tokio::join!(mock.greet_async("Ada"), qt.greet_async("Bob"));

    assert_eq!(a.unwrap(), "Hello Ada! (from Mock Backend - Async)");
    assert_eq!(b.unwrap(), "Hello Bob! (from Qt4 Backend - Async)");
    // overlapping waits: bounded by the slower one, not the sum
    assert!(start.elapsed() <= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_factory_settings_reach_backends() {
    let mut settings = Settings::default();
    settings.mock.greet_delay = DelayRange::new(5, 6).unwrap();
    settings.legacy.greet_async_delay_ms = 30;

    let location = Arc::new(PageLocation::blank());
    let factory = BackendFactory::new(location.clone(), Arc::new(HostBindings::empty()))
        .with_settings(settings)
        .unwrap();

    let start = Instant::now();
    factory.create().unwrap().greet("Ada").await.unwrap();
    assert!(start.elapsed() <= Duration::from_millis(6));

    location.set_hash("#backend_type=qt");
    let start = Instant::now();
    factory.create().unwrap().greet_async("Ada").await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(30) && elapsed <= Duration::from_millis(31));
}

#[tokio::test(start_paused = true)]
async fn test_mock_windows_cannot_be_emptied() {
    // empty and inverted windows never reach a factory
    assert!(matches!(
        DelayRange::new(0, 0),
        Err(ConfigError::InvalidDelayRange { min_ms: 0, max_ms: 0 })
    ));
    assert!(matches!(
        DelayRange::new(1500, 500),
        Err(ConfigError::InvalidDelayRange { min_ms: 1500, max_ms: 500 })
    ));

    let yaml = "mock:\n  greet_delay: { min_ms: 0, max_ms: 0 }\n";
    assert!(crate::config::parse_yaml(yaml).is_err());

    // the narrowest window still sleeps a non-zero, in-range amount
    let mut settings = Settings::default();
    settings.mock.greet_delay = DelayRange::new(1, 2).unwrap();
    settings.mock.greet_async_delay = DelayRange::new(500, 501).unwrap();
    let factory = BackendFactory::new(Arc::new(PageLocation::blank()), Arc::new(HostBindings::empty()))
        .with_settings(settings)
        .unwrap();
    let handle = factory.create().unwrap();

    let start = Instant::now();
    handle.greet("Ada").await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1) && elapsed <= Duration::from_millis(2));

    let start = Instant::now();
    handle.greet_async("Ada").await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(500) && elapsed <= Duration::from_millis(501));
}
