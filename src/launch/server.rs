// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::Instrument;

use crate::errors::LaunchError;
use crate::observability::messages::launch::{StaticServerFailed, StaticServerStarted};
use crate::observability::messages::StructuredLog;

/// A running static file server. Dropping the handle leaves it running;
/// call [`shutdown`](Self::shutdown) to stop it.
pub struct StaticServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    server_handle: tokio::task::JoinHandle<()>,
}

impl StaticServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// URL the window should open
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.addr.port())
    }

    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.server_handle.await;
    }
}

/// Serve the files under `root` on `127.0.0.1:<port>` from a background task.
///
/// Port 0 picks a free port; the handle reports the one actually bound.
/// `/` and directory paths resolve to their `index.html`.
pub async fn start_static_server(port: u16, root: PathBuf) -> Result<StaticServerHandle, LaunchError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| LaunchError::Bind { addr, source })?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| LaunchError::Bind { addr, source })?;

    let router = Router::new()
        .fallback(serve_file)
        .with_state(Arc::new(root.clone()));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let graceful =
        axum::serve(listener, router.into_make_service()).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });

    let dir = root.display().to_string();
    let url = format!("http://localhost:{}", local_addr.port());
    let started = StaticServerStarted { dir: &dir, url: &url };
    let span = started.span("static_server");
    started.log();

    let server_handle = tokio::spawn(
        async move {
            if let Err(error) = graceful.await {
                StaticServerFailed { error: &error }.log();
            }
        }
        .instrument(span),
    );

    Ok(StaticServerHandle {
        addr: local_addr,
        shutdown_tx,
        server_handle,
    })
}

async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let Some(mut path) = resolve_path(&root, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let is_dir = tokio::fs::metadata(&path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if is_dir {
        path.push("index.html");
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Map a request path onto `root`. Paths that try to climb out are refused.
fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for segment in request_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains('\\') => return None,
            s => path.push(s),
        }
    }
    Some(path)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
