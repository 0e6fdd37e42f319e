// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::config::consts::DEV_SERVER_PROBE_TIMEOUT_MS;
use crate::config::FrontendSettings;
use crate::errors::LaunchError;
use crate::launch::server::{start_static_server, StaticServerHandle};
use crate::observability::messages::launch::{FrontendSelected, NoFrontendFound};
use crate::observability::messages::StructuredLog;

/// Page shown when no frontend can be found
pub const PLACEHOLDER_PAGE: &str = "data:text/html,<h1>Vue Desktop App</h1>\
<p>No Vue frontend found</p><p>Run: npm run dev</p>";

/// Where the window's page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendSource {
    /// A running dev server
    DevServer { url: String },
    /// Files on disk, reachable at `url` once [`FrontendLocator::launch`]
    /// has started the server for them
    Static { dir: PathBuf, url: String },
    /// Inline page telling the user how to start the frontend
    Placeholder { url: String },
}

impl FrontendSource {
    pub fn url(&self) -> &str {
        match self {
            FrontendSource::DevServer { url }
            | FrontendSource::Static { url, .. }
            | FrontendSource::Placeholder { url } => url,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FrontendSource::DevServer { .. } => "dev server",
            FrontendSource::Static { .. } => "static",
            FrontendSource::Placeholder { .. } => "placeholder",
        }
    }
}

/// A picked frontend, plus the server keeping a static one reachable.
pub struct LaunchedFrontend {
    source: FrontendSource,
    server: Option<StaticServerHandle>,
}

impl LaunchedFrontend {
    pub fn source(&self) -> &FrontendSource {
        &self.source
    }

    pub fn url(&self) -> &str {
        self.source.url()
    }

    pub fn server(&self) -> Option<&StaticServerHandle> {
        self.server.as_ref()
    }

    /// Stop the static server, if one was started.
    pub async fn shutdown(self) {
        if let Some(server) = self.server {
            server.shutdown().await;
        }
    }
}

/// Picks the frontend to load, in order:
/// concept-debug dummy, dev server, built assets, placeholder page.
pub struct FrontendLocator {
    settings: FrontendSettings,
    probe_timeout: Duration,
}

impl FrontendLocator {
    pub fn new(settings: FrontendSettings) -> Self {
        Self {
            settings,
            probe_timeout: Duration::from_millis(DEV_SERVER_PROBE_TIMEOUT_MS),
        }
    }

    pub fn with_probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    pub async fn locate(&self) -> FrontendSource {
        let source = self.pick().await;
        if let FrontendSource::Placeholder { .. } = source {
            NoFrontendFound {
                dev_server_port: self.settings.dev_server_port,
                dist_dir: &self.settings.dist_dir.display().to_string(),
            }
            .log();
        } else {
            FrontendSelected {
                source: source.label(),
                url: source.url(),
            }
            .log();
        }
        source
    }

    /// Pick the frontend and, for files on disk, start serving them.
    ///
    /// The returned URL of a static frontend is the one the server actually
    /// listens on.
    pub async fn launch(&self) -> Result<LaunchedFrontend, LaunchError> {
        match self.locate().await {
            FrontendSource::Static { dir, .. } => {
                let server = start_static_server(self.settings.serve_port, dir.clone()).await?;
                Ok(LaunchedFrontend {
                    source: FrontendSource::Static {
                        dir,
                        url: server.url(),
                    },
                    server: Some(server),
                })
            }
            source => Ok(LaunchedFrontend {
                source,
                server: None,
            }),
        }
    }

    async fn pick(&self) -> FrontendSource {
        if self.settings.concept_debug {
            return self.serve(self.settings.dummy_dir.clone());
        }

        if self.dev_server_running().await {
            return FrontendSource::DevServer {
                url: format!("http://localhost:{}", self.settings.dev_server_port),
            };
        }

        if self.settings.dist_dir.exists() {
            return self.serve(self.settings.dist_dir.clone());
        }

        FrontendSource::Placeholder {
            url: PLACEHOLDER_PAGE.to_string(),
        }
    }

    fn serve(&self, dir: PathBuf) -> FrontendSource {
        FrontendSource::Static {
            dir,
            url: format!("http://localhost:{}", self.settings.serve_port),
        }
    }

    async fn dev_server_running(&self) -> bool {
        let connect = TcpStream::connect(("localhost", self.settings.dev_server_port));
        matches!(tokio::time::timeout(self.probe_timeout, connect).await, Ok(Ok(_)))
    }
}
