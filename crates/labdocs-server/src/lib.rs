//! HTTP server for the data science lab documentation site.
//!
//! Serves a JSON API over axum for a frontend that renders the sidebar and
//! document pages:
//!
//! - `GET /api/navigation` - static sidebar tree
//! - `GET /api/navigation/active?path=/docs/...` - item highlighted for a route
//! - `GET /api/pages/{*slug}` - rendered page with header data (`ETag` aware)
//! - `GET /api/slugs` - every slug and route, for pre-rendering
//!
//! # Quick Start
//!
//! ```ignore
//! use labdocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         source_dir: "public/data-science-lab".into(),
//!         ..Default::default()
//!     };
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use labdocs_renderer::MarkdownRenderer;
use labdocs_site::Site;
use labdocs_storage_fs::FsDocumentStore;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content root.
    pub source_dir: PathBuf,
    /// One-level subdirectories enumerated after the root.
    pub subdirectories: Vec<String>,
    /// Escape raw HTML in document sources.
    pub escape_html: bool,
    /// Application version (mixed into `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            source_dir: PathBuf::from(labdocs_config::DEFAULT_SOURCE_DIR),
            subdirectories: labdocs_storage_fs::DEFAULT_SUBDIRECTORIES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            escape_html: false,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let store = Arc::new(FsDocumentStore::with_subdirectories(
        config.source_dir.clone(),
        &config.subdirectories,
    ));
    let renderer = if config.escape_html {
        MarkdownRenderer::new().with_escaping()
    } else {
        MarkdownRenderer::new()
    };

    let state = Arc::new(AppState {
        site: Site::new(store, renderer),
        version: config.version,
    });
    let app = app::create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(
        address = %addr,
        source_dir = %config.source_dir.display(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, stopping server..."),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl-C"),
    }
}

/// Create server configuration from the loaded labdocs config.
#[must_use]
pub fn server_config_from_config(config: &labdocs_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        subdirectories: config.docs_resolved.subdirectories.clone(),
        escape_html: config.render.escape_html,
        version,
    }
}
