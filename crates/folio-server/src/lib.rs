//! HTTP server for the Folio note viewer.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - API endpoints for the note list and rendered notes
//! - Raw note files (images and other assets) under `/note/`
//! - Static files for the frontend
//!
//! # Static Asset Modes
//!
//! This server supports two modes for serving static assets:
//!
//! - **Development** (default): Serves files from the `frontend/` directory
//! - **Production** (`embed-assets` feature): Embeds assets in the binary
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 4600,
//!         source_dir: PathBuf::from("note"),
//!         manifest: "index.json".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (folio-server)
//!                        │
//!                        ├─► /api/notes        ──► Notebook (list)
//!                        ├─► /api/notes/{name} ──► Notebook (render)
//!                        ├─► /note/{*path}     ──► Storage (raw bytes)
//!                        └─► Static files (embedded or filesystem)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod note_files;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use folio_notebook::Notebook;
use folio_storage::FsStorage;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the manifest, note files and their `assets/`.
    pub source_dir: PathBuf,
    /// Manifest file name inside `source_dir`.
    pub manifest: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4600,
            source_dir: PathBuf::from("note"),
            manifest: "index.json".to_string(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create shared storage backend
    let storage: Arc<dyn folio_storage::Storage> = Arc::new(
        FsStorage::new(config.source_dir.clone()).with_manifest_file(&config.manifest),
    );

    // Notebook reads through the same backend the raw file routes use
    let notebook = Notebook::new(Arc::clone(&storage));

    // Create app state
    let state = Arc::new(AppState { notebook, storage });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, notes = %config.source_dir.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Folio config.
#[must_use]
pub fn server_config_from_config(config: &folio_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.notes_resolved.source_dir.clone(),
        manifest: config.notes_resolved.manifest.clone(),
    }
}
