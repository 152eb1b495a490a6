//! HTTP server for the faculty summary API.

pub mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::client::AuthorDirectoryClient;
use crate::ops::OpContext;

/// Faculty summary API server.
pub struct ApiServer {
    /// Operation execution context.
    ctx: OpContext,

    /// Directory holding the static front-end.
    frontend_dir: PathBuf,
}

impl ApiServer {
    /// Create a new API server.
    #[must_use]
    pub fn new(client: AuthorDirectoryClient, frontend_dir: PathBuf) -> Self {
        Self { ctx: OpContext::new(Arc::new(client)), frontend_dir }
    }

    /// Run the server until ctrl-c.
    ///
    /// # Errors
    ///
    /// Returns error on bind or serve failure.
    pub async fn run(self, port: u16) -> anyhow::Result<()> {
        let router = routes::create_router(self.ctx, &self.frontend_dir);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for ApiServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiServer").field("frontend_dir", &self.frontend_dir).finish()
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
