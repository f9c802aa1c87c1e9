//! # HTTP Server
//!
//! Combines the search, health and asset routers and runs them on tokio.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use shelf_core::config::{AssetsConfig, Config, ServerConfig};
use shelf_core::CatalogIndex;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::asset_routes::asset_routes;
use super::observability_routes::health_routes;
use super::search_routes::{search_routes, SearchState};

/// HTTP server for the search service
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: &Config, index: Arc<CatalogIndex>) -> Self {
        let router = Self::build_router(&config.assets, index);
        Self {
            config: config.server.clone(),
            router,
        }
    }

    fn build_router(assets: &AssetsConfig, index: Arc<CatalogIndex>) -> Router {
        let state = Arc::new(SearchState::new(index));

        Router::new()
            .merge(search_routes(state.clone()))
            .merge(health_routes(state))
            .merge(asset_routes(assets))
            .layer(TraceLayer::new_for_http())
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C or SIGTERM.
    pub async fn start(self) -> anyhow::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Bind the configured address. Hostnames are resolved by the listener.
    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!(addr = %listener.local_addr()?, "listening");
        Ok(listener)
    }

    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
