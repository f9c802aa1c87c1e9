//! shelf: prefix keyword search over a static product catalog.
//!
//! The catalog is read and indexed once at start-up; every query afterwards
//! is answered from the immutable in-memory index.
//!
//! # Architecture
//!
//! ```text
//! products.json ──► load_catalog ──► CatalogIndex::build ──┬──► HttpServer (/data)
//!                                                          └──► one-shot query (CLI)
//! ```
//!
//! Loading is fail-fast: an unreadable, malformed or empty catalog stops the
//! process before the listener is bound.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use shelf_core::config::Config;
use shelf_core::{CatalogIndex, MatchMode, SearchResponse};
use shelf_server::HttpServer;

pub use shelf_core;
pub use shelf_server;

/// `EnvFilter` directives used when `RUST_LOG` is unset.
pub fn default_log_filter(debug: bool) -> &'static str {
    if debug {
        "info,tower_http=debug"
    } else {
        "info"
    }
}

/// Command-line settings, applied over every config layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog: Option<PathBuf>,
    pub port: Option<u16>,
}

impl Overrides {
    pub fn apply(self, config: &mut Config) {
        if let Some(catalog) = self.catalog {
            config.catalog.path = catalog;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Read the configured catalog and build the index.
pub fn build_index(config: &Config) -> anyhow::Result<CatalogIndex> {
    let path = &config.catalog.path;
    tracing::info!(catalog = %path.display(), "loading catalog");
    let items = shelf_core::load_catalog(path)
        .with_context(|| format!("cannot load catalog {}", path.display()))?;
    CatalogIndex::build(items).with_context(|| format!("cannot index catalog {}", path.display()))
}

/// Build the index and serve it until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let index = Arc::new(build_index(&config)?);
    HttpServer::new(&config, index).start().await
}

/// Resolve a single query and render the response as pretty JSON.
pub fn query_to_json(index: &CatalogIndex, query: &str, mode: MatchMode) -> anyhow::Result<String> {
    let items = index.resolver().resolve(query, mode);
    Ok(serde_json::to_string_pretty(&SearchResponse::new(items))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_filter_only_raises_request_spans() {
        assert_eq!(default_log_filter(false), "info");
        assert_eq!(default_log_filter(true), "info,tower_http=debug");
        assert!(tracing_subscriber::EnvFilter::try_new(default_log_filter(true)).is_ok());
    }
}
