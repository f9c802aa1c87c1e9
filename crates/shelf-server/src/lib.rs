//! shelf-server: HTTP transport around the shelf search core.
//!
//! # Endpoints
//!
//! - `GET /data?query=<text>[&mode=all|any]` - prefix keyword search
//! - `GET /health` - liveness and index size
//! - `GET /` - home page
//! - `GET /static/*`, `GET /js/*` - browser assets
//!
//! The [`CatalogIndex`](shelf_core::CatalogIndex) is built before the server
//! exists and is shared read-only by every handler.

pub mod asset_routes;
pub mod observability_routes;
pub mod search_routes;
pub mod server;

pub use search_routes::{ErrorResponse, SearchParams, SearchState};
pub use server::HttpServer;
