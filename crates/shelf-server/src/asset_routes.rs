//! Home page and browser asset routes.
//!
//! Files are read from disk on every request; nothing is cached or
//! templated, the home page is served verbatim. Any path no other route
//! claims also gets the home page.

use axum::Router;
use shelf_core::config::AssetsConfig;
use tower_http::services::{ServeDir, ServeFile};

pub fn asset_routes(assets: &AssetsConfig) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(assets.index_page()))
        .nest_service("/static", ServeDir::new(&assets.static_dir))
        .nest_service("/js", ServeDir::new(&assets.js_dir))
        .fallback_service(ServeFile::new(assets.index_page()))
}
