//! Observability HTTP Routes
//!
//! Health check reporting the size of the loaded index.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::search_routes::SearchState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub items: usize,
    pub keywords: usize,
}

pub fn health_routes(state: Arc<SearchState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<SearchState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        items: state.index.len(),
        keywords: state.index.vocabulary().len(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use shelf_core::{CatalogIndex, Item};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_index_size() {
        let index = CatalogIndex::build(vec![Item::new(1, "Red Shoes"), Item::new(2, "Red Hat")])
            .unwrap();
        let router = health_routes(Arc::new(SearchState::new(Arc::new(index))));

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["items"], 2);
        assert_eq!(body["keywords"], 3);
    }
}
