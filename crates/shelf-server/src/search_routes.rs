//! Search HTTP Routes
//!
//! `GET /data` resolves a free-text query against the shared index.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shelf_core::{CatalogIndex, MatchMode, SearchResponse};

// ==================
// Shared State
// ==================

/// State shared by the search and health handlers.
pub struct SearchState {
    pub index: Arc<CatalogIndex>,
}

impl SearchState {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Optional here so that its absence is reported as a client error
    /// instead of reaching the resolver.
    pub query: Option<String>,
    #[serde(default)]
    pub mode: MatchMode,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
            code: StatusCode::BAD_REQUEST.as_u16(),
        }),
    )
}

// ==================
// Search Routes
// ==================

pub fn search_routes(state: Arc<SearchState>) -> Router {
    Router::new()
        .route("/data", get(search_handler))
        .with_state(state)
}

async fn search_handler(
    State(state): State<Arc<SearchState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|rejection| bad_request(rejection.body_text()))?;
    let Some(query) = params.query else {
        return Err(bad_request("missing `query` parameter"));
    };

    let started = Instant::now();
    let items = state.index.resolver().resolve(&query, params.mode);
    let count = items.len();
    // Serialize while `items` still borrows from the index.
    let response = Json(SearchResponse::new(items)).into_response();

    tracing::info!(
        query = %query,
        mode = %params.mode,
        count,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search"
    );

    Ok(response)
}
