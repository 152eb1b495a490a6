//! Route handlers and error mapping.
//!
//! Every handler boundary is total: operation errors are converted to a
//! JSON `{"error": ...}` body and never escape to the transport layer.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::error::OpError;
use crate::ops::{self, OpContext};

/// Query parameters for the faculty list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListFacultiesQuery {
    /// Search keyword; missing is treated as blank.
    #[serde(default)]
    search: String,
}

/// Request body for the summary endpoint.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Faculty name; missing is treated as blank.
    #[serde(default)]
    faculty_name: String,
}

/// Create the HTTP router.
pub fn create_router(ctx: OpContext, frontend_dir: &Path) -> Router {
    let state = Arc::new(ctx);

    Router::new()
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .route("/list_faculties", get(list_faculties))
        .route("/generate_summary", post(generate_summary))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "faculty-summary",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /list_faculties?search=<keyword>`
async fn list_faculties(
    State(ctx): State<Arc<OpContext>>,
    Query(query): Query<ListFacultiesQuery>,
) -> Response {
    match ops::list_faculty_names(&ctx, &query.search).await {
        Ok(names) => (StatusCode::OK, Json(json!({ "faculty_names": names }))).into_response(),
        Err(err) => error_response(&err),
    }
}

/// `POST /generate_summary` with body `{"faculty_name": "<name>"}`
async fn generate_summary(
    State(ctx): State<Arc<OpContext>>,
    Json(req): Json<SummaryRequest>,
) -> Response {
    match ops::generate_summary(&ctx, &req.faculty_name).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Map an operation error to the JSON error surface.
///
/// `NotFound` keeps the legacy 200-with-error-body contract; validation
/// and upstream faults use 400/500.
fn error_response(err: &OpError) -> Response {
    let status = match err {
        OpError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        OpError::NotFound { .. } => StatusCode::OK,
        OpError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "Request failed");
    }

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
