//! HTTP routes.
//!
//! | Method | Path       | Handler                              |
//! |--------|------------|--------------------------------------|
//! | GET    | `/`        | single-page front end                |
//! | POST   | `/analyze` | inspect `{"url": ...}`, return report |
//! | GET    | `/health`  | liveness and version                 |

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use inspector_core::{Inspector, Report};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::trace_requests;

/// Front-end page served at `/`.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "deep-inspector";

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Inspection engine.
    pub inspector: Inspector,
}

/// Body of `POST /analyze`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// URL or bare host to inspect.
    pub url: String,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the handler answers.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(trace_requests))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Report>, ApiError> {
    let report = state.inspector.inspect(&request.url).await?;
    Ok(Json(report))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
