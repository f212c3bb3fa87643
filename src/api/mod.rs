pub mod help;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::ServerConfig;
use crate::datasources::GeocodeClient;
use crate::db::Database;
use crate::error::AssessError;
use crate::logic::AssessmentEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: AssessmentEngine,
    pub db: Database,
    pub geocoder: Option<Arc<GeocodeClient>>,
}

/// Build the application [`Router`] with the full middleware stack.
/// Layers apply bottom-up: concurrency cap, body limit, tracing, timeout.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(GlobalConcurrencyLimitLayer::new(config.max_concurrency))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error surfaced to HTTP clients as a JSON body with a matching status.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<AssessError> for ApiError {
    fn from(err: AssessError) -> Self {
        error!(error = %err, "request failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
