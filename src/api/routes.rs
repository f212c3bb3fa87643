use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::{help, ApiError, AppState};
use crate::models::{AssessmentRecord, AssessmentResult};

const DEFAULT_RECENT_LIMIT: u32 = 10;
const MAX_RECENT_LIMIT: u32 = 100;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/get-assessment-result/",
            get(assessment_help).post(submit_assessment),
        )
        .route("/assessments/recent", get(recent_assessments))
        .route("/assessments/{id}", get(assessment_by_id))
        .route("/health", get(health_check))
}

/// POST /get-assessment-result/ -- run an assessment and record it in the
/// audit log. Malformed payloads still produce a 200 with an Invalid
/// classification; only storage failures surface as errors.
async fn submit_assessment(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let result = state.engine.assess(&payload);

    let mut record = AssessmentRecord::new(
        result.classification,
        payload.to_string(),
        serde_json::to_string(&result).map_err(crate::error::AssessError::from)?,
    );

    if let Some(address) = payload.get("address").and_then(Value::as_str) {
        record = record.with_address(address);
        if let Some(geocoder) = &state.geocoder {
            match geocoder.geocode(address).await {
                Ok(candidate) => {
                    record = record.with_coordinates(candidate.longitude, candidate.latitude);
                    if let Some(resolved) = candidate.address {
                        record = record.with_address(resolved);
                    }
                }
                // Coordinates are additive; a failed lookup never blocks the verdict
                Err(e) => warn!(error = %e, "geocoding failed, recording without coordinates"),
            }
        }
    }

    let id = state.db.insert_assessment(&record)?;
    info!(
        id,
        classification = result.classification.as_str(),
        "assessment recorded"
    );

    Ok(Json(result))
}

/// GET /get-assessment-result/ -- attribute help pages for all categories.
async fn assessment_help() -> Html<&'static str> {
    Html(help::HELP_PAGE)
}

#[derive(Debug, Deserialize)]
struct RecentParams {
    limit: Option<u32>,
}

/// GET /assessments/recent?limit=N -- most recent audit-log records.
async fn recent_assessments(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .min(MAX_RECENT_LIMIT);
    let records = state.db.recent_assessments(limit)?;
    Ok(Json(records))
}

/// GET /assessments/{id} -- a single audit-log record.
async fn assessment_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    match state.db.get_assessment(id)? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::not_found(format!("No assessment with id {id}"))),
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health -- service and audit-database liveness.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = state
        .db
        .with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(crate::error::AssessError::from)
        })
        .is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };
    let code = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }),
    )
}
