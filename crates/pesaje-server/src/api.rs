use axum::{
    Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};
use domain::{MeasurementRecord, RecentLimit, ReductionIndicators};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/insertar", post(insert_measurement))
        .route("/api/registros", get(get_records))
        .route("/api/indicadores", get(get_indicators))
        .route("/test-hora", get(clock_check))
        .nest_service("/src", ServeDir::new(state.static_dir()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.recent(RecentLimit::default()).await {
        Ok(rows) => {
            let records: Vec<MeasurementRecord> = rows.iter().map(|m| m.to_record()).collect();
            (StatusCode::OK, Html(views::render_index(&records)))
        }
        Err(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Html(views::render_error()))
        }
    }
}

async fn insert_measurement(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;

    let recorded = state.service.record(&payload).await?;

    Ok((StatusCode::CREATED, Json(recorded.receipt())))
}

#[derive(Deserialize)]
struct RecordsQuery {
    limite: Option<String>,
}

async fn get_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Vec<MeasurementRecord>>, ApiError> {
    let limit = RecentLimit::parse(query.limite.as_deref());
    let rows = state.service.recent(limit).await?;

    Ok(Json(rows.iter().map(|m| m.to_record()).collect()))
}

/// Zeroed indicators plus a flag, returned when the history cannot be read.
#[derive(Serialize)]
struct IndicatorsFailure {
    #[serde(flatten)]
    indicators: ReductionIndicators,
    error: bool,
}

async fn get_indicators(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.indicators().await {
        Ok(indicators) => (StatusCode::OK, Json(serde_json::json!(indicators))),
        Err(_) => {
            let body = IndicatorsFailure {
                indicators: ReductionIndicators::default(),
                error: true,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!(body)))
        }
    }
}

async fn clock_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.clock_check())
}
