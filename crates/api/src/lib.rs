use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use river_core::SkillRequest;
use river_observability::AppMetrics;
use river_skill::{HttpLevelSource, RiverSkill, SkillConfig};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

const MAX_REQUEST_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct ApiState {
    pub skill: Arc<RiverSkill<HttpLevelSource>>,
    pub metrics: Arc<AppMetrics>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    locale: &'static str,
    rivers: usize,
    metrics: river_observability::MetricsSnapshot,
}

pub fn build_app() -> Result<Router> {
    build_app_with_config(SkillConfig::from_env())
}

pub fn build_app_with_config(config: SkillConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let skill = Arc::new(RiverSkill::from_config(&config, metrics.clone())?);

    tracing::info!(api_base = %config.api_base, timeout = ?config.timeout, "river skill configured");

    Ok(build_router(ApiState { skill, metrics }))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/skill", post(invoke))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let catalog = state.skill.catalog();
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        locale: catalog.locale.as_code(),
        rivers: catalog.rivers.len(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn invoke(State(state): State<ApiState>, body: String) -> Response {
    let request = match SkillRequest::from_json(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "rejected skill request");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "invalid_request",
                    "message": err.to_string()
                })),
            )
                .into_response();
        }
    };

    let response = state.skill.handle(&request).await;
    (StatusCode::OK, Json(response)).into_response()
}
