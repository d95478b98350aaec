use crate::error::AppError;
use crate::service::infra::AppState;
use crate::workflows::career::{OutcomePrediction, SurveyForm, SurveyRecord};
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Envelope sent by the survey client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "surveyData")]
    pub survey_data: SurveyRecord,
}

/// Builds the service routes. Request bodies over `body_limit_bytes` are rejected with 400.
pub fn router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/career-prediction", post(prediction_endpoint))
        .route(
            "/api/v1/career-prediction/form",
            post(form_prediction_endpoint),
        )
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.is_ready();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn prediction_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<OutcomePrediction>, AppError> {
    let Json(PredictionRequest { survey_data }) = payload?;
    Ok(Json(score(&state, &survey_data)))
}

pub(crate) async fn form_prediction_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<SurveyForm>, JsonRejection>,
) -> Result<Json<OutcomePrediction>, AppError> {
    let Json(form) = payload?;
    let record = form.normalize();
    Ok(Json(score(&state, &record)))
}

fn score(state: &AppState, record: &SurveyRecord) -> OutcomePrediction {
    let prediction = state.engine.predict(record);
    debug!(
        success_probability = prediction.success_probability,
        timeline_months = prediction.timeline_months,
        profile = prediction.profile_type.label(),
        recommendations = prediction.recommendations.len(),
        "scored career survey"
    );
    prediction
}
