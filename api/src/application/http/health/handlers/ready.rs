use axum::extract::State;
use nutrivision_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadyResponse {
    pub data: ReadinessStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Ready once a Gemini API key is configured.",
    responses(
        (status = 200, body = ReadyResponse),
        (status = 503, description = "Gemini API key missing")
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadyResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if !status.is_ready() {
        warn!("Readiness check failed: Gemini API key is not configured");
        return Err(ApiError::ServiceUnavailable(
            "Gemini API key is not configured".to_string(),
        ));
    }

    Ok(Response::OK(ReadyResponse { data: status }))
}
