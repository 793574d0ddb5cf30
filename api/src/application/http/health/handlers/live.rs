use axum::extract::State;
use nutrivision_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LiveResponse {
    pub status: String,
    pub uptime_seconds: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = LiveResponse)
    ),
)]
pub async fn live(State(state): State<AppState>) -> Result<Response<LiveResponse>, ApiError> {
    let uptime_seconds = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(LiveResponse {
        status: "ok".to_string(),
        uptime_seconds,
    }))
}
