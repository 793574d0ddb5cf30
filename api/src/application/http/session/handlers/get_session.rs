use axum::extract::State;
use nutrivision_core::domain::session::{entities::SessionOverview, ports::SessionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub data: SessionOverview,
}

#[utoipa::path(
    get,
    path = "",
    tag = "session",
    summary = "Get session",
    description = "Returns the current view, whether the fitness guide is enabled and the current analysis.",
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let overview = state.service.get_session().await.map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: overview }))
}
