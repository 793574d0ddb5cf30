use axum::extract::State;
use nutrivision_core::domain::session::{ports::SessionService, value_objects::NavigateInput};
use tracing::debug;

use crate::application::http::{
    session::{handlers::get_session::SessionResponse, validators::NavigateValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/navigate",
    tag = "session",
    summary = "Navigate",
    description = "Switches the current view. Results local to the view being left are discarded.",
    request_body = NavigateValidator,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Unknown view")
    ),
)]
pub async fn navigate(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NavigateValidator>,
) -> Result<Response<SessionResponse>, ApiError> {
    debug!("Navigation requested to {}", payload.view.as_str());

    let overview = state
        .service
        .navigate(NavigateInput { view: payload.view })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: overview }))
}
