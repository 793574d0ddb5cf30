use axum::extract::State;
use nutrivision_core::domain::meal_log::ports::MealLogService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "",
    tag = "meals",
    summary = "Clear the meal log",
    responses(
        (status = 204, description = "Meal log cleared")
    ),
)]
pub async fn clear_meals(State(state): State<AppState>) -> Result<Response<()>, ApiError> {
    state.service.clear_meals().await.map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
