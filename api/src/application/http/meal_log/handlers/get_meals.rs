use axum::extract::State;
use nutrivision_core::domain::meal_log::{entities::MealLogSummary, ports::MealLogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMealsResponse {
    pub data: MealLogSummary,
}

#[utoipa::path(
    get,
    path = "",
    tag = "meals",
    summary = "List logged meals",
    description = "Returns meals in the order they were logged along with the calorie total.",
    responses(
        (status = 200, body = GetMealsResponse)
    ),
)]
pub async fn get_meals(
    State(state): State<AppState>,
) -> Result<Response<GetMealsResponse>, ApiError> {
    let summary = state.service.get_meals().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetMealsResponse { data: summary }))
}
