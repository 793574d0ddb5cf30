use axum::extract::State;
use nutrivision_core::domain::meal_log::{
    entities::MealLog, ports::MealLogService, value_objects::LogMealInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_log::validators::LogMealValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LogMealResponse {
    pub data: MealLog,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meals",
    summary = "Log a meal",
    request_body = LogMealValidator,
    responses(
        (status = 201, body = LogMealResponse),
        (status = 400, description = "Missing name or non positive calories")
    ),
)]
pub async fn log_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LogMealValidator>,
) -> Result<Response<LogMealResponse>, ApiError> {
    let meal = state
        .service
        .log_meal(LogMealInput {
            name: payload.name,
            calories: payload.calories,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(LogMealResponse { data: meal }))
}
