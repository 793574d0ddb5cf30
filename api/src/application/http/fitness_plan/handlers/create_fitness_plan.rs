use axum::extract::State;
use nutrivision_core::domain::fitness_plan::{entities::FitnessPlan, ports::FitnessPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FitnessPlanResponse {
    pub data: FitnessPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "fitness-plan",
    summary = "Create fitness plan",
    description = "Generates workouts and diet tips for the meal in the current food analysis.",
    responses(
        (status = 200, body = FitnessPlanResponse),
        (status = 409, description = "No food has been analyzed yet"),
        (status = 502, description = "The AI service failed or answered in an unexpected format")
    ),
)]
pub async fn create_fitness_plan(
    State(state): State<AppState>,
) -> Result<Response<FitnessPlanResponse>, ApiError> {
    let plan = state
        .service
        .plan_for_current_analysis()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FitnessPlanResponse { data: plan }))
}
