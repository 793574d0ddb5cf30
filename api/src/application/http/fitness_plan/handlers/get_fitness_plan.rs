use axum::extract::State;
use nutrivision_core::domain::fitness_plan::ports::FitnessPlanService;

use crate::application::http::{
    fitness_plan::handlers::create_fitness_plan::FitnessPlanResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "fitness-plan",
    summary = "Get fitness plan",
    description = "Returns the plan shown in the fitness guide. It is dropped when the user leaves that view.",
    responses(
        (status = 200, body = FitnessPlanResponse),
        (status = 404, description = "No fitness plan has been generated")
    ),
)]
pub async fn get_fitness_plan(
    State(state): State<AppState>,
) -> Result<Response<FitnessPlanResponse>, ApiError> {
    let plan = state
        .service
        .get_current_plan()
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("No fitness plan has been generated".to_string()))?;

    Ok(Response::OK(FitnessPlanResponse { data: plan }))
}
