use axum::extract::State;
use nutrivision_core::domain::food_analysis::ports::FoodAnalysisService;

use crate::application::http::{
    food_analysis::handlers::analyze_food_image::AnalyzeFoodResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "food-analysis",
    summary = "Get current analysis",
    description = "Returns the most recent successful food analysis.",
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 404, description = "No food has been analyzed yet")
    ),
)]
pub async fn get_current_analysis(
    State(state): State<AppState>,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let analysis = state
        .service
        .get_current_analysis()
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("No food has been analyzed yet".to_string()))?;

    Ok(Response::OK(AnalyzeFoodResponse { data: analysis }))
}
