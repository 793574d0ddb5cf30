use axum::extract::State;
use nutrivision_core::domain::recipe::ports::RecipeService;

use crate::application::http::{
    recipe::handlers::generate_recipe::RecipeResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/current",
    tag = "recipes",
    summary = "Get current recipe",
    responses(
        (status = 200, body = RecipeResponse),
        (status = 404, description = "No recipe has been generated")
    ),
)]
pub async fn get_current_recipe(
    State(state): State<AppState>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_current_recipe()
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("No recipe has been generated".to_string()))?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
