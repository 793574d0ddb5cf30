use axum::extract::State;
use nutrivision_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipes",
    summary = "Generate recipe",
    description = "Creates a healthy recipe from a free text request. The previous recipe is discarded first.",
    request_body = GenerateRecipeValidator,
    responses(
        (status = 200, body = RecipeResponse),
        (status = 400, description = "Empty recipe request"),
        (status = 502, description = "The AI service failed or answered in an unexpected format")
    ),
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(GenerateRecipeInput {
            prompt: payload.prompt,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
