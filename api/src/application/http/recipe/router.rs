use super::handlers::{
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_current_recipe::{__path_get_current_recipe, get_current_recipe},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, get_current_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/recipes/current", state.args.server.root_path),
            get(get_current_recipe),
        )
}
