use super::handlers::{
    create_fitness_plan::{__path_create_fitness_plan, create_fitness_plan},
    get_fitness_plan::{__path_get_fitness_plan, get_fitness_plan},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_fitness_plan, get_fitness_plan))]
pub struct FitnessPlanApiDoc;

pub fn fitness_plan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/fitness-plan", state.args.server.root_path),
        post(create_fitness_plan).get(get_fitness_plan),
    )
}
