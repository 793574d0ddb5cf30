use super::handlers::{
    clear_meals::{__path_clear_meals, clear_meals},
    get_meals::{__path_get_meals, get_meals},
    log_meal::{__path_log_meal, log_meal},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(log_meal, get_meals, clear_meals))]
pub struct MealLogApiDoc;

pub fn meal_log_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/meals", state.args.server.root_path),
        get(get_meals).post(log_meal).delete(clear_meals),
    )
}
