use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
    get_current_analysis::{__path_get_current_analysis, get_current_analysis},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

// Room for multipart boundaries and headers around the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_image, get_current_analysis))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    let body_limit = state.args.upload.max_image_size + MULTIPART_OVERHEAD;

    Router::new()
        .route(
            &format!("{}/food-analysis/image", state.args.server.root_path),
            post(analyze_food_image),
        )
        .route(
            &format!("{}/food-analysis", state.args.server.root_path),
            get(get_current_analysis),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
