use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ConfigResponse {
    pub app_version: String,
    pub gemini_model: String,
    pub max_image_size: usize,
    pub accepted_image_types: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get public configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        gemini_model: state.args.llm.gemini_model.clone(),
        max_image_size: state.args.upload.max_image_size,
        accepted_image_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
    })
}
