use super::handlers::{
    get_session::{__path_get_session, get_session},
    navigate::{__path_navigate, navigate},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_session, navigate))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session", state.args.server.root_path),
            get(get_session),
        )
        .route(
            &format!("{}/session/navigate", state.args.server.root_path),
            post(navigate),
        )
}
