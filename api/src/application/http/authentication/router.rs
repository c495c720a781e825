use super::handlers::token::{__path_token, token};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(token))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api-token-auth", state.args.server.root_path),
        post(token),
    )
}
