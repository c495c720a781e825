use axum::{Router, routing::get};

use super::handlers::{health, readness};
use crate::application::http::server::app_state::AppState;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/health/readness", root_path), get(readness))
}
