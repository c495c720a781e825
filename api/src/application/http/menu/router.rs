use super::handlers::create_menu::{__path_create_menu, create_menu};
use super::handlers::delete_menu::{__path_delete_menu, delete_menu};
use super::handlers::get_menu::{__path_get_menu, get_menu};
use super::handlers::get_menus::{__path_get_menus, get_menus};
use super::handlers::update_menu::{__path_update_menu, update_menu};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_menus, get_menu, create_menu, update_menu, delete_menu))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/menus", root_path), get(get_menus))
        .route(&format!("{}/menus", root_path), post(create_menu))
        .route(&format!("{}/menus/{{menu_id}}", root_path), get(get_menu))
        .route(
            &format!("{}/menus/{{menu_id}}", root_path),
            patch(update_menu),
        )
        .route(
            &format!("{}/menus/{{menu_id}}", root_path),
            delete(delete_menu),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
