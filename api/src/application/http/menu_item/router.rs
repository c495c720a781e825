use super::handlers::create_menu_item::{__path_create_menu_item, create_menu_item};
use super::handlers::delete_menu_item::{__path_delete_menu_item, delete_menu_item};
use super::handlers::get_menu_item::{__path_get_menu_item, get_menu_item};
use super::handlers::get_menu_items::{__path_get_menu_items, get_menu_items};
use super::handlers::update_menu_item::{__path_update_menu_item, update_menu_item};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_menu_items,
    get_menu_item,
    create_menu_item,
    update_menu_item,
    delete_menu_item
))]
pub struct MenuItemApiDoc;

pub fn menu_item_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/menu-items", root_path), get(get_menu_items))
        .route(&format!("{}/menu-items", root_path), post(create_menu_item))
        .route(
            &format!("{}/menu-items/{{item_id}}", root_path),
            get(get_menu_item),
        )
        .route(
            &format!("{}/menu-items/{{item_id}}", root_path),
            patch(update_menu_item),
        )
        .route(
            &format!("{}/menu-items/{{item_id}}", root_path),
            delete(delete_menu_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
