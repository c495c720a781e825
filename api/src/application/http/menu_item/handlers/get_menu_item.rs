use axum::extract::{Path, State};
use chefco_core::domain::menu::{ports::MenuService, value_objects::MenuItemWithReferences};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "menu-item",
    summary = "Get menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, body = MenuItemWithReferences),
        (status = 404, description = "Menu item not found")
    ),
)]
pub async fn get_menu_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MenuItemWithReferences>, ApiError> {
    let item = state
        .service
        .get_menu_item(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item))
}
