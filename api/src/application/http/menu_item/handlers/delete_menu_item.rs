use axum::extract::{Path, State};
use chefco_core::domain::menu::ports::MenuService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "menu-item",
    summary = "Delete menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Menu item not found")
    ),
)]
pub async fn delete_menu_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_menu_item(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
