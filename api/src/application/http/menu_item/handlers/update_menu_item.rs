use axum::{
    Json,
    extract::{Path, State},
};
use chefco_core::domain::menu::{
    entities::MenuItem,
    ports::MenuService,
    value_objects::UpdateMenuItemInput,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu_item::validators::UpdateMenuItemValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{item_id}",
    tag = "menu-item",
    summary = "Update menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    request_body = UpdateMenuItemValidator,
    responses(
        (status = 200, body = MenuItem),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Menu item not found")
    ),
)]
pub async fn update_menu_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateMenuItemValidator>,
) -> Result<Response<MenuItem>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let item = state
        .service
        .update_menu_item(
            identity,
            UpdateMenuItemInput {
                item_id,
                name: payload.name,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item))
}
