use axum::{
    Json,
    extract::{Path, State},
};
use chefco_core::domain::menu::{
    entities::Menu,
    ports::MenuService,
    value_objects::UpdateMenuInput,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu::validators::UpdateMenuValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{menu_id}",
    tag = "menu",
    summary = "Update menu",
    params(
        ("menu_id" = Uuid, Path, description = "Menu id"),
    ),
    request_body = UpdateMenuValidator,
    responses(
        (status = 200, body = Menu),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Menu not found")
    ),
)]
pub async fn update_menu(
    Path(menu_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateMenuValidator>,
) -> Result<Response<Menu>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let menu = state
        .service
        .update_menu(
            identity,
            UpdateMenuInput {
                menu_id,
                name: payload.name,
                description: payload.description,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(menu))
}
