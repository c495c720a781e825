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
    path = "/{menu_id}",
    tag = "menu",
    summary = "Delete menu",
    params(
        ("menu_id" = Uuid, Path, description = "Menu id"),
    ),
    responses(
        (status = 204, description = "Menu deleted"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Menu not found")
    ),
)]
pub async fn delete_menu(
    Path(menu_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_menu(identity, menu_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
