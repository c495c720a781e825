use axum::extract::{Path, State};
use chefco_core::domain::menu::{ports::MenuService, value_objects::MenuDetails};
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
    path = "/{menu_id}",
    tag = "menu",
    summary = "Get menu",
    params(
        ("menu_id" = Uuid, Path, description = "Menu id"),
    ),
    responses(
        (status = 200, body = MenuDetails),
        (status = 404, description = "Menu not found")
    ),
)]
pub async fn get_menu(
    Path(menu_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MenuDetails>, ApiError> {
    let menu = state
        .service
        .get_menu(identity, menu_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(menu))
}
