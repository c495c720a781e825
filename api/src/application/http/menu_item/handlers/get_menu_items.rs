use axum::extract::State;
use chefco_core::domain::menu::{ports::MenuService, value_objects::MenuItemWithReferences};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuItemsResponse {
    pub data: Vec<MenuItemWithReferences>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu-item",
    summary = "Get menu items",
    responses(
        (status = 200, body = GetMenuItemsResponse)
    ),
)]
pub async fn get_menu_items(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMenuItemsResponse>, ApiError> {
    let items = state
        .service
        .get_menu_items(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMenuItemsResponse { data: items }))
}
