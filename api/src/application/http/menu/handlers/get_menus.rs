use axum::extract::State;
use chefco_core::domain::menu::{ports::MenuService, value_objects::MenuDetails};
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
pub struct GetMenusResponse {
    pub data: Vec<MenuDetails>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu",
    summary = "Get menus",
    description = "Retrieves all menus with their nested courses, items and quantity references.",
    responses(
        (status = 200, body = GetMenusResponse)
    ),
)]
pub async fn get_menus(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMenusResponse>, ApiError> {
    let menus = state
        .service
        .get_menus(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMenusResponse { data: menus }))
}
