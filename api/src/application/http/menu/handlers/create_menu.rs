use axum::{Json, extract::State};
use chefco_core::domain::menu::{
    entities::Menu,
    ports::MenuService,
    value_objects::CreateMenuInput,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu::validators::CreateMenuValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "menu",
    summary = "Create menu",
    description = "Creates a menu owned by the calling staff user.",
    request_body = CreateMenuValidator,
    responses(
        (status = 201, body = Menu),
        (status = 403, description = "Staff access required")
    ),
)]
pub async fn create_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateMenuValidator>,
) -> Result<Response<Menu>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let menu = state
        .service
        .create_menu(
            identity,
            CreateMenuInput {
                name: payload.name,
                description: payload.description,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(menu))
}
