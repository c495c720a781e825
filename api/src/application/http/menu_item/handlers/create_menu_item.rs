use axum::{Json, extract::State};
use chefco_core::domain::menu::{
    entities::MenuItem,
    ports::MenuService,
    value_objects::CreateMenuItemInput,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu_item::validators::CreateMenuItemValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "menu-item",
    summary = "Create menu item",
    request_body = CreateMenuItemValidator,
    responses(
        (status = 201, body = MenuItem),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateMenuItemValidator>,
) -> Result<Response<MenuItem>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let item = state
        .service
        .create_menu_item(
            identity,
            CreateMenuItemInput {
                course_id: payload.course_id,
                name: payload.name,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(item))
}
