use axum::{Json, extract::State};
use chefco_core::domain::menu::{
    entities::Course,
    ports::MenuService,
    value_objects::CreateCourseInput,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        course::validators::CreateCourseValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "course",
    summary = "Create course",
    request_body = CreateCourseValidator,
    responses(
        (status = 201, body = Course),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Menu not found")
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateCourseValidator>,
) -> Result<Response<Course>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let course = state
        .service
        .create_course(
            identity,
            CreateCourseInput {
                menu_id: payload.menu_id,
                name: payload.name,
                order: payload.order,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(course))
}
