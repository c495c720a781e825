use axum::{
    Json,
    extract::{Path, State},
};
use chefco_core::domain::menu::{
    entities::Course,
    ports::MenuService,
    value_objects::UpdateCourseInput,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        course::validators::UpdateCourseValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{course_id}",
    tag = "course",
    summary = "Update course",
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    request_body = UpdateCourseValidator,
    responses(
        (status = 200, body = Course),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn update_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateCourseValidator>,
) -> Result<Response<Course>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let course = state
        .service
        .update_course(
            identity,
            UpdateCourseInput {
                course_id,
                name: payload.name,
                order: payload.order,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(course))
}
