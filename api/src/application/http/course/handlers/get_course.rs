use axum::extract::{Path, State};
use chefco_core::domain::menu::{ports::MenuService, value_objects::CourseWithItems};
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
    path = "/{course_id}",
    tag = "course",
    summary = "Get course",
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    responses(
        (status = 200, body = CourseWithItems),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn get_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CourseWithItems>, ApiError> {
    let course = state
        .service
        .get_course(identity, course_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(course))
}
