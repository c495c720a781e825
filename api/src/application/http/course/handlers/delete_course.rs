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
    path = "/{course_id}",
    tag = "course",
    summary = "Delete course",
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn delete_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_course(identity, course_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
