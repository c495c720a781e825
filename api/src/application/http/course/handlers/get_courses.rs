use axum::extract::State;
use chefco_core::domain::menu::{ports::MenuService, value_objects::CourseWithItems};
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
pub struct GetCoursesResponse {
    pub data: Vec<CourseWithItems>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "course",
    summary = "Get courses",
    responses(
        (status = 200, body = GetCoursesResponse)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetCoursesResponse>, ApiError> {
    let courses = state
        .service
        .get_courses(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCoursesResponse { data: courses }))
}
