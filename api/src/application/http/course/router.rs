use super::handlers::create_course::{__path_create_course, create_course};
use super::handlers::delete_course::{__path_delete_course, delete_course};
use super::handlers::get_course::{__path_get_course, get_course};
use super::handlers::get_courses::{__path_get_courses, get_courses};
use super::handlers::update_course::{__path_update_course, update_course};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_courses, get_course, create_course, update_course, delete_course))]
pub struct CourseApiDoc;

pub fn course_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/courses", root_path), get(get_courses))
        .route(&format!("{}/courses", root_path), post(create_course))
        .route(
            &format!("{}/courses/{{course_id}}", root_path),
            get(get_course),
        )
        .route(
            &format!("{}/courses/{{course_id}}", root_path),
            patch(update_course),
        )
        .route(
            &format!("{}/courses/{{course_id}}", root_path),
            delete(delete_course),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
